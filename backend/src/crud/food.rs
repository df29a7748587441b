use crate::crud::{require_positive, require_text};
use crate::db::Gateway;
use crate::error::AppResult;
use common::model::food::{FoodForm, FoodUpdate};
use common::model::MutationOutcome;
use log::info;
use rusqlite::params;

pub fn create(gw: &Gateway, form: &FoodForm) -> AppResult<MutationOutcome> {
    require_text("Food name", &form.food_name)?;
    require_positive("Quantity", form.quantity)?;
    require_positive("Provider ID", form.provider_id)?;
    require_text("Location", &form.location)?;

    let affected = gw.execute(
        "INSERT INTO food (
             Food_Name, Quantity, Expiry_Date, Provider_ID,
             Provider_Type, Location, Food_Type, Meal_Type
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            form.food_name,
            form.quantity,
            form.expiry_date,
            form.provider_id,
            form.provider_type.as_str(),
            form.location,
            form.food_type.as_str(),
            form.meal_type.as_str()
        ],
    )?;
    info!("food listing '{}' added for provider {}", form.food_name, form.provider_id);
    Ok(MutationOutcome { affected })
}

/// Sets name, quantity and expiry date of one listing.
pub fn update(gw: &Gateway, update: &FoodUpdate) -> AppResult<MutationOutcome> {
    require_positive("Food ID", update.food_id)?;
    require_text("Food name", &update.food_name)?;
    require_positive("Quantity", update.quantity)?;

    let affected = gw.execute(
        "UPDATE food SET Food_Name = ?1, Quantity = ?2, Expiry_Date = ?3 WHERE Food_ID = ?4",
        params![update.food_name, update.quantity, update.expiry_date, update.food_id],
    )?;
    info!("food listing {} updated ({affected} rows)", update.food_id);
    Ok(MutationOutcome { affected })
}

pub fn delete(gw: &Gateway, food_id: i64) -> AppResult<MutationOutcome> {
    require_positive("Food ID", food_id)?;
    let affected = gw.execute("DELETE FROM food WHERE Food_ID = ?1", [food_id])?;
    info!("food listing {food_id} deleted ({affected} rows)");
    Ok(MutationOutcome { affected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::read;
    use crate::error::AppError;
    use crate::test_support::{food_form, fresh_gateway, seed_food, seed_provider};
    use chrono::NaiveDate;
    use common::model::rowset::Cell;
    use common::model::table::Table;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_field_round_trips() {
        let (_dir, gw) = fresh_gateway();
        let provider_id = seed_provider(&gw, "Alpha Foods", "Lakeview");
        create(&gw, &food_form(provider_id, "Lakeview", 12)).unwrap();

        let data = read(&gw, Table::Food).unwrap();
        let set = data.rows().unwrap();
        assert_eq!(
            set.rows[0][1..].to_vec(),
            vec![
                Cell::from("Vegetable Curry"),
                Cell::Integer(12),
                Cell::from("2030-06-01"),
                Cell::Integer(provider_id),
                Cell::from("Restaurant"),
                Cell::from("Lakeview"),
                Cell::from("Vegetarian"),
                Cell::from("Dinner"),
            ]
        );
    }

    #[test]
    fn quantity_extremes_round_trip() {
        let (_dir, gw) = fresh_gateway();
        let provider_id = seed_provider(&gw, "Alpha Foods", "Lakeview");
        for quantity in [1, i64::MAX] {
            create(&gw, &food_form(provider_id, "Lakeview", quantity)).unwrap();
        }
        let data = read(&gw, Table::Food).unwrap();
        let quantities = data.rows().unwrap().column("Quantity");
        assert_eq!(quantities, vec![&Cell::Integer(1), &Cell::Integer(i64::MAX)]);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let (_dir, gw) = fresh_gateway();
        let provider_id = seed_provider(&gw, "Alpha Foods", "Lakeview");
        assert!(matches!(
            create(&gw, &food_form(provider_id, "Lakeview", 0)),
            Err(AppError::Validation { field: "Quantity", .. })
        ));
    }

    #[test]
    fn unknown_provider_is_a_storage_error() {
        let (_dir, gw) = fresh_gateway();
        assert!(matches!(
            create(&gw, &food_form(404, "Lakeview", 3)),
            Err(AppError::Storage(_))
        ));
    }

    #[test]
    fn update_changes_name_quantity_and_expiry() {
        let (_dir, gw) = fresh_gateway();
        let food_id = seed_food(&gw, "Lakeview", 3);
        let expiry = NaiveDate::from_ymd_opt(2031, 1, 2).unwrap();
        update(
            &gw,
            &FoodUpdate {
                food_id,
                food_name: "Bread Rolls".into(),
                quantity: 40,
                expiry_date: expiry,
            },
        )
        .unwrap();

        let data = read(&gw, Table::Food).unwrap();
        let set = data.rows().unwrap();
        assert_eq!(set.get(0, "Food_Name"), Some(&Cell::from("Bread Rolls")));
        assert_eq!(set.get(0, "Quantity"), Some(&Cell::Integer(40)));
        assert_eq!(set.get(0, "Expiry_Date"), Some(&Cell::from("2031-01-02")));
        assert_eq!(set.get(0, "Location"), Some(&Cell::from("Lakeview")));
    }

    #[test]
    fn delete_by_id() {
        let (_dir, gw) = fresh_gateway();
        let food_id = seed_food(&gw, "Lakeview", 3);
        assert_eq!(delete(&gw, food_id).unwrap().affected, 1);
        assert_eq!(delete(&gw, food_id).unwrap().affected, 0);
        assert!(read(&gw, Table::Food).unwrap().rows().is_none());
    }
}
