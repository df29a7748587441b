//! Claims carry a caller-chosen id and a `Timestamp` recording the last
//! status change. Timestamps are UTC with millisecond precision
//! (`YYYY-MM-DD HH:MM:SS.SSS`), so they sort as text.

use crate::crud::require_positive;
use crate::db::Gateway;
use crate::error::{AppError, AppResult};
use common::model::claim::{ClaimForm, ClaimUpdate};
use common::model::MutationOutcome;
use log::{info, warn};
use rusqlite::params;

pub fn create(gw: &Gateway, form: &ClaimForm) -> AppResult<MutationOutcome> {
    require_positive("Claim ID", form.claim_id)?;
    require_positive("Food ID", form.food_id)?;
    require_positive("Receiver ID", form.receiver_id)?;

    // Inserts nothing when the id is taken, even on tables without a primary key.
    let affected = gw.execute(
        "INSERT INTO claims (Claim_ID, Food_ID, Receiver_ID, Status, Timestamp)
         SELECT ?1, ?2, ?3, ?4, strftime('%Y-%m-%d %H:%M:%f', 'now')
         WHERE NOT EXISTS (SELECT 1 FROM claims WHERE Claim_ID = ?1)",
        params![form.claim_id, form.food_id, form.receiver_id, form.status.as_str()],
    )?;
    if affected == 0 {
        warn!("claim id {} already in use", form.claim_id);
        return Err(AppError::DuplicateClaim(form.claim_id));
    }
    info!("claim {} added as {}", form.claim_id, form.status);
    Ok(MutationOutcome { affected })
}

/// Writes a new status and moves `Timestamp` forward.
///
/// The new timestamp is the current time, or one millisecond past the stored
/// one when the clock has not moved on since, so it always strictly increases.
/// A stored value that is missing or not a date is replaced by the current time.
pub fn update(gw: &Gateway, update: &ClaimUpdate) -> AppResult<MutationOutcome> {
    require_positive("Claim ID", update.claim_id)?;
    let affected = gw.execute(
        "UPDATE claims
         SET Status = ?1,
             Timestamp = CASE
                 WHEN strftime('%Y-%m-%d %H:%M:%f', Timestamp) IS NULL
                     OR strftime('%Y-%m-%d %H:%M:%f', 'now') > Timestamp
                     THEN strftime('%Y-%m-%d %H:%M:%f', 'now')
                 ELSE strftime('%Y-%m-%d %H:%M:%f', Timestamp, '+0.001 seconds')
             END
         WHERE Claim_ID = ?2",
        params![update.status.as_str(), update.claim_id],
    )?;
    info!("claim {} set to {} ({affected} rows)", update.claim_id, update.status);
    Ok(MutationOutcome { affected })
}

pub fn delete(gw: &Gateway, claim_id: i64) -> AppResult<MutationOutcome> {
    require_positive("Claim ID", claim_id)?;
    let affected = gw.execute("DELETE FROM claims WHERE Claim_ID = ?1", [claim_id])?;
    info!("claim {claim_id} deleted ({affected} rows)");
    Ok(MutationOutcome { affected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::run_named_query;
    use crate::crud::{food, providers, read};
    use crate::test_support::{food_form, fresh_gateway, provider_form, seed_food, seed_receiver};
    use common::model::claim::ClaimStatus;
    use common::model::rowset::Cell;
    use common::model::table::Table;
    use pretty_assertions::assert_eq;

    fn timestamp_of(gw: &Gateway, claim_id: i64) -> String {
        let data = read(gw, Table::Claims).unwrap();
        let set = data.rows().unwrap();
        let row = set.find("Claim_ID", &Cell::Integer(claim_id)).unwrap();
        row[4].as_str().unwrap().to_string()
    }

    fn pending(claim_id: i64, food_id: i64, receiver_id: i64) -> ClaimForm {
        ClaimForm {
            claim_id,
            food_id,
            receiver_id,
            status: ClaimStatus::Pending,
        }
    }

    #[test]
    fn create_stamps_the_current_time() {
        let (_dir, gw) = fresh_gateway();
        let food_id = seed_food(&gw, "Lakeview", 3);
        let receiver_id = seed_receiver(&gw, "Hope Shelter", "Lakeview");
        create(&gw, &pending(10, food_id, receiver_id)).unwrap();

        let data = read(&gw, Table::Claims).unwrap();
        let set = data.rows().unwrap();
        assert_eq!(
            set.rows[0][..4].to_vec(),
            vec![
                Cell::Integer(10),
                Cell::Integer(food_id),
                Cell::Integer(receiver_id),
                Cell::from("Pending"),
            ]
        );
        let stamp = timestamp_of(&gw, 10);
        assert_eq!(stamp.len(), "2025-01-01 00:00:00.000".len());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let (_dir, gw) = fresh_gateway();
        let food_id = seed_food(&gw, "Lakeview", 3);
        let receiver_id = seed_receiver(&gw, "Hope Shelter", "Lakeview");
        create(&gw, &pending(10, food_id, receiver_id)).unwrap();
        assert!(matches!(
            create(&gw, &pending(10, food_id, receiver_id)),
            Err(AppError::DuplicateClaim(10))
        ));
        assert_eq!(gw.count(Table::Claims).unwrap(), 1);
    }

    #[test]
    fn every_status_update_advances_the_timestamp() {
        let (_dir, gw) = fresh_gateway();
        let food_id = seed_food(&gw, "Lakeview", 3);
        let receiver_id = seed_receiver(&gw, "Hope Shelter", "Lakeview");
        create(&gw, &pending(1, food_id, receiver_id)).unwrap();

        let mut previous = timestamp_of(&gw, 1);
        for status in [ClaimStatus::Completed, ClaimStatus::Pending, ClaimStatus::Canceled] {
            let outcome = update(&gw, &ClaimUpdate { claim_id: 1, status }).unwrap();
            assert_eq!(outcome.affected, 1);
            let current = timestamp_of(&gw, 1);
            assert!(current > previous, "{current} should follow {previous}");
            previous = current;
        }

        let data = read(&gw, Table::Claims).unwrap();
        assert_eq!(data.rows().unwrap().get(0, "Status"), Some(&Cell::from("Canceled")));
    }

    #[test]
    fn unparseable_timestamps_are_reset_to_now() {
        let (_dir, gw) = fresh_gateway();
        let food_id = seed_food(&gw, "Lakeview", 3);
        let receiver_id = seed_receiver(&gw, "Hope Shelter", "Lakeview");
        for (claim_id, stamp) in [
            (1, "2025-03-05 05:43:00"),
            (2, "3/5/2025 5:43"),
            (3, "2099-01-01 00:00:00"),
        ] {
            gw.execute(
                "INSERT INTO claims (Claim_ID, Food_ID, Receiver_ID, Status, Timestamp)
                 VALUES (?1, ?2, ?3, 'Pending', ?4)",
                params![claim_id, food_id, receiver_id, stamp],
            )
            .unwrap();
        }

        let started = gw
            .query("SELECT strftime('%Y-%m-%d %H:%M:%f', 'now') AS now", [])
            .unwrap()
            .rows[0][0]
            .as_str()
            .unwrap()
            .to_string();
        for claim_id in 1..=3 {
            let outcome = update(
                &gw,
                &ClaimUpdate {
                    claim_id,
                    status: ClaimStatus::Completed,
                },
            )
            .unwrap();
            assert_eq!(outcome.affected, 1);
        }

        assert!(timestamp_of(&gw, 1) >= started);
        assert!(timestamp_of(&gw, 2) >= started);
        assert_eq!(timestamp_of(&gw, 3), "2099-01-01 00:00:00.001");

        let data = read(&gw, Table::Claims).unwrap();
        let set = data.rows().unwrap();
        let statuses = set.column("Status");
        assert_eq!(statuses.len(), 3);
        assert!(statuses.iter().all(|c| **c == Cell::from("Completed")));
    }

    #[test]
    fn delete_by_id_and_missing_ids_are_a_no_op() {
        let (_dir, gw) = fresh_gateway();
        let food_id = seed_food(&gw, "Lakeview", 3);
        let receiver_id = seed_receiver(&gw, "Hope Shelter", "Lakeview");
        create(&gw, &pending(3, food_id, receiver_id)).unwrap();
        assert_eq!(delete(&gw, 3).unwrap().affected, 1);
        assert_eq!(delete(&gw, 3).unwrap().affected, 0);
        assert!(read(&gw, Table::Claims).unwrap().rows().is_none());
    }

    #[test]
    fn completing_a_claim_shows_up_in_the_status_breakdown() {
        let (_dir, gw) = fresh_gateway();
        providers::create(&gw, &provider_form("Alpha Foods", "Lakeview")).unwrap();
        let provider_id = gw
            .scalar("SELECT Provider_ID FROM providers WHERE Name = ?1", ["Alpha Foods"])
            .unwrap();
        food::create(&gw, &food_form(provider_id, "Lakeview", 8)).unwrap();
        let food_id = gw.scalar("SELECT MAX(Food_ID) FROM food", []).unwrap();
        let receiver_id = seed_receiver(&gw, "Hope Shelter", "Lakeview");

        create(&gw, &pending(1, food_id, receiver_id)).unwrap();
        let created_at = timestamp_of(&gw, 1);
        update(
            &gw,
            &ClaimUpdate {
                claim_id: 1,
                status: ClaimStatus::Completed,
            },
        )
        .unwrap();

        let set = run_named_query(&gw, "Claim status percentages", None).unwrap();
        let completed = set.find("Status", &"Completed".into()).unwrap();
        assert!(completed[1].as_f64().unwrap() > 0.0);
        assert!(timestamp_of(&gw, 1) > created_at);

        let fastest = run_named_query(&gw, "City with fastest claim rate", None).unwrap();
        assert_eq!(fastest.get(0, "City"), Some(&Cell::from("Lakeview")));
    }
}
