//! Fixtures shared by the unit tests: a throwaway database per test plus
//! small seeding helpers built on the CRUD operations.

use crate::crud;
use crate::db::Gateway;
use chrono::NaiveDate;
use common::model::food::{FoodForm, FoodType, MealType, ProviderType};
use common::model::provider::ProviderForm;
use common::model::receiver::ReceiverForm;
use tempfile::TempDir;

/// A gateway on a new database file with the schema in place. Keep the
/// `TempDir` alive for as long as the gateway is used.
pub fn fresh_gateway() -> (TempDir, Gateway) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let gw = Gateway::new(dir.path().join("food_wastage.db"));
    gw.ensure_schema().expect("create schema");
    (dir, gw)
}

pub fn provider_form(name: &str, city: &str) -> ProviderForm {
    ProviderForm {
        name: name.to_string(),
        provider_type: "Restaurant".to_string(),
        address: "12 Market Street".to_string(),
        city: city.to_string(),
        contact: "555-0199".to_string(),
    }
}

pub fn food_form(provider_id: i64, city: &str, quantity: i64) -> FoodForm {
    FoodForm {
        food_name: "Vegetable Curry".to_string(),
        quantity,
        expiry_date: NaiveDate::from_ymd_opt(2030, 6, 1).expect("valid date"),
        provider_id,
        provider_type: ProviderType::Restaurant,
        location: city.to_string(),
        food_type: FoodType::Vegetarian,
        meal_type: MealType::Dinner,
    }
}

fn last_id(gw: &Gateway, table: &str, column: &str) -> i64 {
    gw.scalar(&format!("SELECT MAX({column}) FROM {table}"), [])
        .expect("read last id")
}

/// Inserts a provider and returns its id.
pub fn seed_provider(gw: &Gateway, name: &str, city: &str) -> i64 {
    crud::providers::create(gw, &provider_form(name, city)).expect("seed provider");
    last_id(gw, "providers", "Provider_ID")
}

/// Inserts a provider and one listing from it; returns the listing id.
pub fn seed_food(gw: &Gateway, city: &str, quantity: i64) -> i64 {
    let provider_id = seed_provider(gw, "Seed Kitchen", city);
    crud::food::create(gw, &food_form(provider_id, city, quantity)).expect("seed food");
    last_id(gw, "food", "Food_ID")
}

pub fn seed_receiver(gw: &Gateway, name: &str, city: &str) -> i64 {
    crud::receivers::create(
        gw,
        &ReceiverForm {
            name: name.to_string(),
            receiver_type: "NGO".to_string(),
            contact: "555-0142".to_string(),
            city: city.to_string(),
        },
    )
    .expect("seed receiver");
    last_id(gw, "receivers", "Receiver_ID")
}
