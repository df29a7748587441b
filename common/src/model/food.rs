use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of business that posted a listing. Stored as its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderType {
    #[serde(rename = "Catering Service")]
    CateringService,
    #[serde(rename = "Grocery Store")]
    GroceryStore,
    Restaurant,
    Supermarket,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::CateringService => "Catering Service",
            ProviderType::GroceryStore => "Grocery Store",
            ProviderType::Restaurant => "Restaurant",
            ProviderType::Supermarket => "Supermarket",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodType {
    Vegetarian,
    Vegan,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
}

impl FoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Vegetarian => "Vegetarian",
            FoodType::Vegan => "Vegan",
            FoodType::NonVegetarian => "Non-Vegetarian",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

/// A new food listing as posted by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodForm {
    pub food_name: String,
    pub quantity: i64,
    /// Serialized as `YYYY-MM-DD`.
    pub expiry_date: NaiveDate,
    pub provider_id: i64,
    pub provider_type: ProviderType,
    /// City the food can be collected in.
    pub location: String,
    pub food_type: FoodType,
    pub meal_type: MealType,
}

/// Editable subset of a listing; the target is picked by `food_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodUpdate {
    pub food_id: i64,
    pub food_name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
}
