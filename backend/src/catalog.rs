//! # Query Catalog
//!
//! A fixed list of analytical questions about the dataset, each paired with
//! the SQL that answers it. The dashboard shows them in two explorers and
//! runs one by its exact label through [`run_named_query`].
//!
//! Templates with [`Arity::CityFilter`] carry exactly one placeholder (`?1`)
//! matched with `LIKE` against the filter value wrapped in `%...%`.

use crate::db::Gateway;
use crate::error::{AppError, AppResult};
use common::model::rowset::RowSet;
use common::requests::Explorer;
use log::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    /// One substring match on a city column.
    CityFilter,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub label: &'static str,
    pub sql: &'static str,
    pub arity: Arity,
    pub explorer: Explorer,
}

const fn primary(label: &'static str, sql: &'static str) -> CatalogEntry {
    CatalogEntry {
        label,
        sql,
        arity: Arity::None,
        explorer: Explorer::Primary,
    }
}

const fn secondary(label: &'static str, sql: &'static str) -> CatalogEntry {
    CatalogEntry {
        label,
        sql,
        arity: Arity::None,
        explorer: Explorer::Secondary,
    }
}

const fn city_filtered(label: &'static str, sql: &'static str) -> CatalogEntry {
    CatalogEntry {
        label,
        sql,
        arity: Arity::CityFilter,
        explorer: Explorer::Primary,
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    primary(
        "How many food providers and receivers are there in each city?",
        "SELECT City, SUM(is_provider) AS Total_Providers, SUM(is_receiver) AS Total_Receivers
         FROM (SELECT City, 1 AS is_provider, 0 AS is_receiver FROM providers
               UNION ALL
               SELECT City, 0, 1 FROM receivers)
         GROUP BY City
         ORDER BY City",
    ),
    primary(
        "Which type of food provider contributes the most food?",
        "SELECT Provider_Type, SUM(Quantity) AS Total_Quantity, COUNT(*) AS Listings
         FROM food
         GROUP BY Provider_Type
         ORDER BY Total_Quantity DESC",
    ),
    city_filtered(
        "Contact info of providers in a city",
        "SELECT Name, City, Contact FROM providers WHERE City LIKE ?1 ORDER BY Name",
    ),
    city_filtered(
        "Contact info of receivers in a city",
        "SELECT Name, Type, City, Contact FROM receivers WHERE City LIKE ?1 ORDER BY Name",
    ),
    primary(
        "Receivers with most food claims",
        "SELECT c.Receiver_ID, r.Name, COUNT(*) AS Total_Claims
         FROM claims c
         JOIN receivers r ON r.Receiver_ID = c.Receiver_ID
         GROUP BY c.Receiver_ID, r.Name
         ORDER BY Total_Claims DESC",
    ),
    primary(
        "Total quantity of food available",
        "SELECT SUM(Quantity) AS Total_Quantity FROM food",
    ),
    primary(
        "City with highest food listings",
        "SELECT Location AS City, COUNT(*) AS Num_Food_Listings
         FROM food
         GROUP BY Location
         ORDER BY Num_Food_Listings DESC
         LIMIT 1",
    ),
    primary(
        "Most common food types",
        "SELECT Food_Type, COUNT(*) AS Count FROM food GROUP BY Food_Type ORDER BY Count DESC",
    ),
    primary(
        "Food listings expiring in next 3 days",
        "SELECT Food_ID, Food_Name, Quantity, Expiry_Date, Location
         FROM food
         WHERE date(Expiry_Date) BETWEEN date('now') AND date('now', '+3 day')
         ORDER BY Expiry_Date",
    ),
    primary(
        "Food listings already expired",
        "SELECT Food_ID, Food_Name, Quantity, Expiry_Date, Location
         FROM food
         WHERE date(Expiry_Date) < date('now')
         ORDER BY Expiry_Date DESC",
    ),
    primary(
        "Claims made in the last 3 days",
        "SELECT c.Claim_ID, f.Food_Name, r.Name AS Receiver_Name, c.Status, c.Timestamp
         FROM claims c
         JOIN food f ON c.Food_ID = f.Food_ID
         JOIN receivers r ON c.Receiver_ID = r.Receiver_ID
         WHERE c.Timestamp >= date('now', '-3 day')
         ORDER BY c.Timestamp DESC",
    ),
    primary(
        "Claims made per food item",
        "SELECT f.Food_Name, COUNT(*) AS Claim_Count
         FROM claims c
         JOIN food f ON c.Food_ID = f.Food_ID
         WHERE c.Status = 'Completed'
         GROUP BY f.Food_ID
         ORDER BY Claim_Count DESC",
    ),
    primary(
        "Provider with most successful claims",
        "SELECT f.Food_ID, f.Food_Name, p.Name AS Provider_Name,
                COUNT(*) OVER (PARTITION BY p.Provider_ID) AS Successful_Claims
         FROM providers p
         JOIN food f ON p.Provider_ID = f.Provider_ID
         JOIN claims c ON c.Food_ID = f.Food_ID
         WHERE c.Status = 'Completed'
         ORDER BY Successful_Claims DESC
         LIMIT 1",
    ),
    primary(
        "City with fastest claim rate",
        "SELECT p.City, COUNT(*) AS Completed_Claims
         FROM claims c
         JOIN food f ON c.Food_ID = f.Food_ID
         JOIN providers p ON f.Provider_ID = p.Provider_ID
         WHERE c.Status = 'Completed'
         GROUP BY p.City
         ORDER BY Completed_Claims DESC
         LIMIT 5",
    ),
    primary(
        "Claim status percentages",
        "SELECT Status, ROUND(COUNT(*) * 100.0 / (SELECT COUNT(*) FROM claims), 2) AS Percentage
         FROM claims
         GROUP BY Status",
    ),
    primary(
        "Claims per day",
        "SELECT date(Timestamp) AS Day, COUNT(*) AS Claims
         FROM claims
         GROUP BY Day
         ORDER BY Day DESC",
    ),
    primary(
        "Average quantity of food claimed per receiver",
        "SELECT c.Receiver_ID, ROUND(AVG(f.Quantity), 2) AS Avg_Claimed_Quantity
         FROM claims c
         JOIN food f ON c.Food_ID = f.Food_ID
         WHERE c.Status = 'Completed'
         GROUP BY c.Receiver_ID
         ORDER BY Avg_Claimed_Quantity DESC",
    ),
    primary(
        "Total quantity of food donated by each provider",
        "SELECT p.Provider_ID, p.Name, SUM(f.Quantity) AS Total_Donated
         FROM providers p
         JOIN food f ON p.Provider_ID = f.Provider_ID
         GROUP BY p.Provider_ID, p.Name
         ORDER BY Total_Donated DESC",
    ),
    primary(
        "Quantity of food listed per meal type",
        "SELECT Meal_Type, SUM(Quantity) AS Total_Quantity, COUNT(*) AS Listings
         FROM food
         GROUP BY Meal_Type
         ORDER BY Total_Quantity DESC",
    ),
    primary(
        "Which meal type (breakfast, lunch, dinner, snacks) is claimed the most",
        "SELECT f.Meal_Type, COUNT(*) AS Total_Claims
         FROM claims c
         JOIN food f ON c.Food_ID = f.Food_ID
         WHERE c.Status = 'Completed'
         GROUP BY f.Meal_Type
         ORDER BY Total_Claims DESC
         LIMIT 1",
    ),
    secondary(
        "Find all food items that have not been claimed yet",
        "SELECT f.Food_Name, f.Quantity
         FROM food f
         LEFT JOIN claims c ON f.Food_ID = c.Food_ID
         WHERE c.Claim_ID IS NULL
         GROUP BY f.Food_Name",
    ),
    secondary(
        "Providers who have offered food items that have been claimed by receivers who are NGOs",
        "SELECT DISTINCT p.Provider_ID, p.Name AS Provider_Name, p.City
         FROM providers p
         JOIN food f ON p.Provider_ID = f.Provider_ID
         JOIN claims c ON f.Food_ID = c.Food_ID
         JOIN receivers r ON c.Receiver_ID = r.Receiver_ID
         WHERE r.Type = 'NGO' AND c.Status = 'Completed'",
    ),
    secondary(
        "Cities where claims are frequently canceled",
        "SELECT r.City, COUNT(*) AS Canceled_Claims
         FROM claims c
         JOIN receivers r ON c.Receiver_ID = r.Receiver_ID
         WHERE c.Status = 'Canceled'
         GROUP BY r.City
         ORDER BY Canceled_Claims DESC",
    ),
    secondary(
        "Food items that were listed but never claimed",
        "SELECT f.Food_ID, f.Food_Name
         FROM food f
         LEFT JOIN claims c ON f.Food_ID = c.Food_ID
         WHERE c.Food_ID IS NULL",
    ),
    secondary(
        "Distribution of food types per city",
        "SELECT f.Location AS City, f.Food_Type, COUNT(*) AS Count
         FROM food f
         GROUP BY f.Location, f.Food_Type
         ORDER BY City, Count DESC",
    ),
];

/// Entries shown by one explorer, in display order.
pub fn entries(explorer: Explorer) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |e| e.explorer == explorer)
}

pub fn lookup(label: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.label == label)
}

/// Runs the catalog query named `label`.
///
/// `filter` is required by city-filtered entries and ignored by the others.
pub fn run_named_query(gw: &Gateway, label: &str, filter: Option<&str>) -> AppResult<RowSet> {
    let entry = lookup(label).ok_or_else(|| {
        error!("unknown catalog label: {label}");
        AppError::UnknownQueryLabel(label.to_string())
    })?;

    match entry.arity {
        Arity::None => gw.query(entry.sql, []),
        Arity::CityFilter => {
            let value = filter
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    error!("catalog query '{label}' called without a filter");
                    AppError::MissingParameter(label.to_string())
                })?;
            debug!("city filter for '{label}': {value}");
            gw.query(entry.sql, [format!("%{value}%")])
        }
    }
}
