//! # Home Dashboard
//!
//! `GET /api/home` returns the landing page text together with the current
//! row count of every table.

use crate::db::Gateway;
use crate::error::AppResult;
use crate::services::{respond, run_blocking};
use actix_web::web::{get, scope};
use actix_web::{web, Responder, Scope};
use common::model::table::Table;
use common::requests::{HomeSummary, TableCount};

const API_PATH: &str = "/api/home";

const TITLE: &str = "Local Food Wastage Management System";

const OBJECTIVE: &str = "A platform aimed at tackling food wastage by connecting food providers \
(restaurants, grocery stores, ...) with receivers (individuals, NGOs, charities, ...) \
to distribute surplus food.";

/// Configures and returns the Actix `Scope` for the landing page.
///
/// # Registered Routes:
///
/// *   **`GET /api/home`**: `process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

/// Actix web handler for `GET /api/home`. A failed count answers `503`.
pub(crate) async fn process(gw: web::Data<Gateway>) -> impl Responder {
    respond(run_blocking(&gw, summary).await)
}

fn summary(gw: &Gateway) -> AppResult<HomeSummary> {
    let counts = Table::ALL
        .into_iter()
        .map(|table| {
            Ok(TableCount {
                table,
                label: table.label().to_string(),
                rows: gw.count(table)?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(HomeSummary {
        title: TITLE.to_string(),
        objective: OBJECTIVE.to_string(),
        counts,
    })
}
