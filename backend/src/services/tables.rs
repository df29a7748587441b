//! # Table Viewer
//!
//! - `GET /api/tables` lists the viewable tables with their display labels.
//! - `GET /api/tables/{table}` returns every row of one table, or an
//!   `empty` marker when it has none. Unknown table names get `404`.

use crate::crud;
use crate::db::Gateway;
use crate::error::AppError;
use crate::services::{error_response, respond, run_blocking};
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use common::model::table::Table;
use log::warn;
use serde::Serialize;

const API_PATH: &str = "/api/tables";

#[derive(Serialize)]
struct TableOption {
    table: Table,
    label: &'static str,
}

/// Configures and returns the Actix `Scope` for the table viewer.
///
/// # Registered Routes:
///
/// *   **`GET /api/tables`**: `list`, the selectable tables.
/// *   **`GET /api/tables/{table}`**: `process`, one table's rows.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list))
        .route("/{table}", get().to(process))
}

async fn list() -> impl Responder {
    let options: Vec<TableOption> = Table::ALL
        .into_iter()
        .map(|table| TableOption {
            table,
            label: table.label(),
        })
        .collect();
    HttpResponse::Ok().json(options)
}

/// Actix web handler for `GET /api/tables/{table}`.
///
/// The path segment is parsed into a [`Table`] before any SQL is built.
pub(crate) async fn process(
    table: web::Path<String>,
    gw: web::Data<Gateway>,
) -> impl Responder {
    let table = match table.parse::<Table>() {
        Ok(table) => table,
        Err(e) => {
            warn!("table viewer asked for {}", e.0);
            return error_response(&AppError::from(e));
        }
    };
    respond(run_blocking(&gw, move |gw| crud::read(gw, table)).await)
}
