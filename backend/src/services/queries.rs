//! # Query Explorers
//!
//! - `GET /api/queries/primary` and `GET /api/queries/secondary` list the
//!   catalog labels of each explorer and whether they take a city filter.
//! - `POST /api/queries/run` runs one catalog entry by exact label and
//!   returns its `RowSet`.

use crate::catalog::{self, Arity};
use crate::db::Gateway;
use crate::services::{respond, run_blocking};
use actix_web::web::{get, post, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use common::requests::{Explorer, QueryDescriptor, QueryList, RunQueryRequest};
use log::info;

const API_PATH: &str = "/api/queries";

/// Configures and returns the Actix `Scope` for both query explorers.
///
/// # Registered Routes:
///
/// *   **`POST /run`**: `process`, runs one catalog entry.
/// *   **`GET /primary`**: `primary`, the SQL Query Explorer's labels.
/// *   **`GET /secondary`**: `secondary`, the Additional Query Explorer's labels.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/run", post().to(process))
        .route("/primary", get().to(primary))
        .route("/secondary", get().to(secondary))
}

fn query_list(explorer: Explorer) -> QueryList {
    QueryList {
        explorer,
        queries: catalog::entries(explorer)
            .map(|entry| QueryDescriptor {
                label: entry.label.to_string(),
                needs_filter: entry.arity == Arity::CityFilter,
            })
            .collect(),
    }
}

/// Handler for `GET /api/queries/primary`.
async fn primary() -> impl Responder {
    HttpResponse::Ok().json(query_list(Explorer::Primary))
}

/// Handler for `GET /api/queries/secondary`.
async fn secondary() -> impl Responder {
    HttpResponse::Ok().json(query_list(Explorer::Secondary))
}

/// Actix web handler for `POST /api/queries/run`.
///
/// An unknown label or a missing city filter answers `400`; a query that
/// matches nothing answers an empty `RowSet` with its column names.
pub(crate) async fn process(
    gw: web::Data<Gateway>,
    req: web::Json<RunQueryRequest>,
) -> impl Responder {
    let RunQueryRequest { label, filter } = req.into_inner();
    info!("running catalog query '{label}'");
    respond(
        run_blocking(&gw, move |gw| {
            catalog::run_named_query(gw, &label, filter.as_deref())
        })
        .await,
    )
}
