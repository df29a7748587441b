//! # CRUD Manager
//!
//! Routes the four entity forms to the CRUD operations:
//!
//! | method | path                             | operation                    |
//! |--------|----------------------------------|------------------------------|
//! | GET    | `/api/crud/{entity}`             | read the whole table         |
//! | POST   | `/api/crud/{entity}`             | create from the JSON form    |
//! | PUT    | `/api/crud/{entity}`             | update from the JSON form    |
//! | DELETE | `/api/crud/providers/{name}`     | delete provider by name      |
//! | DELETE | `/api/crud/receivers/{name}`     | delete receiver by name      |
//! | DELETE | `/api/crud/food/{food_id}`       | delete listing by id         |
//! | DELETE | `/api/crud/claims/{claim_id}`    | delete claim by id           |
//!
//! Mutations answer with `{"affected": n}`; reads with the table data.

mod claims;
mod food;
mod providers;
mod receivers;

use crate::db::Gateway;
use crate::services::{respond, run_blocking};
use actix_web::web::{delete, get, post, put, resource, scope};
use actix_web::{web, HttpResponse, Scope};
use common::model::table::Table;

/// The base path for all CRUD endpoints.
const API_PATH: &str = "/api/crud";

/// Configures and returns the Actix `Scope` for the CRUD Manager.
///
/// # Registered Routes:
///
/// *   **`GET|POST|PUT /providers`**: `providers::{read, create, update}`.
/// *   **`DELETE /providers/{name}`**: `providers::delete`.
/// *   **`GET|POST|PUT /receivers`**: `receivers::{read, create, update}`.
/// *   **`DELETE /receivers/{name}`**: `receivers::delete`.
/// *   **`GET|POST|PUT /food`**: `food::{read, create, update}`.
/// *   **`DELETE /food/{food_id}`**: `food::delete`.
/// *   **`GET|POST|PUT /claims`**: `claims::{read, create, update}`.
/// *   **`DELETE /claims/{claim_id}`**: `claims::delete`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("/providers")
                .route(get().to(providers::read))
                .route(post().to(providers::create))
                .route(put().to(providers::update)),
        )
        .route("/providers/{name}", delete().to(providers::delete))
        .service(
            resource("/receivers")
                .route(get().to(receivers::read))
                .route(post().to(receivers::create))
                .route(put().to(receivers::update)),
        )
        .route("/receivers/{name}", delete().to(receivers::delete))
        .service(
            resource("/food")
                .route(get().to(food::read))
                .route(post().to(food::create))
                .route(put().to(food::update)),
        )
        .route("/food/{food_id}", delete().to(food::delete))
        .service(
            resource("/claims")
                .route(get().to(claims::read))
                .route(post().to(claims::create))
                .route(put().to(claims::update)),
        )
        .route("/claims/{claim_id}", delete().to(claims::delete))
}

/// Shared body of the four `GET` handlers.
async fn read_table(gw: web::Data<Gateway>, table: Table) -> HttpResponse {
    respond(run_blocking(&gw, move |gw| crate::crud::read(gw, table)).await)
}
