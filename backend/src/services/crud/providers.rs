//! Provider forms. Providers are addressed by `Name` for both update and
//! delete, and a name shared by several rows is refused with `409`.

use crate::crud::providers;
use crate::db::Gateway;
use crate::services::crud::read_table;
use crate::services::{respond, run_blocking};
use actix_web::{web, Responder};
use common::model::provider::{ProviderForm, ProviderUpdate};
use common::model::table::Table;

/// Handler for `GET /api/crud/providers`.
pub(crate) async fn read(gw: web::Data<Gateway>) -> impl Responder {
    read_table(gw, Table::Providers).await
}

/// Handler for `POST /api/crud/providers`. Blank fields are rejected with `400`.
pub(crate) async fn create(
    gw: web::Data<Gateway>,
    form: web::Json<ProviderForm>,
) -> impl Responder {
    let form = form.into_inner();
    respond(run_blocking(&gw, move |gw| providers::create(gw, &form)).await)
}

/// Handler for `PUT /api/crud/providers`.
///
/// Rewrites every column of the provider currently named `current_name`.
/// An unknown name answers `{"affected": 0}`.
pub(crate) async fn update(
    gw: web::Data<Gateway>,
    update: web::Json<ProviderUpdate>,
) -> impl Responder {
    let update = update.into_inner();
    respond(run_blocking(&gw, move |gw| providers::update(gw, &update)).await)
}

/// Handler for `DELETE /api/crud/providers/{name}`.
///
/// A provider that still has food listings cannot be deleted; the engine's
/// foreign key error comes back as `503`.
pub(crate) async fn delete(gw: web::Data<Gateway>, name: web::Path<String>) -> impl Responder {
    let name = name.into_inner();
    respond(run_blocking(&gw, move |gw| providers::delete(gw, &name)).await)
}
