use crate::crud::claims;
use crate::db::Gateway;
use crate::services::crud::read_table;
use crate::services::{respond, run_blocking};
use actix_web::{web, Responder};
use common::model::claim::{ClaimForm, ClaimUpdate};
use common::model::table::Table;

/// Handler for `GET /api/crud/claims`.
pub(crate) async fn read(gw: web::Data<Gateway>) -> impl Responder {
    read_table(gw, Table::Claims).await
}

/// Handler for `POST /api/crud/claims`.
///
/// The claim id comes from the form. Reusing one answers `409 Conflict`.
pub(crate) async fn create(gw: web::Data<Gateway>, form: web::Json<ClaimForm>) -> impl Responder {
    let form = form.into_inner();
    respond(run_blocking(&gw, move |gw| claims::create(gw, &form)).await)
}

/// Handler for `PUT /api/crud/claims`.
///
/// Status change; the claim's timestamp moves forward with it.
pub(crate) async fn update(
    gw: web::Data<Gateway>,
    update: web::Json<ClaimUpdate>,
) -> impl Responder {
    let update = update.into_inner();
    respond(run_blocking(&gw, move |gw| claims::update(gw, &update)).await)
}

/// Handler for `DELETE /api/crud/claims/{claim_id}`.
pub(crate) async fn delete(gw: web::Data<Gateway>, claim_id: web::Path<i64>) -> impl Responder {
    let claim_id = claim_id.into_inner();
    respond(run_blocking(&gw, move |gw| claims::delete(gw, claim_id)).await)
}
