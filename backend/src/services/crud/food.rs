use crate::crud::food;
use crate::db::Gateway;
use crate::services::crud::read_table;
use crate::services::{respond, run_blocking};
use actix_web::{web, Responder};
use common::model::food::{FoodForm, FoodUpdate};
use common::model::table::Table;

/// Handler for `GET /api/crud/food`.
pub(crate) async fn read(gw: web::Data<Gateway>) -> impl Responder {
    read_table(gw, Table::Food).await
}

/// Handler for `POST /api/crud/food`.
///
/// The quantity must be at least 1 and `provider_id` must name an existing
/// provider. A missing provider fails the foreign key with `503`.
pub(crate) async fn create(gw: web::Data<Gateway>, form: web::Json<FoodForm>) -> impl Responder {
    let form = form.into_inner();
    respond(run_blocking(&gw, move |gw| food::create(gw, &form)).await)
}

/// Handler for `PUT /api/crud/food`. Only name, quantity and expiry date change.
pub(crate) async fn update(
    gw: web::Data<Gateway>,
    update: web::Json<FoodUpdate>,
) -> impl Responder {
    let update = update.into_inner();
    respond(run_blocking(&gw, move |gw| food::update(gw, &update)).await)
}

/// Handler for `DELETE /api/crud/food/{food_id}`.
pub(crate) async fn delete(gw: web::Data<Gateway>, food_id: web::Path<i64>) -> impl Responder {
    let food_id = food_id.into_inner();
    respond(run_blocking(&gw, move |gw| food::delete(gw, food_id)).await)
}
