use crate::crud::receivers;
use crate::db::Gateway;
use crate::services::crud::read_table;
use crate::services::{respond, run_blocking};
use actix_web::{web, Responder};
use common::model::receiver::{ReceiverForm, ReceiverUpdate};
use common::model::table::Table;

/// Handler for `GET /api/crud/receivers`.
pub(crate) async fn read(gw: web::Data<Gateway>) -> impl Responder {
    read_table(gw, Table::Receivers).await
}

/// Handler for `POST /api/crud/receivers`.
pub(crate) async fn create(
    gw: web::Data<Gateway>,
    form: web::Json<ReceiverForm>,
) -> impl Responder {
    let form = form.into_inner();
    respond(run_blocking(&gw, move |gw| receivers::create(gw, &form)).await)
}

/// Handler for `PUT /api/crud/receivers`. The row is picked by `receiver_id`.
pub(crate) async fn update(
    gw: web::Data<Gateway>,
    update: web::Json<ReceiverUpdate>,
) -> impl Responder {
    let update = update.into_inner();
    respond(run_blocking(&gw, move |gw| receivers::update(gw, &update)).await)
}

/// Handler for `DELETE /api/crud/receivers/{name}`.
///
/// Receivers are deleted by name, like providers.
pub(crate) async fn delete(gw: web::Data<Gateway>, name: web::Path<String>) -> impl Responder {
    let name = name.into_inner();
    respond(run_blocking(&gw, move |gw| receivers::delete(gw, &name)).await)
}
