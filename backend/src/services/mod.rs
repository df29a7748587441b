//! HTTP surface of the dashboard, one route scope per navigation section:
//!
//! - `home`: landing page summary (`/api/home`).
//! - `tables`: read-only table viewer (`/api/tables`).
//! - `crud`: create/read/update/delete forms (`/api/crud`).
//! - `queries`: the primary and secondary query explorers (`/api/queries`).
//!
//! Handlers never talk to SQLite on the async worker: the database call runs
//! through [`run_blocking`] on tokio's blocking pool and its `AppResult` is
//! turned into JSON by [`respond`].

pub mod crud;
pub mod home;
pub mod queries;
pub mod tables;

use crate::db::Gateway;
use crate::error::{AppError, AppResult};
use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use log::{error, warn};
use serde::Serialize;
use std::fmt;

/// Runs one database operation on the blocking pool.
pub(crate) async fn run_blocking<F, T>(gw: &web::Data<Gateway>, op: F) -> AppResult<T>
where
    F: FnOnce(&Gateway) -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    let gw = gw.get_ref().clone();
    tokio::task::spawn_blocking(move || op(&gw))
        .await
        .map_err(|e| AppError::Blocking(e.to_string()))?
}

/// JSON body of every failed request.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub(crate) fn error_response(err: &AppError) -> HttpResponse {
    if let AppError::Storage(_) | AppError::Blocking(_) = err {
        error!("{err}");
    }
    HttpResponse::build(err.status()).json(ErrorBody {
        error: err.to_string(),
    })
}

/// Body and path extractor settings shared by every scope, so a malformed
/// request is answered with an [`ErrorBody`] instead of plain text.
pub(crate) fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(1024 * 1024)
            .error_handler(|err, _req| rejected(err)),
    )
    .app_data(web::PathConfig::default().error_handler(|err, _req| rejected(err)));
}

fn rejected<E>(err: E) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    warn!("rejected request: {err}");
    let response = HttpResponse::BadRequest().json(ErrorBody {
        error: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}

pub(crate) fn respond<T: Serialize>(result: AppResult<T>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => error_response(&e),
    }
}
