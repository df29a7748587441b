//! Error taxonomy of the dashboard backend.
//!
//! Every operation that touches the database or the query catalog returns
//! [`AppResult`]. Handlers turn an [`AppError`] into a response through
//! [`AppError::status`]; nothing here aborts the server.

use actix_web::http::StatusCode;
use common::model::table::UnknownTable;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed statement, constraint violation, missing table or column,
    /// or a connection that could not be opened.
    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The label names no catalog entry.
    #[error("Unknown query: '{0}'")]
    UnknownQueryLabel(String),

    /// The catalog entry needs a filter value and none was given.
    #[error("Query '{0}' requires a filter value")]
    MissingParameter(String),

    /// A submitted form failed validation.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("A claim with id {0} already exists")]
    DuplicateClaim(i64),

    /// A name-keyed update or delete matched more than one row.
    #[error("{matches} {entity} rows are named '{name}'; refusing to modify all of them")]
    AmbiguousName {
        entity: &'static str,
        name: String,
        matches: i64,
    },

    #[error(transparent)]
    UnknownTable(#[from] UnknownTable),

    /// The blocking database task could not be joined.
    #[error("Background task failed: {0}")]
    Blocking(String),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// HTTP status used when this error reaches a handler.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UnknownQueryLabel(_)
            | AppError::MissingParameter(_)
            | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::DuplicateClaim(_) | AppError::AmbiguousName { .. } => StatusCode::CONFLICT,
            AppError::UnknownTable(_) => StatusCode::NOT_FOUND,
            AppError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
