//! # CRUD Operation Set
//!
//! Create, read, update and delete for the four entities. Each operation
//! validates its form, then hands one statement to the [`Gateway`].
//!
//! Lookup keys:
//!
//! | entity    | update by   | delete by   |
//! |-----------|-------------|-------------|
//! | provider  | Name        | Name        |
//! | receiver  | Receiver_ID | Name        |
//! | food      | Food_ID     | Food_ID     |
//! | claim     | Claim_ID    | Claim_ID    |
//!
//! Name-keyed statements only touch a row when the name is unique; see
//! [`unique_name_outcome`].

pub mod claims;
pub mod food;
pub mod providers;
pub mod receivers;

use crate::db::Gateway;
use crate::error::{AppError, AppResult};
use common::model::rowset::TableData;
use common::model::table::Table;
use common::model::MutationOutcome;
use log::warn;

/// Reads a whole table. An empty table is reported as [`TableData::Empty`].
pub fn read(gw: &Gateway, table: Table) -> AppResult<TableData> {
    let set = gw.fetch_all(table)?;
    if set.is_empty() {
        Ok(TableData::Empty {
            table: table.name().to_string(),
        })
    } else {
        Ok(TableData::Rows(set))
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        warn!("rejected form: {field} is empty");
        return Err(AppError::validation(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: i64) -> AppResult<()> {
    if value < 1 {
        warn!("rejected form: {field} = {value}");
        return Err(AppError::validation(field, format!("must be at least 1, got {value}")));
    }
    Ok(())
}

/// Turns the row count of a name-guarded statement into an outcome.
///
/// The statement itself only matches when exactly one row carries `name`,
/// so zero affected rows means the name is either missing or shared. The
/// shared case is reported as [`AppError::AmbiguousName`].
pub(crate) fn unique_name_outcome(
    gw: &Gateway,
    table: Table,
    entity: &'static str,
    name: &str,
    affected: usize,
) -> AppResult<MutationOutcome> {
    if affected > 0 {
        return Ok(MutationOutcome { affected });
    }
    let matches = gw.scalar(
        &format!("SELECT COUNT(*) FROM {} WHERE Name = ?1", table.name()),
        [name],
    )?;
    if matches > 1 {
        warn!("{matches} {entity} rows share the name '{name}'");
        return Err(AppError::AmbiguousName {
            entity,
            name: name.to_string(),
            matches,
        });
    }
    Ok(MutationOutcome { affected: 0 })
}
