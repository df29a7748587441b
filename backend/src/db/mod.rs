//! # Execution Gateway
//!
//! The only part of the backend that talks to SQLite. Every call is a fully
//! independent unit of work:
//!
//! 1. open a connection to the database file (foreign keys switched on),
//! 2. run exactly one statement with its positional parameters,
//! 3. drop the connection, on success and on every error path alike.
//!
//! Mutations run in autocommit mode, so a successful [`Gateway::execute`] is
//! committed when it returns. Two sequential calls are never atomic together.

pub mod schema;

use crate::error::AppResult;
use common::model::rowset::{Cell, RowSet};
use common::model::table::Table;
use log::debug;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params};
use std::path::{Path, PathBuf};

/// Handle on the database file. Holds no connection, only its location.
#[derive(Debug, Clone)]
pub struct Gateway {
    path: PathBuf,
}

impl Gateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> AppResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    /// Runs an insert, update or delete and returns the number of rows it changed.
    pub fn execute<P: Params>(&self, statement: &str, params: P) -> AppResult<usize> {
        debug!("execute: {}", statement.trim());
        let conn = self.connect()?;
        let affected = conn.execute(statement, params)?;
        Ok(affected)
    }

    /// Runs a read statement and collects every row with the statement's
    /// output column names.
    pub fn query<P: Params>(&self, statement: &str, params: P) -> AppResult<RowSet> {
        debug!("query: {}", statement.trim());
        let conn = self.connect()?;
        let mut stmt = conn.prepare(statement)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let rows = stmt
            .query_map(params, |row| {
                (0..width)
                    .map(|idx| row.get_ref(idx).map(to_cell))
                    .collect::<rusqlite::Result<Vec<Cell>>>()
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(RowSet { columns, rows })
    }

    /// Every row of `table`, in the order the engine returns them.
    pub fn fetch_all(&self, table: Table) -> AppResult<RowSet> {
        self.query(&format!("SELECT * FROM {}", table.name()), [])
    }

    /// Runs a statement yielding a single integer, such as a `COUNT(*)`.
    pub fn scalar<P: Params>(&self, statement: &str, params: P) -> AppResult<i64> {
        debug!("scalar: {}", statement.trim());
        let conn = self.connect()?;
        let value = conn.query_row(statement, params, |row| row.get(0))?;
        Ok(value)
    }

    pub fn count(&self, table: Table) -> AppResult<i64> {
        self.scalar(&format!("SELECT COUNT(*) FROM {}", table.name()), [])
    }

    /// Creates any of the four tables that do not exist yet.
    pub fn ensure_schema(&self) -> AppResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(schema::CREATE_TABLES)?;
        Ok(())
    }
}

fn to_cell(value: ValueRef<'_>) -> Cell {
    match value {
        ValueRef::Null => Cell::Null,
        ValueRef::Integer(v) => Cell::Integer(v),
        ValueRef::Real(v) => Cell::Real(v),
        ValueRef::Text(bytes) => Cell::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Cell::Blob(bytes.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::test_support::fresh_gateway;
    use pretty_assertions::assert_eq;
    use rusqlite::params;

    #[test]
    fn fetch_all_reports_table_columns_of_an_empty_table() {
        let (_dir, gw) = fresh_gateway();
        let set = gw.fetch_all(Table::Claims).unwrap();
        assert!(set.is_empty());
        assert_eq!(
            set.columns,
            vec!["Claim_ID", "Food_ID", "Receiver_ID", "Status", "Timestamp"]
        );
    }

    #[test]
    fn execute_commits_before_returning() {
        let (_dir, gw) = fresh_gateway();
        let affected = gw
            .execute(
                "INSERT INTO receivers (Name, Type, Contact, City) VALUES (?1, ?2, ?3, ?4)",
                params!["Hope Shelter", "NGO", "555-0101", "Springfield"],
            )
            .unwrap();
        assert_eq!(affected, 1);
        assert_eq!(gw.count(Table::Receivers).unwrap(), 1);
    }

    #[test]
    fn query_uses_statement_output_names() {
        let (_dir, gw) = fresh_gateway();
        let set = gw
            .query("SELECT 1 + 1 AS two, 'x' AS letter, NULL AS nothing, 0.5 AS half", [])
            .unwrap();
        assert_eq!(set.columns, vec!["two", "letter", "nothing", "half"]);
        assert_eq!(
            set.rows,
            vec![vec![
                Cell::Integer(2),
                Cell::from("x"),
                Cell::Null,
                Cell::Real(0.5)
            ]]
        );
    }

    #[test]
    fn parameter_count_mismatch_is_a_storage_error() {
        let (_dir, gw) = fresh_gateway();
        let err = gw
            .execute(
                "INSERT INTO receivers (Name, Type, Contact, City) VALUES (?1, ?2, ?3, ?4)",
                params!["only one"],
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[test]
    fn missing_table_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let gw = Gateway::new(dir.path().join("bare.db"));
        assert!(matches!(
            gw.fetch_all(Table::Food),
            Err(AppError::Storage(_))
        ));
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let (_dir, gw) = fresh_gateway();
        gw.ensure_schema().unwrap();
        for table in Table::ALL {
            assert_eq!(gw.count(table).unwrap(), 0);
        }
    }

    #[test]
    fn foreign_keys_are_enforced_per_connection() {
        let (_dir, gw) = fresh_gateway();
        let err = gw
            .execute(
                "INSERT INTO claims (Claim_ID, Food_ID, Receiver_ID, Status, Timestamp)
                 VALUES (1, 99, 99, 'Pending', '2025-01-01 00:00:00.000')",
                [],
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
