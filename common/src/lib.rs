//! Data model shared between the dashboard server and its clients.
//!
//! Everything here is plain serde data: entity forms as submitted by the CRUD
//! manager, the closed set of tables, and the tabular `RowSet` every read
//! returns.

pub mod model;
pub mod requests;
