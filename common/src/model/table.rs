use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The closed set of tables the dashboard may read or modify.
///
/// Table names are never taken from request text directly: they are parsed
/// into this enum first and the SQL identifier comes from [`Table::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Providers,
    Receivers,
    Claims,
    Food,
}

impl Table {
    /// Display order used by the table viewer.
    pub const ALL: [Table; 4] = [Table::Providers, Table::Receivers, Table::Claims, Table::Food];

    /// SQL identifier of the table.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Providers => "providers",
            Table::Receivers => "receivers",
            Table::Claims => "claims",
            Table::Food => "food",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Table::Providers => "Providers Data",
            Table::Receivers => "Receivers Data",
            Table::Claims => "Claims Data",
            Table::Food => "Food Listings Data",
        }
    }
}

/// Raised when text names no known table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown table '{0}'")]
pub struct UnknownTable(pub String);

impl FromStr for Table {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTable(s.to_string()))
    }
}
