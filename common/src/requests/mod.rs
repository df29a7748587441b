use crate::model::table::Table;
use serde::{Deserialize, Serialize};

/// The two query explorer sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Explorer {
    Primary,
    Secondary,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
/// Request payload for running one catalog query.
/// `filter` is only read by queries that take a city filter.
pub struct RunQueryRequest {
    pub label: String,
    #[serde(default)]
    pub filter: Option<String>,
}

/// Labels of one explorer, in display order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QueryList {
    pub explorer: Explorer,
    pub queries: Vec<QueryDescriptor>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QueryDescriptor {
    pub label: String,
    /// True when the query needs a city filter value.
    pub needs_filter: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TableCount {
    pub table: Table,
    pub label: String,
    pub rows: i64,
}

/// Payload of the home section.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HomeSummary {
    pub title: String,
    pub objective: String,
    pub counts: Vec<TableCount>,
}
