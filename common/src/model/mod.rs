pub mod claim;
pub mod food;
pub mod provider;
pub mod receiver;
pub mod rowset;
pub mod table;

/// Result of a single insert/update/delete statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MutationOutcome {
    /// Rows touched by the statement. Zero means the key matched nothing.
    pub affected: usize,
}
