use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a claim. `Pending` is the initial state; `Completed` and
/// `Canceled` are the intended terminal states.
///
/// `Canceled` is the only spelling ever written to the database. The British
/// spelling is accepted on input and folded into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    Pending,
    Completed,
    #[serde(alias = "Cancelled")]
    Canceled,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Completed => "Completed",
            ClaimStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A receiver's claim on a listing. The id is chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimForm {
    pub claim_id: i64,
    pub food_id: i64,
    pub receiver_id: i64,
    pub status: ClaimStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimUpdate {
    pub claim_id: i64,
    pub status: ClaimStatus,
}
