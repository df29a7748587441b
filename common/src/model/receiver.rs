use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverForm {
    pub name: String,
    /// Free text: individual, NGO, charity, ...
    #[serde(rename = "type")]
    pub receiver_type: String,
    pub contact: String,
    pub city: String,
}

/// Update targeting a receiver by numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverUpdate {
    pub receiver_id: i64,
    #[serde(flatten)]
    pub fields: ReceiverForm,
}
