use serde::{Deserialize, Serialize};

/// Fields submitted when creating a provider, or the new values on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderForm {
    pub name: String,
    /// Free text: restaurant, grocery store, ...
    #[serde(rename = "type")]
    pub provider_type: String,
    pub address: String,
    pub city: String,
    pub contact: String,
}

/// Update targeting a provider by its current name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderUpdate {
    pub current_name: String,
    #[serde(flatten)]
    pub fields: ProviderForm,
}
