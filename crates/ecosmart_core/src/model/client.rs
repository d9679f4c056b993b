//! Client domain model.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// Account holder owning residences and receiving notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Client {
    /// Creates an unsaved client.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}
