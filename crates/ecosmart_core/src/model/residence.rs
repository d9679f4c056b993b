//! Residence domain model.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// Household belonging to one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Residence {
    pub id: Option<EntityId>,
    pub address: String,
    pub client_id: EntityId,
}

impl Residence {
    pub fn new(address: impl Into<String>, client_id: EntityId) -> Self {
        Self {
            id: None,
            address: address.into(),
            client_id,
        }
    }
}
