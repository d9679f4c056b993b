//! Device domain model.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// Appliance or fixture installed in a residence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: Option<EntityId>,
    pub name: String,
    /// Free-form category such as `appliance` or `lighting`.
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    /// Typical draw in kWh. Not range-checked.
    pub average_consumption: Option<f64>,
    pub residence_id: EntityId,
}

impl Device {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        average_consumption: Option<f64>,
        residence_id: EntityId,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: kind.into(),
            average_consumption,
            residence_id,
        }
    }
}
