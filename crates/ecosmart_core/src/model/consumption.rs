//! Consumption reading model.
//!
//! # Invariants
//! - `device_id` and `residence_id` are both stored as given; the residence is
//!   never derived from the device.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// One time-stamped energy reading for a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumption {
    pub id: Option<EntityId>,
    /// Energy in kWh. Nullable and not range-checked.
    pub amount: Option<f64>,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
    pub device_id: EntityId,
    pub residence_id: EntityId,
}

impl Consumption {
    pub fn new(
        amount: Option<f64>,
        timestamp: i64,
        device_id: EntityId,
        residence_id: EntityId,
    ) -> Self {
        Self {
            id: None,
            amount,
            timestamp,
            device_id,
            residence_id,
        }
    }
}
