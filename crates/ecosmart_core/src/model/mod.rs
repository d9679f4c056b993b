//! Entity value types for clients, residences, devices, readings and notices.
//!
//! # Responsibility
//! - Define the plain records exchanged with repositories.
//! - Carry identity and foreign-key fields, nothing storage-specific.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one; it never changes afterwards.
//! - Foreign keys are plain ids; nothing here checks that the target exists.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub mod client;
pub mod consumption;
pub mod device;
pub mod notification;
pub mod residence;

/// Store-assigned numeric identity shared by every entity.
pub type EntityId = i64;

/// Discriminates the five persisted entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Client,
    Residence,
    Device,
    Consumption,
    Notification,
}

impl EntityKind {
    /// Lowercase singular name used in messages and log events.
    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Residence => "residence",
            Self::Device => "device",
            Self::Consumption => "consumption",
            Self::Notification => "notification",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
