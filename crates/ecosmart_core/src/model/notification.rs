//! Notification domain model.
//!
//! # Invariants
//! - Read state is a two-value flag persisted as `Y`/`N`, never a boolean.
//! - Marking as read is a dedicated repository operation, not an update.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// Read flag of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadStatus {
    #[serde(rename = "Y")]
    Read,
    #[default]
    #[serde(rename = "N")]
    Unread,
}

impl ReadStatus {
    /// One-letter flag as stored.
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Read => "Y",
            Self::Unread => "N",
        }
    }

    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "Y" => Some(Self::Read),
            "N" => Some(Self::Unread),
            _ => None,
        }
    }
}

/// Message sent to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Option<EntityId>,
    pub message: String,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
    pub read_status: ReadStatus,
    pub client_id: EntityId,
}

impl Notification {
    /// Creates an unsaved, unread notification.
    pub fn new(message: impl Into<String>, timestamp: i64, client_id: EntityId) -> Self {
        Self {
            id: None,
            message: message.into(),
            timestamp,
            read_status: ReadStatus::Unread,
            client_id,
        }
    }

    pub fn is_read(&self) -> bool {
        self.read_status == ReadStatus::Read
    }
}
