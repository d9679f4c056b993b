//! Store reachability probe for status endpoints.

use super::provider::ConnectionProvider;
use super::DbError;
use log::{info, warn};
use serde::Serialize;

/// Result of probing the shared connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "database", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DbHealth {
    Connected,
    Disconnected,
    Error { message: String },
}

impl DbHealth {
    pub fn is_up(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Runs `SELECT 1` on the provider's connection, opening it if needed.
pub fn check_health(provider: &ConnectionProvider) -> DbHealth {
    let health = match provider.get() {
        Err(err) => DbHealth::Error {
            message: err.to_string(),
        },
        Ok(shared) => {
            match shared.with(|conn| conn.query_row("SELECT 1;", [], |row| row.get::<_, i64>(0)))
            {
                Ok(1) => DbHealth::Connected,
                Ok(_) | Err(DbError::ConnectionClosed) => DbHealth::Disconnected,
                Err(err) => DbHealth::Error {
                    message: err.to_string(),
                },
            }
        }
    };

    if health.is_up() {
        info!("event=db_health module=db status=ok");
    } else {
        warn!("event=db_health module=db status=error health={health:?}");
    }
    health
}
