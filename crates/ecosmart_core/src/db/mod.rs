//! SQLite storage bootstrap and shared-connection lifecycle.
//!
//! # Responsibility
//! - Open and configure the SQLite connection backing every repository.
//! - Hold exactly one live connection per provider and reopen it when released.
//! - Ensure the entity tables exist before any repository touches them.
//!
//! # Invariants
//! - Every statement runs under the shared connection lock.
//! - Connections handed out by the provider have the schema applied.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod config;
mod health;
mod open;
mod provider;
pub mod schema;

pub use config::{DbConfig, DbLocation, DEFAULT_BUSY_TIMEOUT_MS};
pub use health::{check_health, DbHealth};
pub use open::{open_db, open_db_in_memory, open_with_config};
pub use provider::{ConnectionProvider, SharedConnection};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The shared handle was released and has not been reopened.
    ConnectionClosed,
    /// A previous holder of the connection lock panicked.
    LockPoisoned,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::ConnectionClosed => write!(f, "database connection is closed"),
            Self::LockPoisoned => write!(f, "database connection lock is poisoned"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::ConnectionClosed | Self::LockPoisoned => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
