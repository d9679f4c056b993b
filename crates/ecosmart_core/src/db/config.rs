//! Connection settings for the shared SQLite store.
//!
//! The values normally come from process startup; the core only reads them.

use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

const DB_PATH_ENV: &str = "ECOSMART_DB_PATH";
const BUSY_TIMEOUT_ENV: &str = "ECOSMART_DB_BUSY_TIMEOUT_MS";

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DbLocation {
    /// SQLite database file, created on first open.
    File { path: PathBuf },
    /// Private in-memory database. Contents vanish when the connection closes.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    pub location: DbLocation,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl DbConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: DbLocation::File { path: path.into() },
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            location: DbLocation::Memory,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// Reads settings from `ECOSMART_DB_PATH` and `ECOSMART_DB_BUSY_TIMEOUT_MS`.
    ///
    /// A missing or blank path selects the in-memory store and logs a
    /// `db_config` fallback warning.
    ///
    /// # Errors
    /// - Returns an error when the busy timeout is not a non-negative integer.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = match lookup(DB_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => Self::file(path.trim()),
            _ => {
                warn!(
                    "event=db_config module=db status=fallback mode=memory reason=missing_path env={DB_PATH_ENV}"
                );
                Self::in_memory()
            }
        };

        if let Some(raw) = lookup(BUSY_TIMEOUT_ENV) {
            config.busy_timeout_ms = raw.trim().parse().map_err(|_| {
                format!("invalid {BUSY_TIMEOUT_ENV} value `{raw}`; expected milliseconds")
            })?;
        }

        Ok(config)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Short label used in log events.
    pub fn mode(&self) -> &'static str {
        match self.location {
            DbLocation::File { .. } => "file",
            DbLocation::Memory => "memory",
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}
