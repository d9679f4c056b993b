//! Shared connection handle and the provider that keeps it alive.
//!
//! # Responsibility
//! - Keep exactly one live connection per provider, shared by all repositories.
//! - Reopen the connection when the held handle has been released.
//! - Serialize statement execution on the shared handle.
//!
//! # Invariants
//! - `ConnectionProvider::get` returns the same handle while it stays open.
//! - A poisoned handle is reported, never swapped for a fresh one; only
//!   `close` clears it.
//! - Statements are prepared and dropped inside `SharedConnection::with`, so the
//!   lock is never released with a statement still alive.

use super::config::DbConfig;
use super::open::open_with_config;
use super::{DbError, DbResult};
use log::{error, info, warn};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, PoisonError};

/// One SQLite connection guarded for serialized use.
///
/// `None` inside the lock means the connection has been released.
#[derive(Debug)]
pub struct SharedConnection {
    inner: Mutex<Option<Connection>>,
}

impl SharedConnection {
    pub fn new(conn: Connection) -> Self {
        Self {
            inner: Mutex::new(Some(conn)),
        }
    }

    /// Runs `f` against the connection while holding the lock.
    ///
    /// # Errors
    /// - `DbError::ConnectionClosed` when the handle has been released.
    /// - `DbError::LockPoisoned` when a previous holder panicked.
    /// - `DbError::Sqlite` for anything `f` reports.
    pub fn with<T>(&self, f: impl FnOnce(&Connection) -> rusqlite::Result<T>) -> DbResult<T> {
        let guard = self.inner.lock().map_err(|_| DbError::LockPoisoned)?;
        let conn = guard.as_ref().ok_or(DbError::ConnectionClosed)?;
        Ok(f(conn)?)
    }

    /// Whether the connection has been released. Poisoning does not count.
    pub fn is_closed(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Whether a holder panicked while running statements on this handle.
    pub fn is_poisoned(&self) -> bool {
        self.inner.is_poisoned()
    }

    /// Releases the underlying connection.
    ///
    /// Owned by whoever manages the process lifecycle; repositories never call
    /// it. Closing twice is a no-op. A poisoned handle is still released and
    /// its poison cleared.
    pub fn close(&self) -> DbResult<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("event=db_close module=db status=recovered reason=lock_poisoned");
            poisoned.into_inner()
        });
        self.inner.clear_poison();
        match guard.take() {
            Some(conn) => conn.close().map_err(|(conn, err)| {
                // Keep the handle usable when SQLite refuses to close.
                *guard = Some(conn);
                DbError::Sqlite(err)
            }),
            None => Ok(()),
        }
    }
}

/// Opens the shared connection on demand and hands out the live handle.
#[derive(Debug)]
pub struct ConnectionProvider {
    config: DbConfig,
    current: Mutex<Option<Arc<SharedConnection>>>,
}

impl ConnectionProvider {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            current: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Returns the active connection, opening a new one if none is held or the
    /// held one has been closed.
    ///
    /// # Errors
    /// - Propagates the open/bootstrap failure unchanged; nothing is cached on
    ///   failure and no retry is attempted.
    /// - `DbError::LockPoisoned` while the held handle is poisoned. The handle
    ///   stays in place until the lifecycle owner closes it.
    pub fn get(&self) -> DbResult<Arc<SharedConnection>> {
        let mut current = self.current.lock().map_err(|_| DbError::LockPoisoned)?;

        if let Some(shared) = current.as_ref() {
            if shared.is_poisoned() {
                error!(
                    "event=db_provider_get module=db status=error mode={} error=lock_poisoned",
                    self.config.mode()
                );
                return Err(DbError::LockPoisoned);
            }
            if !shared.is_closed() {
                return Ok(Arc::clone(shared));
            }
            info!(
                "event=db_reopen module=db status=start mode={}",
                self.config.mode()
            );
        }

        let conn = open_with_config(&self.config).map_err(|err| {
            error!(
                "event=db_provider_get module=db status=error mode={} error={err}",
                self.config.mode()
            );
            err
        })?;
        let shared = Arc::new(SharedConnection::new(conn));
        *current = Some(Arc::clone(&shared));
        Ok(shared)
    }
}
