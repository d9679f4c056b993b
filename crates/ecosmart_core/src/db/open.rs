//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure the busy timeout and apply the entity schema before returning.
//!
//! # Invariants
//! - Returned connections have every entity table in place.
//! - Foreign-key enforcement stays off: deletes never cascade or get rejected.

use super::config::{DbConfig, DbLocation};
use super::schema::ensure_schema;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file and applies the entity schema.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with_config(&DbConfig::file(path.as_ref()))
}

/// Opens a private in-memory SQLite database and applies the entity schema.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with_config(&DbConfig::in_memory())
}

/// Opens a connection described by `config`.
///
/// # Side effects
/// - Creates the database file when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
pub fn open_with_config(config: &DbConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = config.mode();
    info!("event=db_open module=db status=start mode={mode}");

    let opened = match &config.location {
        DbLocation::File { path } => Connection::open(path),
        DbLocation::Memory => Connection::open_in_memory(),
    };
    let conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn, config.busy_timeout()) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection, busy_timeout: Duration) -> DbResult<()> {
    conn.busy_timeout(busy_timeout)?;
    ensure_schema(conn)?;
    Ok(())
}
