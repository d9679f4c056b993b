//! Entity table definitions.
//!
//! # Invariants
//! - DDL is idempotent (`IF NOT EXISTS`) and safe to run on every open.
//! - `AUTOINCREMENT` keeps ids from being reused after deletion.
//! - No `REFERENCES` constraints: foreign keys are plain columns.

use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables every repository relies on, in creation order.
pub const ENTITY_TABLES: &[&str] = &[
    "client",
    "residence",
    "device",
    "consumption",
    "notification",
];

/// Creates any missing entity table or lookup index.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ensure_schema, ENTITY_TABLES};
    use rusqlite::Connection;

    #[test]
    fn ensure_schema_is_idempotent_and_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        for table in ENTITY_TABLES {
            let exists: i64 = conn
                .query_row(
                    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(exists, 1, "table {table} does not exist");
        }
    }
}
