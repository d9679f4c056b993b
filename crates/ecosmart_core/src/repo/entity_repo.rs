//! Generic repository contract and its SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over any type described by [`Entity`].
//! - Keep SQL text and row mapping inside the persistence boundary.
//!
//! # Invariants
//! - Every operation is one statement on the shared connection.
//! - `update` and `delete` on an unknown id change nothing and succeed.
//! - Absence is `Ok(None)` / empty `Vec`, never an error.
//! - Failures are logged where they happen and returned as the entity's error.

use crate::db::{DbError, SharedConnection};
use crate::model::EntityId;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::mapping::{insert_sql, select_sql, update_sql, Entity};
use log::{debug, error};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension};
use std::marker::PhantomData;
use std::sync::Arc;

/// Repository interface shared by all entity types.
pub trait EntityRepository<E: Entity> {
    /// Inserts all non-id fields and returns the store-assigned id.
    /// The input value is left untouched.
    fn create(&self, entity: &E) -> RepoResult<EntityId>;
    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<E>>;
    /// Replaces every non-id field of the row matching `entity.id`.
    fn update(&self, entity: &E) -> RepoResult<()>;
    fn delete(&self, id: EntityId) -> RepoResult<()>;
    /// All rows in store order.
    fn get_all(&self) -> RepoResult<Vec<E>>;
}

/// SQLite-backed repository bound to the shared connection.
pub struct SqliteRepository<E: Entity> {
    conn: Arc<SharedConnection>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SqliteRepository<E> {
    pub fn new(conn: Arc<SharedConnection>) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    pub fn connection(&self) -> &Arc<SharedConnection> {
        &self.conn
    }

    /// Runs one statement sequence, logging and wrapping any failure.
    pub(crate) fn run<T>(
        &self,
        op: &'static str,
        message: impl FnOnce() -> String,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> RepoResult<T> {
        self.conn.with(f).map_err(|err: DbError| {
            let message = message();
            error!(
                "event=repo_{op} module=repo entity={} status=error message=\"{message}\" error={err}",
                E::KIND
            );
            RepoError::new(E::KIND, message, Some(err))
        })
    }

    /// Lists rows whose `column` equals `value`.
    pub(crate) fn list_where(&self, column: &'static str, value: EntityId) -> RepoResult<Vec<E>> {
        let sql = format!("{} WHERE {column} = ?1", select_sql::<E>());
        let entities = self.run(
            "list_by",
            || format!("error listing {} by {column} {value}", E::KIND),
            |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([value], E::from_row)?;
                let entities = rows.collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(entities)
            },
        )?;
        debug!(
            "event=repo_list_by module=repo entity={} status=ok column={column} value={value} count={}",
            E::KIND,
            entities.len()
        );
        Ok(entities)
    }
}

impl<E: Entity> Clone for SqliteRepository<E> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.conn))
    }
}

impl<E: Entity> EntityRepository<E> for SqliteRepository<E> {
    fn create(&self, entity: &E) -> RepoResult<EntityId> {
        let sql = insert_sql::<E>();
        let params = entity.to_params();
        let id = self.run(
            "create",
            || format!("error creating {}", E::KIND),
            |conn| {
                let mut stmt = conn.prepare(&sql)?;
                stmt.execute(params_from_iter(params))?;
                Ok(conn.last_insert_rowid())
            },
        )?;
        debug!(
            "event=repo_create module=repo entity={} status=ok id={id}",
            E::KIND
        );
        Ok(id)
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<E>> {
        let sql = format!("{} WHERE id = ?1", select_sql::<E>());
        let found = self.run(
            "get",
            || format!("error retrieving {} with id {id}", E::KIND),
            |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let found = stmt.query_row([id], E::from_row).optional()?;
                Ok(found)
            },
        )?;
        debug!(
            "event=repo_get module=repo entity={} status=ok id={id} found={}",
            E::KIND,
            found.is_some()
        );
        Ok(found)
    }

    fn update(&self, entity: &E) -> RepoResult<()> {
        let sql = update_sql::<E>();
        let id = entity.id();
        let mut params = entity.to_params();
        params.push(Value::from(id));
        let changed = self.run(
            "update",
            || format!("error updating {} with id {id:?}", E::KIND),
            |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let changed = stmt.execute(params_from_iter(params))?;
                Ok(changed)
            },
        )?;
        debug!(
            "event=repo_update module=repo entity={} status=ok id={id:?} affected={changed}",
            E::KIND
        );
        Ok(())
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1;", E::TABLE);
        let changed = self.run(
            "delete",
            || format!("error deleting {} with id {id}", E::KIND),
            |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let changed = stmt.execute([id])?;
                Ok(changed)
            },
        )?;
        debug!(
            "event=repo_delete module=repo entity={} status=ok id={id} affected={changed}",
            E::KIND
        );
        Ok(())
    }

    fn get_all(&self) -> RepoResult<Vec<E>> {
        let sql = select_sql::<E>();
        let entities = self.run(
            "list",
            || format!("error listing {}", E::KIND),
            |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], E::from_row)?;
                let entities = rows.collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(entities)
            },
        )?;
        debug!(
            "event=repo_list module=repo entity={} status=ok count={}",
            E::KIND,
            entities.len()
        );
        Ok(entities)
    }
}
