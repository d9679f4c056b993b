//! Per-entity repository error.

use crate::db::DbError;
use crate::model::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure raised by a repository operation.
///
/// `entity` names the error kind (client, residence, device, consumption or
/// notification). Absence of a row is never reported through this type.
#[derive(Debug)]
pub struct RepoError {
    entity: EntityKind,
    message: String,
    source: Option<DbError>,
}

impl RepoError {
    pub fn new(entity: EntityKind, message: impl Into<String>, source: Option<DbError>) -> Self {
        Self {
            entity,
            message: message.into(),
            source,
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying storage failure, if any.
    pub fn db_error(&self) -> Option<&DbError> {
        self.source.as_ref()
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(err) => write!(f, "{}: {err}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|err| err as &(dyn Error + 'static))
    }
}
