//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the CRUD contract shared by every entity.
//! - Isolate SQLite query details from callers such as request routing.
//!
//! # Invariants
//! - One generic implementation serves all five entities; entity-specific
//!   behavior lives in table descriptions and relationship lookups.
//! - Deletes touch a single row of a single table. Nothing cascades.

pub mod entity_repo;
pub mod error;
pub mod factory;
pub mod mapping;
mod relations;
