//! Persistence core for EcoSmart energy monitoring.
//! Owns the entity records, their SQLite repositories and the shared connection.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{
    check_health, ConnectionProvider, DbConfig, DbError, DbHealth, DbLocation, DbResult,
    SharedConnection,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::Client;
pub use model::consumption::Consumption;
pub use model::device::Device;
pub use model::notification::{Notification, ReadStatus};
pub use model::residence::Residence;
pub use model::{EntityId, EntityKind};
pub use repo::entity_repo::{EntityRepository, SqliteRepository};
pub use repo::error::{RepoError, RepoResult};
pub use repo::factory::{
    ClientRepository, ConsumptionRepository, DeviceRepository, NotificationRepository,
    RepositoryFactory, ResidenceRepository,
};
pub use repo::mapping::Entity;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
