//! Single construction point for repositories.
//!
//! # Invariants
//! - Every repository handed out is bound to the provider's current handle.
//! - Constructing a repository never opens a second connection.

use crate::db::{ConnectionProvider, DbResult};
use crate::model::client::Client;
use crate::model::consumption::Consumption;
use crate::model::device::Device;
use crate::model::notification::Notification;
use crate::model::residence::Residence;
use crate::repo::entity_repo::SqliteRepository;
use crate::repo::mapping::Entity;

pub type ClientRepository = SqliteRepository<Client>;
pub type ResidenceRepository = SqliteRepository<Residence>;
pub type DeviceRepository = SqliteRepository<Device>;
pub type ConsumptionRepository = SqliteRepository<Consumption>;
pub type NotificationRepository = SqliteRepository<Notification>;

/// Hands out repositories sharing the provider's connection.
#[derive(Debug)]
pub struct RepositoryFactory {
    provider: ConnectionProvider,
}

impl RepositoryFactory {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &ConnectionProvider {
        &self.provider
    }

    /// Initializes the shared connection if needed and binds a repository to it.
    ///
    /// # Errors
    /// - Propagates connection open failures from the provider.
    pub fn repository<E: Entity>(&self) -> DbResult<SqliteRepository<E>> {
        Ok(SqliteRepository::new(self.provider.get()?))
    }

    pub fn client_repository(&self) -> DbResult<ClientRepository> {
        self.repository()
    }

    pub fn residence_repository(&self) -> DbResult<ResidenceRepository> {
        self.repository()
    }

    pub fn device_repository(&self) -> DbResult<DeviceRepository> {
        self.repository()
    }

    pub fn consumption_repository(&self) -> DbResult<ConsumptionRepository> {
        self.repository()
    }

    pub fn notification_repository(&self) -> DbResult<NotificationRepository> {
        self.repository()
    }
}
