//! Relationship-scoped lookups and notification read tracking.
//!
//! Each lookup filters by one foreign-key column; an empty result is a valid
//! answer, not an error.

use crate::model::consumption::Consumption;
use crate::model::device::Device;
use crate::model::notification::{Notification, ReadStatus};
use crate::model::residence::Residence;
use crate::model::EntityId;
use crate::repo::entity_repo::SqliteRepository;
use crate::repo::error::RepoResult;
use log::{info, warn};
use rusqlite::params;

impl SqliteRepository<Residence> {
    pub fn get_residences_by_client_id(&self, client_id: EntityId) -> RepoResult<Vec<Residence>> {
        self.list_where("client_id", client_id)
    }
}

impl SqliteRepository<Device> {
    pub fn get_devices_by_residence_id(&self, residence_id: EntityId) -> RepoResult<Vec<Device>> {
        self.list_where("residence_id", residence_id)
    }
}

impl SqliteRepository<Consumption> {
    pub fn get_consumptions_by_device_id(
        &self,
        device_id: EntityId,
    ) -> RepoResult<Vec<Consumption>> {
        self.list_where("device_id", device_id)
    }

    /// Filters on the stored `residence_id`, not on the device's residence.
    pub fn get_consumptions_by_residence_id(
        &self,
        residence_id: EntityId,
    ) -> RepoResult<Vec<Consumption>> {
        self.list_where("residence_id", residence_id)
    }
}

impl SqliteRepository<Notification> {
    pub fn get_notifications_by_client_id(
        &self,
        client_id: EntityId,
    ) -> RepoResult<Vec<Notification>> {
        self.list_where("client_id", client_id)
    }

    /// Sets the read flag to `Y` whatever its current value.
    ///
    /// Returns whether a row was affected; an unknown id yields `Ok(false)`
    /// and leaves the store unchanged.
    pub fn mark_as_read(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self.run(
            "mark_read",
            || format!("error marking notification {id} as read"),
            |conn| {
                let mut stmt =
                    conn.prepare("UPDATE notification SET read_status = ?1 WHERE id = ?2;")?;
                let changed = stmt.execute(params![ReadStatus::Read, id])?;
                Ok(changed)
            },
        )?;

        if changed > 0 {
            info!("event=notification_mark_read module=repo status=ok id={id} affected={changed}");
        } else {
            warn!("event=notification_mark_read module=repo status=not_found id={id} affected=0");
        }
        Ok(changed > 0)
    }
}
