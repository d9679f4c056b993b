//! Table descriptions binding entity values to SQLite rows.
//!
//! # Responsibility
//! - Name each entity's table and its non-id columns.
//! - Convert values to positional statement parameters and rows back to values.
//!
//! # Invariants
//! - `to_params` yields exactly one value per entry of `COLUMNS`, in order.
//! - `from_row` reads by column name and always sets `id`.

use crate::model::client::Client;
use crate::model::consumption::Consumption;
use crate::model::device::Device;
use crate::model::notification::{Notification, ReadStatus};
use crate::model::residence::Residence;
use crate::model::{EntityId, EntityKind};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Value, ValueRef};
use rusqlite::{Row, ToSql};

/// Storage description of one entity type.
pub trait Entity: Sized {
    const KIND: EntityKind;
    const TABLE: &'static str;
    /// Every persisted column except `id`.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<EntityId>;
    fn to_params(&self) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Client;
    const TABLE: &'static str = "client";
    const COLUMNS: &'static [&'static str] = &["name", "email", "phone", "address"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.email.clone().into(),
            self.phone.clone().into(),
            self.address.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            address: row.get("address")?,
        })
    }
}

impl Entity for Residence {
    const KIND: EntityKind = EntityKind::Residence;
    const TABLE: &'static str = "residence";
    const COLUMNS: &'static [&'static str] = &["address", "client_id"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn to_params(&self) -> Vec<Value> {
        vec![self.address.clone().into(), self.client_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            address: row.get("address")?,
            client_id: row.get("client_id")?,
        })
    }
}

impl Entity for Device {
    const KIND: EntityKind = EntityKind::Device;
    const TABLE: &'static str = "device";
    const COLUMNS: &'static [&'static str] =
        &["name", "type", "average_consumption", "residence_id"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.kind.clone().into(),
            self.average_consumption.into(),
            self.residence_id.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            kind: row.get("type")?,
            average_consumption: row.get("average_consumption")?,
            residence_id: row.get("residence_id")?,
        })
    }
}

impl Entity for Consumption {
    const KIND: EntityKind = EntityKind::Consumption;
    const TABLE: &'static str = "consumption";
    const COLUMNS: &'static [&'static str] = &["amount", "timestamp", "device_id", "residence_id"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.amount.into(),
            self.timestamp.into(),
            self.device_id.into(),
            self.residence_id.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            amount: row.get("amount")?,
            timestamp: row.get("timestamp")?,
            device_id: row.get("device_id")?,
            residence_id: row.get("residence_id")?,
        })
    }
}

impl Entity for Notification {
    const KIND: EntityKind = EntityKind::Notification;
    const TABLE: &'static str = "notification";
    const COLUMNS: &'static [&'static str] = &["message", "timestamp", "read_status", "client_id"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.message.clone().into(),
            self.timestamp.into(),
            Value::Text(self.read_status.as_flag().to_string()),
            self.client_id.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            message: row.get("message")?,
            timestamp: row.get("timestamp")?,
            read_status: row.get("read_status")?,
            client_id: row.get("client_id")?,
        })
    }
}

impl ToSql for ReadStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_flag()))
    }
}

impl FromSql for ReadStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let flag = value.as_str()?;
        ReadStatus::from_flag(flag).ok_or_else(|| {
            FromSqlError::Other(format!("invalid read flag `{flag}`; expected Y|N").into())
        })
    }
}

pub(crate) fn select_sql<E: Entity>() -> String {
    format!("SELECT id, {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
}

pub(crate) fn insert_sql<E: Entity>() -> String {
    let placeholders = (1..=E::COLUMNS.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({placeholders});",
        E::TABLE,
        E::COLUMNS.join(", ")
    )
}

pub(crate) fn update_sql<E: Entity>() -> String {
    let assignments = E::COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| format!("{column} = ?{}", index + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {assignments} WHERE id = ?{};",
        E::TABLE,
        E::COLUMNS.len() + 1
    )
}
