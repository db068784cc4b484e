//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::EventStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
/// use entity::EventStatus;
///
/// let event = EventFactory::new(&db, club.id, dj.id, user.id)
///     .status(EventStatus::Cancelado)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    dj_id: i32,
    created_by: i32,
    name: String,
    starts_at: chrono::DateTime<Utc>,
    entry_price: f64,
    reserved_price: f64,
    capacity: i32,
    event_type: String,
    status: EventStatus,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"` where id is auto-incremented
    /// - starts_at: one week from now
    /// - entry_price: 20.0, reserved_price: 50.0, capacity: 300
    /// - status: `ACTIVO`
    pub fn new(db: &'a DatabaseConnection, club_id: i32, dj_id: i32, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            dj_id,
            created_by,
            name: format!("Event {}", id),
            starts_at: Utc::now() + chrono::Duration::days(7),
            entry_price: 20.0,
            reserved_price: 50.0,
            capacity: 300,
            event_type: "GENERAL".to_string(),
            status: EventStatus::Activo,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn starts_at(mut self, starts_at: chrono::DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self
    }

    pub fn entry_price(mut self, entry_price: f64) -> Self {
        self.entry_price = entry_price;
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            name: ActiveValue::Set(self.name),
            starts_at: ActiveValue::Set(self.starts_at),
            description: ActiveValue::Set(None),
            entry_price: ActiveValue::Set(self.entry_price),
            reserved_price: ActiveValue::Set(self.reserved_price),
            capacity: ActiveValue::Set(self.capacity),
            event_type: ActiveValue::Set(self.event_type),
            status: ActiveValue::Set(self.status),
            image: ActiveValue::Set(None),
            club_id: ActiveValue::Set(self.club_id),
            dj_id: ActiveValue::Set(self.dj_id),
            created_by: ActiveValue::Set(self.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    club_id: i32,
    dj_id: i32,
    created_by: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, club_id, dj_id, created_by).build().await
}
