//! Time slot factory for creating test pricing slots.

use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TimeSlotFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    starts_at: NaiveTime,
    ends_at: NaiveTime,
    price_multiplier: f64,
}

impl<'a> TimeSlotFactory<'a> {
    /// Creates a new TimeSlotFactory with default values (23:00-06:00 slot,
    /// multiplier 1.0).
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        Self {
            db,
            club_id,
            starts_at: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            ends_at: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            price_multiplier: 1.0,
        }
    }

    pub fn price_multiplier(mut self, price_multiplier: f64) -> Self {
        self.price_multiplier = price_multiplier;
        self
    }

    pub async fn build(self) -> Result<entity::time_slot::Model, DbErr> {
        entity::time_slot::ActiveModel {
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            price_multiplier: ActiveValue::Set(self.price_multiplier),
            club_id: ActiveValue::Set(self.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a time slot with default values for the given club.
pub async fn create_time_slot(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::time_slot::Model, DbErr> {
    TimeSlotFactory::new(db, club_id).build().await
}
