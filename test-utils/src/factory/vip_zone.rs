//! VIP zone factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct VipZoneFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    name: String,
    max_capacity: i32,
    status: String,
}

impl<'a> VipZoneFactory<'a> {
    /// Creates a new VipZoneFactory with default values (DISPONIBLE zone for
    /// 20 guests).
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            name: format!("Zona VIP {}", id),
            max_capacity: 20,
            status: "DISPONIBLE".to_string(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::vip_zone::Model, DbErr> {
        entity::vip_zone::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            max_capacity: ActiveValue::Set(self.max_capacity),
            status: ActiveValue::Set(self.status),
            club_id: ActiveValue::Set(self.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a VIP zone with default values for the given club.
pub async fn create_vip_zone(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::vip_zone::Model, DbErr> {
    VipZoneFactory::new(db, club_id).build().await
}
