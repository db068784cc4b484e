//! Bottle reservation factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BottleReservationFactory<'a> {
    db: &'a DatabaseConnection,
    ticket_id: i32,
    vip_zone_id: i32,
    guest_count: i32,
    total: f64,
    reservation_type: String,
}

impl<'a> BottleReservationFactory<'a> {
    /// Creates a new BottleReservationFactory with default values (4 guests,
    /// ESTANDAR, total 150.0).
    pub fn new(db: &'a DatabaseConnection, ticket_id: i32, vip_zone_id: i32) -> Self {
        Self {
            db,
            ticket_id,
            vip_zone_id,
            guest_count: 4,
            total: 150.0,
            reservation_type: "ESTANDAR".to_string(),
        }
    }

    pub fn guest_count(mut self, guest_count: i32) -> Self {
        self.guest_count = guest_count;
        self
    }

    pub fn total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    pub async fn build(self) -> Result<entity::bottle_reservation::Model, DbErr> {
        entity::bottle_reservation::ActiveModel {
            guest_count: ActiveValue::Set(self.guest_count),
            total: ActiveValue::Set(self.total),
            reservation_type: ActiveValue::Set(self.reservation_type),
            ticket_id: ActiveValue::Set(self.ticket_id),
            vip_zone_id: ActiveValue::Set(self.vip_zone_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bottle reservation with default values.
pub async fn create_reservation(
    db: &DatabaseConnection,
    ticket_id: i32,
    vip_zone_id: i32,
) -> Result<entity::bottle_reservation::Model, DbErr> {
    BottleReservationFactory::new(db, ticket_id, vip_zone_id)
        .build()
        .await
}
