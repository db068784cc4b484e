//! Ticket factory for creating test ticket entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    event_id: i32,
    time_slot_id: i32,
    ticket_type: String,
    price: f64,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values (GENERAL ticket at
    /// 20.0, purchased now).
    pub fn new(db: &'a DatabaseConnection, user_id: i32, event_id: i32, time_slot_id: i32) -> Self {
        Self {
            db,
            user_id,
            event_id,
            time_slot_id,
            ticket_type: "GENERAL".to_string(),
            price: 20.0,
        }
    }

    pub fn ticket_type(mut self, ticket_type: impl Into<String>) -> Self {
        self.ticket_type = ticket_type.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            ticket_type: ActiveValue::Set(self.ticket_type),
            purchased_at: ActiveValue::Set(Utc::now()),
            price: ActiveValue::Set(self.price),
            user_id: ActiveValue::Set(self.user_id),
            event_id: ActiveValue::Set(self.event_id),
            time_slot_id: ActiveValue::Set(self.time_slot_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket with default values.
pub async fn create_ticket(
    db: &DatabaseConnection,
    user_id: i32,
    event_id: i32,
    time_slot_id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, user_id, event_id, time_slot_id)
        .build()
        .await
}
