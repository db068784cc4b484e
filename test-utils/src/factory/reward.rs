//! Reward factory for creating test loyalty rewards.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rewards with customizable fields.
///
/// A reward references a bottle, a reservation, a ticket and an event; all
/// four IDs are required. Use `helpers::create_reward_with_dependencies` to
/// build the whole chain with defaults.
pub struct RewardFactory<'a> {
    db: &'a DatabaseConnection,
    bottle_id: i32,
    reservation_id: i32,
    ticket_id: i32,
    event_id: i32,
    name: String,
    points_required: i32,
    valid_from: chrono::DateTime<Utc>,
    valid_until: chrono::DateTime<Utc>,
}

impl<'a> RewardFactory<'a> {
    /// Creates a new RewardFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Reward {id}"` where id is auto-incremented
    /// - points_required: 100
    /// - validity window: from yesterday to 30 days from now
    pub fn new(
        db: &'a DatabaseConnection,
        bottle_id: i32,
        reservation_id: i32,
        ticket_id: i32,
        event_id: i32,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            bottle_id,
            reservation_id,
            ticket_id,
            event_id,
            name: format!("Reward {}", id),
            points_required: 100,
            valid_from: Utc::now() - chrono::Duration::days(1),
            valid_until: Utc::now() + chrono::Duration::days(30),
        }
    }

    pub fn points_required(mut self, points_required: i32) -> Self {
        self.points_required = points_required;
        self
    }

    pub fn valid_from(mut self, valid_from: chrono::DateTime<Utc>) -> Self {
        self.valid_from = valid_from;
        self
    }

    pub fn valid_until(mut self, valid_until: chrono::DateTime<Utc>) -> Self {
        self.valid_until = valid_until;
        self
    }

    pub async fn build(self) -> Result<entity::reward::Model, DbErr> {
        entity::reward::ActiveModel {
            name: ActiveValue::Set(self.name),
            points_required: ActiveValue::Set(self.points_required),
            description: ActiveValue::Set(None),
            valid_from: ActiveValue::Set(self.valid_from),
            valid_until: ActiveValue::Set(self.valid_until),
            bottle_id: ActiveValue::Set(self.bottle_id),
            reservation_id: ActiveValue::Set(self.reservation_id),
            ticket_id: ActiveValue::Set(self.ticket_id),
            event_id: ActiveValue::Set(self.event_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reward with default values.
pub async fn create_reward(
    db: &DatabaseConnection,
    bottle_id: i32,
    reservation_id: i32,
    ticket_id: i32,
    event_id: i32,
) -> Result<entity::reward::Model, DbErr> {
    RewardFactory::new(db, bottle_id, reservation_id, ticket_id, event_id)
        .build()
        .await
}
