//! Bottle product factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BottleFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    name: String,
    bottle_type: String,
    size: String,
    price: f64,
    available: bool,
}

impl<'a> BottleFactory<'a> {
    /// Creates a new BottleFactory with default values (available 750ml vodka
    /// at 120.0).
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            name: format!("Bottle {}", id),
            bottle_type: "VODKA".to_string(),
            size: "750ml".to_string(),
            price: 120.0,
            available: true,
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub async fn build(self) -> Result<entity::bottle::Model, DbErr> {
        entity::bottle::ActiveModel {
            name: ActiveValue::Set(self.name),
            bottle_type: ActiveValue::Set(self.bottle_type),
            size: ActiveValue::Set(self.size),
            price: ActiveValue::Set(self.price),
            available: ActiveValue::Set(self.available),
            image: ActiveValue::Set(None),
            club_id: ActiveValue::Set(self.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bottle with default values for the given club.
pub async fn create_bottle(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::bottle::Model, DbErr> {
    BottleFactory::new(db, club_id).build().await
}
