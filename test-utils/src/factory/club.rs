//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    city_id: i32,
    name: String,
    address: String,
    description: Option<String>,
    capacity: i32,
    image: Option<String>,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `city_id` - City the club belongs to
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            city_id,
            name: format!("Club {}", id),
            address: format!("Calle Mayor {}", id),
            description: None,
            capacity: 500,
            image: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            description: ActiveValue::Set(self.description),
            capacity: ActiveValue::Set(self.capacity),
            image: ActiveValue::Set(self.image),
            city_id: ActiveValue::Set(self.city_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values in the given city.
pub async fn create_club(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db, city_id).build().await
}
