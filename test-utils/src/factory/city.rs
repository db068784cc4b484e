//! City factory for creating test city entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    province: String,
    country: String,
    postal_code: String,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("City {}", id),
            province: format!("Province {}", id),
            country: "España".to_string(),
            postal_code: "28001".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            name: ActiveValue::Set(self.name),
            province: ActiveValue::Set(self.province),
            country: ActiveValue::Set(self.country),
            postal_code: ActiveValue::Set(self.postal_code),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}
