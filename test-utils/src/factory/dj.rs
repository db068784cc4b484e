//! DJ factory for creating test DJ entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DjFactory<'a> {
    db: &'a DatabaseConnection,
    stage_name: String,
    real_name: Option<String>,
    genre: Option<String>,
}

impl<'a> DjFactory<'a> {
    /// Creates a new DjFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            stage_name: format!("DJ {}", id),
            real_name: None,
            genre: Some("Techno".to_string()),
        }
    }

    pub fn stage_name(mut self, stage_name: impl Into<String>) -> Self {
        self.stage_name = stage_name.into();
        self
    }

    pub async fn build(self) -> Result<entity::dj::Model, DbErr> {
        entity::dj::ActiveModel {
            stage_name: ActiveValue::Set(self.stage_name),
            real_name: ActiveValue::Set(self.real_name),
            bio: ActiveValue::Set(None),
            genre: ActiveValue::Set(self.genre),
            contact: ActiveValue::Set(None),
            image: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a DJ with default values.
pub async fn create_dj(db: &DatabaseConnection) -> Result<entity::dj::Model, DbErr> {
    DjFactory::new(db).build().await
}
