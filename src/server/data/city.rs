use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::city::{City, CityParams};

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all cities ordered by name
    pub async fn get_all(&self) -> Result<Vec<City>, DbErr> {
        let entities = entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(City::from_entity).collect())
    }

    /// Finds a city by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<City>, DbErr> {
        let entity = entity::prelude::City::find_by_id(id).one(self.db).await?;

        Ok(entity.map(City::from_entity))
    }

    /// Creates a new city
    pub async fn create(&self, params: CityParams) -> Result<City, DbErr> {
        let entity = entity::city::ActiveModel {
            name: ActiveValue::Set(params.name),
            province: ActiveValue::Set(params.province),
            country: ActiveValue::Set(params.country),
            postal_code: ActiveValue::Set(params.postal_code),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(City::from_entity(entity))
    }

    /// Replaces every field of a city. Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: CityParams) -> Result<Option<City>, DbErr> {
        let Some(existing) = entity::prelude::City::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::city::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.province = ActiveValue::Set(params.province);
        active.country = ActiveValue::Set(params.country);
        active.postal_code = ActiveValue::Set(params.postal_code);

        let entity = active.update(self.db).await?;

        Ok(Some(City::from_entity(entity)))
    }

    /// Deletes a city. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::City::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a city exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::City::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
