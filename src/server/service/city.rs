use sea_orm::DatabaseConnection;

use crate::server::{
    data::city::CityRepository,
    error::AppError,
    model::city::{City, CityParams},
};

const RESOURCE: &str = "Ciudad";

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all cities
    pub async fn get_all(&self) -> Result<Vec<City>, AppError> {
        let repo = CityRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a city by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<City, AppError> {
        let repo = CityRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Creates a new city
    pub async fn create(&self, params: CityParams) -> Result<City, AppError> {
        let repo = CityRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces a city by path ID, erroring when the ID has no row
    pub async fn update(&self, id: i32, params: CityParams) -> Result<City, AppError> {
        let repo = CityRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes a city, erroring when the ID has no row
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CityRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }
}
