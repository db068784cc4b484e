use sea_orm::DatabaseConnection;

use crate::server::{
    data::{city::CityRepository, club::ClubRepository, user::UserRepository},
    error::AppError,
    model::club::{Club, ClubParams},
};

const RESOURCE: &str = "Discoteca";

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all clubs
    pub async fn get_all(&self) -> Result<Vec<Club>, AppError> {
        let repo = ClubRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a club by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<Club, AppError> {
        let repo = ClubRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Gets the clubs of one city
    pub async fn get_by_city(&self, city_id: i32) -> Result<Vec<Club>, AppError> {
        let repo = ClubRepository::new(self.db);

        Ok(repo.get_by_city(city_id).await?)
    }

    /// Creates a new club, resolving the city and the optional administrator
    /// before the insert.
    pub async fn create(&self, params: ClubParams) -> Result<Club, AppError> {
        self.check_references(&params).await?;

        let repo = ClubRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces a club by path ID, erroring when the ID has no row
    pub async fn update(&self, id: i32, params: ClubParams) -> Result<Club, AppError> {
        self.check_references(&params).await?;

        let repo = ClubRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes a club, erroring when the ID has no row
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ClubRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    async fn check_references(&self, params: &ClubParams) -> Result<(), AppError> {
        if !CityRepository::new(self.db).exists(params.city_id).await? {
            return Err(AppError::not_found("Ciudad", params.city_id));
        }

        if let Some(admin_user_id) = params.admin_user_id {
            if !UserRepository::new(self.db).exists(admin_user_id).await? {
                return Err(AppError::not_found("Usuario", admin_user_id));
            }
        }

        Ok(())
    }
}
