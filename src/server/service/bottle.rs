use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bottle::BottleRepository, club::ClubRepository},
    error::AppError,
    model::bottle::{Bottle, BottleParams},
};

const RESOURCE: &str = "Botella";

pub struct BottleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BottleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all bottles
    pub async fn get_all(&self) -> Result<Vec<Bottle>, AppError> {
        let repo = BottleRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a bottle by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<Bottle, AppError> {
        let repo = BottleRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Gets the bottles of one club
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<Bottle>, AppError> {
        let repo = BottleRepository::new(self.db);

        Ok(repo.get_by_club(club_id).await?)
    }

    /// Creates a new bottle, resolving its club first
    pub async fn create(&self, params: BottleParams) -> Result<Bottle, AppError> {
        self.check_references(&params).await?;

        let repo = BottleRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces a bottle by path ID, erroring when the ID has no row
    pub async fn update(&self, id: i32, params: BottleParams) -> Result<Bottle, AppError> {
        self.check_references(&params).await?;

        let repo = BottleRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes a bottle, erroring when the ID has no row
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BottleRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    async fn check_references(&self, params: &BottleParams) -> Result<(), AppError> {
        if !ClubRepository::new(self.db).exists(params.club_id).await? {
            return Err(AppError::not_found("Discoteca", params.club_id));
        }

        Ok(())
    }
}
