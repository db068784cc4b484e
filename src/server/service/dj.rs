use sea_orm::DatabaseConnection;

use crate::server::{
    data::dj::DjRepository,
    error::AppError,
    model::dj::{Dj, DjParams},
};

const RESOURCE: &str = "Dj";

pub struct DjService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DjService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all DJs
    pub async fn get_all(&self) -> Result<Vec<Dj>, AppError> {
        let repo = DjRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a DJ by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<Dj, AppError> {
        let repo = DjRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Creates a new DJ
    pub async fn create(&self, params: DjParams) -> Result<Dj, AppError> {
        let repo = DjRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces a DJ by path ID, erroring when the ID has no row
    pub async fn update(&self, id: i32, params: DjParams) -> Result<Dj, AppError> {
        let repo = DjRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes a DJ, erroring when the ID has no row
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DjRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }
}
