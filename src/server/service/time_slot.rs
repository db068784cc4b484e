use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, time_slot::TimeSlotRepository},
    error::AppError,
    model::time_slot::{TimeSlot, TimeSlotParams},
};

const RESOURCE: &str = "TramoHorario";

pub struct TimeSlotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeSlotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all time slots
    pub async fn get_all(&self) -> Result<Vec<TimeSlot>, AppError> {
        let repo = TimeSlotRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a time slot by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<TimeSlot, AppError> {
        let repo = TimeSlotRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Gets the time slots of one club
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<TimeSlot>, AppError> {
        let repo = TimeSlotRepository::new(self.db);

        Ok(repo.get_by_club(club_id).await?)
    }

    /// Creates a new time slot, resolving its club first
    pub async fn create(&self, params: TimeSlotParams) -> Result<TimeSlot, AppError> {
        self.check_references(&params).await?;

        let repo = TimeSlotRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces a time slot by path ID, erroring when the ID has no row
    pub async fn update(&self, id: i32, params: TimeSlotParams) -> Result<TimeSlot, AppError> {
        self.check_references(&params).await?;

        let repo = TimeSlotRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes a time slot, erroring when the ID has no row
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TimeSlotRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    async fn check_references(&self, params: &TimeSlotParams) -> Result<(), AppError> {
        if !ClubRepository::new(self.db).exists(params.club_id).await? {
            return Err(AppError::not_found("Discoteca", params.club_id));
        }

        Ok(())
    }
}
