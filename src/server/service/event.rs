use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, dj::DjRepository, event::EventRepository, user::UserRepository},
    error::AppError,
    model::event::{Event, EventParams},
};

const RESOURCE: &str = "Evento";

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all events
    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets an event by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Gets the events of one club
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);

        Ok(repo.get_by_club(club_id).await?)
    }

    /// Gets only the ACTIVO events of one club
    pub async fn get_active_by_club(&self, club_id: i32) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);

        Ok(repo.get_active_by_club(club_id).await?)
    }

    /// Creates a new event, resolving its club, DJ and creator first
    pub async fn create(&self, params: EventParams) -> Result<Event, AppError> {
        self.check_references(&params).await?;

        let repo = EventRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces an event by path ID, erroring when the ID has no row
    pub async fn update(&self, id: i32, params: EventParams) -> Result<Event, AppError> {
        self.check_references(&params).await?;

        let repo = EventRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes an event, erroring when the ID has no row
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    async fn check_references(&self, params: &EventParams) -> Result<(), AppError> {
        if !ClubRepository::new(self.db).exists(params.club_id).await? {
            return Err(AppError::not_found("Discoteca", params.club_id));
        }
        if !DjRepository::new(self.db).exists(params.dj_id).await? {
            return Err(AppError::not_found("Dj", params.dj_id));
        }
        if !UserRepository::new(self.db).exists(params.created_by).await? {
            return Err(AppError::not_found("Usuario", params.created_by));
        }

        Ok(())
    }
}
