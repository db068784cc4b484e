use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::EventRepository, ticket::TicketRepository, time_slot::TimeSlotRepository,
        user::UserRepository,
    },
    error::AppError,
    model::ticket::{Ticket, TicketParams},
};

const RESOURCE: &str = "Entrada";

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all tickets
    pub async fn get_all(&self) -> Result<Vec<Ticket>, AppError> {
        let repo = TicketRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a ticket by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<Ticket, AppError> {
        let repo = TicketRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Gets the tickets of one user
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Ticket>, AppError> {
        let repo = TicketRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Gets the tickets of one event
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<Ticket>, AppError> {
        let repo = TicketRepository::new(self.db);

        Ok(repo.get_by_event(event_id).await?)
    }

    /// Creates a new ticket, resolving its user, event and time slot first
    pub async fn create(&self, params: TicketParams) -> Result<Ticket, AppError> {
        self.check_references(&params).await?;

        let repo = TicketRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces a ticket by path ID, erroring when the ID has no row
    pub async fn update(&self, id: i32, params: TicketParams) -> Result<Ticket, AppError> {
        self.check_references(&params).await?;

        let repo = TicketRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes a ticket, erroring when the ID has no row
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TicketRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    async fn check_references(&self, params: &TicketParams) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(params.user_id).await? {
            return Err(AppError::not_found("Usuario", params.user_id));
        }
        if !EventRepository::new(self.db).exists(params.event_id).await? {
            return Err(AppError::not_found("Evento", params.event_id));
        }
        if !TimeSlotRepository::new(self.db)
            .exists(params.time_slot_id)
            .await?
        {
            return Err(AppError::not_found("TramoHorario", params.time_slot_id));
        }

        Ok(())
    }
}
