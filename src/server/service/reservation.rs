use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        bottle::BottleRepository, reservation::ReservationRepository, ticket::TicketRepository,
        vip_zone::VipZoneRepository,
    },
    error::AppError,
    model::reservation::{BottleReservation, ReservationParams},
};

const RESOURCE: &str = "ReservaBotella";

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all bottle reservations with their details
    pub async fn get_all(&self) -> Result<Vec<BottleReservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a reservation by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<BottleReservation, AppError> {
        let repo = ReservationRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Gets the reservations attached to one ticket
    pub async fn get_by_ticket(&self, ticket_id: i32) -> Result<Vec<BottleReservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_by_ticket(ticket_id).await?)
    }

    /// Creates a new reservation with its details, resolving the ticket, the
    /// VIP zone and every detail's bottle first
    pub async fn create(&self, params: ReservationParams) -> Result<BottleReservation, AppError> {
        self.check_references(&params).await?;

        let repo = ReservationRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces a reservation and its details by path ID, erroring when the
    /// ID has no row
    pub async fn update(
        &self,
        id: i32,
        params: ReservationParams,
    ) -> Result<BottleReservation, AppError> {
        self.check_references(&params).await?;

        let repo = ReservationRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes a reservation and, through the schema cascade, its details
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ReservationRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    async fn check_references(&self, params: &ReservationParams) -> Result<(), AppError> {
        if !TicketRepository::new(self.db)
            .exists(params.ticket_id)
            .await?
        {
            return Err(AppError::not_found("Entrada", params.ticket_id));
        }
        if !VipZoneRepository::new(self.db)
            .exists(params.vip_zone_id)
            .await?
        {
            return Err(AppError::not_found("ZonaVip", params.vip_zone_id));
        }

        let bottles = BottleRepository::new(self.db);
        for detail in &params.details {
            if !bottles.exists(detail.bottle_id).await? {
                return Err(AppError::not_found("Botella", detail.bottle_id));
            }
        }

        Ok(())
    }
}
