use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{BottleReservation, ReservationParams};

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all bottle reservations with their details
    pub async fn get_all(&self) -> Result<Vec<BottleReservation>, DbErr> {
        let rows = entity::prelude::BottleReservation::find()
            .find_with_related(entity::prelude::ReservationDetail)
            .order_by_asc(entity::bottle_reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(reservation, details)| BottleReservation::from_entities(reservation, details))
            .collect())
    }

    /// Finds a bottle reservation by ID with its details
    pub async fn find_by_id(&self, id: i32) -> Result<Option<BottleReservation>, DbErr> {
        let rows = entity::prelude::BottleReservation::find_by_id(id)
            .find_with_related(entity::prelude::ReservationDetail)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(reservation, details)| BottleReservation::from_entities(reservation, details)))
    }

    /// Gets the reservations attached to one ticket
    pub async fn get_by_ticket(&self, ticket_id: i32) -> Result<Vec<BottleReservation>, DbErr> {
        let rows = entity::prelude::BottleReservation::find()
            .filter(entity::bottle_reservation::Column::TicketId.eq(ticket_id))
            .find_with_related(entity::prelude::ReservationDetail)
            .order_by_asc(entity::bottle_reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(reservation, details)| BottleReservation::from_entities(reservation, details))
            .collect())
    }

    /// Creates a new reservation and its details
    pub async fn create(&self, params: ReservationParams) -> Result<BottleReservation, DbErr> {
        let reservation = entity::bottle_reservation::ActiveModel {
            guest_count: ActiveValue::Set(params.guest_count),
            total: ActiveValue::Set(params.total),
            reservation_type: ActiveValue::Set(params.reservation_type),
            ticket_id: ActiveValue::Set(params.ticket_id),
            vip_zone_id: ActiveValue::Set(params.vip_zone_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut details = Vec::with_capacity(params.details.len());
        for detail in params.details {
            let detail = entity::reservation_detail::ActiveModel {
                quantity: ActiveValue::Set(detail.quantity),
                unit_price: ActiveValue::Set(detail.unit_price),
                bottle_id: ActiveValue::Set(detail.bottle_id),
                reservation_id: ActiveValue::Set(reservation.id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            details.push(detail);
        }

        Ok(BottleReservation::from_entities(reservation, details))
    }

    /// Replaces a reservation's fields and details. Existing details are
    /// dropped and the given ones inserted in their place. Returns None if
    /// the ID has no row.
    pub async fn update(
        &self,
        id: i32,
        params: ReservationParams,
    ) -> Result<Option<BottleReservation>, DbErr> {
        let Some(existing) = entity::prelude::BottleReservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::bottle_reservation::ActiveModel = existing.into();
        active.guest_count = ActiveValue::Set(params.guest_count);
        active.total = ActiveValue::Set(params.total);
        active.reservation_type = ActiveValue::Set(params.reservation_type);
        active.ticket_id = ActiveValue::Set(params.ticket_id);
        active.vip_zone_id = ActiveValue::Set(params.vip_zone_id);

        let reservation = active.update(self.db).await?;

        entity::prelude::ReservationDetail::delete_many()
            .filter(entity::reservation_detail::Column::ReservationId.eq(id))
            .exec(self.db)
            .await?;

        let mut details = Vec::with_capacity(params.details.len());
        for detail in params.details {
            let detail = entity::reservation_detail::ActiveModel {
                quantity: ActiveValue::Set(detail.quantity),
                unit_price: ActiveValue::Set(detail.unit_price),
                bottle_id: ActiveValue::Set(detail.bottle_id),
                reservation_id: ActiveValue::Set(id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            details.push(detail);
        }

        Ok(Some(BottleReservation::from_entities(reservation, details)))
    }

    /// Deletes a reservation; its details go with it through the schema
    /// cascade. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BottleReservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a reservation exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::BottleReservation::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
