use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::ticket::{Ticket, TicketParams};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all tickets, most recent purchase first
    pub async fn get_all(&self) -> Result<Vec<Ticket>, DbErr> {
        let entities = entity::prelude::Ticket::find()
            .order_by_desc(entity::ticket::Column::PurchasedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }

    /// Finds a ticket by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, DbErr> {
        let entity = entity::prelude::Ticket::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Ticket::from_entity))
    }

    /// Gets the tickets of one user, most recent purchase first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Ticket>, DbErr> {
        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::UserId.eq(user_id))
            .order_by_desc(entity::ticket::Column::PurchasedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }

    /// Gets the tickets of one event, most recent purchase first
    pub async fn get_by_event(&self, event_id: i32) -> Result<Vec<Ticket>, DbErr> {
        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::EventId.eq(event_id))
            .order_by_desc(entity::ticket::Column::PurchasedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }

    /// Creates a new ticket stamped with the current purchase time
    pub async fn create(&self, params: TicketParams) -> Result<Ticket, DbErr> {
        let entity = entity::ticket::ActiveModel {
            ticket_type: ActiveValue::Set(params.ticket_type),
            purchased_at: ActiveValue::Set(Utc::now()),
            price: ActiveValue::Set(params.price),
            user_id: ActiveValue::Set(params.user_id),
            event_id: ActiveValue::Set(params.event_id),
            time_slot_id: ActiveValue::Set(params.time_slot_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ticket::from_entity(entity))
    }

    /// Replaces the mutable fields of a ticket; the purchase timestamp stays.
    /// Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: TicketParams) -> Result<Option<Ticket>, DbErr> {
        let Some(existing) = entity::prelude::Ticket::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::ticket::ActiveModel = existing.into();
        active.ticket_type = ActiveValue::Set(params.ticket_type);
        active.price = ActiveValue::Set(params.price);
        active.user_id = ActiveValue::Set(params.user_id);
        active.event_id = ActiveValue::Set(params.event_id);
        active.time_slot_id = ActiveValue::Set(params.time_slot_id);

        let entity = active.update(self.db).await?;

        Ok(Some(Ticket::from_entity(entity)))
    }

    /// Deletes a ticket. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Ticket::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a ticket exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Ticket::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
