use entity::EventStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{Event, EventParams};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all events ordered by start time
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Finds an event by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Gets the events of one club ordered by start time
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::ClubId.eq(club_id))
            .order_by_asc(entity::event::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Gets only the ACTIVO events of one club ordered by start time
    pub async fn get_active_by_club(&self, club_id: i32) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::ClubId.eq(club_id))
            .filter(entity::event::Column::Status.eq(EventStatus::Activo))
            .order_by_asc(entity::event::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Creates a new event
    pub async fn create(&self, params: EventParams) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            name: ActiveValue::Set(params.name),
            starts_at: ActiveValue::Set(params.starts_at),
            description: ActiveValue::Set(params.description),
            entry_price: ActiveValue::Set(params.entry_price),
            reserved_price: ActiveValue::Set(params.reserved_price),
            capacity: ActiveValue::Set(params.capacity),
            event_type: ActiveValue::Set(params.event_type),
            status: ActiveValue::Set(params.status),
            image: ActiveValue::Set(params.image),
            club_id: ActiveValue::Set(params.club_id),
            dj_id: ActiveValue::Set(params.dj_id),
            created_by: ActiveValue::Set(params.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    /// Replaces every field of an event. Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: EventParams) -> Result<Option<Event>, DbErr> {
        let Some(existing) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.starts_at = ActiveValue::Set(params.starts_at);
        active.description = ActiveValue::Set(params.description);
        active.entry_price = ActiveValue::Set(params.entry_price);
        active.reserved_price = ActiveValue::Set(params.reserved_price);
        active.capacity = ActiveValue::Set(params.capacity);
        active.event_type = ActiveValue::Set(params.event_type);
        active.status = ActiveValue::Set(params.status);
        active.image = ActiveValue::Set(params.image);
        active.club_id = ActiveValue::Set(params.club_id);
        active.dj_id = ActiveValue::Set(params.dj_id);
        active.created_by = ActiveValue::Set(params.created_by);

        let entity = active.update(self.db).await?;

        Ok(Some(Event::from_entity(entity)))
    }

    /// Deletes an event. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an event exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
