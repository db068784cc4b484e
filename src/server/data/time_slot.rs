use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::time_slot::{TimeSlot, TimeSlotParams};

pub struct TimeSlotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeSlotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all time slots ordered by start time
    pub async fn get_all(&self) -> Result<Vec<TimeSlot>, DbErr> {
        let entities = entity::prelude::TimeSlot::find()
            .order_by_asc(entity::time_slot::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TimeSlot::from_entity).collect())
    }

    /// Finds a time slot by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TimeSlot>, DbErr> {
        let entity = entity::prelude::TimeSlot::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TimeSlot::from_entity))
    }

    /// Gets the time slots of one club ordered by start time
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<TimeSlot>, DbErr> {
        let entities = entity::prelude::TimeSlot::find()
            .filter(entity::time_slot::Column::ClubId.eq(club_id))
            .order_by_asc(entity::time_slot::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TimeSlot::from_entity).collect())
    }

    /// Creates a new time slot
    pub async fn create(&self, params: TimeSlotParams) -> Result<TimeSlot, DbErr> {
        let entity = entity::time_slot::ActiveModel {
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            price_multiplier: ActiveValue::Set(params.price_multiplier),
            club_id: ActiveValue::Set(params.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TimeSlot::from_entity(entity))
    }

    /// Replaces every field of a time slot. Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: TimeSlotParams) -> Result<Option<TimeSlot>, DbErr> {
        let Some(existing) = entity::prelude::TimeSlot::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::time_slot::ActiveModel = existing.into();
        active.starts_at = ActiveValue::Set(params.starts_at);
        active.ends_at = ActiveValue::Set(params.ends_at);
        active.price_multiplier = ActiveValue::Set(params.price_multiplier);
        active.club_id = ActiveValue::Set(params.club_id);

        let entity = active.update(self.db).await?;

        Ok(Some(TimeSlot::from_entity(entity)))
    }

    /// Deletes a time slot. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TimeSlot::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a time slot exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TimeSlot::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
