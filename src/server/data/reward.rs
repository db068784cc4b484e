use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::reward::{Reward, RewardParams};

pub struct RewardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RewardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all rewards ordered by name
    pub async fn get_all(&self) -> Result<Vec<Reward>, DbErr> {
        let entities = entity::prelude::Reward::find()
            .order_by_asc(entity::reward::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reward::from_entity).collect())
    }

    /// Finds a reward by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reward>, DbErr> {
        let entity = entity::prelude::Reward::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Reward::from_entity))
    }

    /// Creates a new reward
    pub async fn create(&self, params: RewardParams) -> Result<Reward, DbErr> {
        let entity = entity::reward::ActiveModel {
            name: ActiveValue::Set(params.name),
            points_required: ActiveValue::Set(params.points_required),
            description: ActiveValue::Set(params.description),
            valid_from: ActiveValue::Set(params.valid_from),
            valid_until: ActiveValue::Set(params.valid_until),
            bottle_id: ActiveValue::Set(params.bottle_id),
            reservation_id: ActiveValue::Set(params.reservation_id),
            ticket_id: ActiveValue::Set(params.ticket_id),
            event_id: ActiveValue::Set(params.event_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reward::from_entity(entity))
    }

    /// Replaces every field of a reward. Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: RewardParams) -> Result<Option<Reward>, DbErr> {
        let Some(existing) = entity::prelude::Reward::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::reward::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.points_required = ActiveValue::Set(params.points_required);
        active.description = ActiveValue::Set(params.description);
        active.valid_from = ActiveValue::Set(params.valid_from);
        active.valid_until = ActiveValue::Set(params.valid_until);
        active.bottle_id = ActiveValue::Set(params.bottle_id);
        active.reservation_id = ActiveValue::Set(params.reservation_id);
        active.ticket_id = ActiveValue::Set(params.ticket_id);
        active.event_id = ActiveValue::Set(params.event_id);

        let entity = active.update(self.db).await?;

        Ok(Some(Reward::from_entity(entity)))
    }

    /// Deletes a reward. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reward::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a reward exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reward::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records a redemption: which user redeemed which reward, when, and how
    /// many points it cost them.
    pub async fn insert_redemption(
        &self,
        user_id: i32,
        reward_id: i32,
        points_spent: i32,
    ) -> Result<entity::reward_redemption::Model, DbErr> {
        entity::reward_redemption::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            reward_id: ActiveValue::Set(reward_id),
            redeemed_at: ActiveValue::Set(Utc::now()),
            points_spent: ActiveValue::Set(points_spent),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
