use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::bottle::{Bottle, BottleParams};

pub struct BottleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BottleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all bottles ordered by name
    pub async fn get_all(&self) -> Result<Vec<Bottle>, DbErr> {
        let entities = entity::prelude::Bottle::find()
            .order_by_asc(entity::bottle::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bottle::from_entity).collect())
    }

    /// Finds a bottle by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bottle>, DbErr> {
        let entity = entity::prelude::Bottle::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Bottle::from_entity))
    }

    /// Gets the bottles of one club ordered by name
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<Bottle>, DbErr> {
        let entities = entity::prelude::Bottle::find()
            .filter(entity::bottle::Column::ClubId.eq(club_id))
            .order_by_asc(entity::bottle::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bottle::from_entity).collect())
    }

    /// Creates a new bottle
    pub async fn create(&self, params: BottleParams) -> Result<Bottle, DbErr> {
        let entity = entity::bottle::ActiveModel {
            name: ActiveValue::Set(params.name),
            bottle_type: ActiveValue::Set(params.bottle_type),
            size: ActiveValue::Set(params.size),
            price: ActiveValue::Set(params.price),
            available: ActiveValue::Set(params.available),
            image: ActiveValue::Set(params.image),
            club_id: ActiveValue::Set(params.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bottle::from_entity(entity))
    }

    /// Replaces every field of a bottle. Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: BottleParams) -> Result<Option<Bottle>, DbErr> {
        let Some(existing) = entity::prelude::Bottle::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::bottle::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.bottle_type = ActiveValue::Set(params.bottle_type);
        active.size = ActiveValue::Set(params.size);
        active.price = ActiveValue::Set(params.price);
        active.available = ActiveValue::Set(params.available);
        active.image = ActiveValue::Set(params.image);
        active.club_id = ActiveValue::Set(params.club_id);

        let entity = active.update(self.db).await?;

        Ok(Some(Bottle::from_entity(entity)))
    }

    /// Deletes a bottle. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Bottle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a bottle exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Bottle::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
