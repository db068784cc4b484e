use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vip_zone::{VipZone, VipZoneParams};

pub struct VipZoneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VipZoneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all VIP zones ordered by name
    pub async fn get_all(&self) -> Result<Vec<VipZone>, DbErr> {
        let entities = entity::prelude::VipZone::find()
            .order_by_asc(entity::vip_zone::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(VipZone::from_entity).collect())
    }

    /// Finds a VIP zone by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<VipZone>, DbErr> {
        let entity = entity::prelude::VipZone::find_by_id(id).one(self.db).await?;

        Ok(entity.map(VipZone::from_entity))
    }

    /// Gets the VIP zones of one club ordered by name
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<VipZone>, DbErr> {
        let entities = entity::prelude::VipZone::find()
            .filter(entity::vip_zone::Column::ClubId.eq(club_id))
            .order_by_asc(entity::vip_zone::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(VipZone::from_entity).collect())
    }

    /// Creates a new VIP zone
    pub async fn create(&self, params: VipZoneParams) -> Result<VipZone, DbErr> {
        let entity = entity::vip_zone::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            max_capacity: ActiveValue::Set(params.max_capacity),
            status: ActiveValue::Set(params.status),
            club_id: ActiveValue::Set(params.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(VipZone::from_entity(entity))
    }

    /// Replaces every field of a VIP zone. Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: VipZoneParams) -> Result<Option<VipZone>, DbErr> {
        let Some(existing) = entity::prelude::VipZone::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::vip_zone::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.max_capacity = ActiveValue::Set(params.max_capacity);
        active.status = ActiveValue::Set(params.status);
        active.club_id = ActiveValue::Set(params.club_id);

        let entity = active.update(self.db).await?;

        Ok(Some(VipZone::from_entity(entity)))
    }

    /// Deletes a VIP zone. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::VipZone::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a VIP zone exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::VipZone::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
