use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::dj::{Dj, DjParams};

pub struct DjRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DjRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all DJs ordered by stage name
    pub async fn get_all(&self) -> Result<Vec<Dj>, DbErr> {
        let entities = entity::prelude::Dj::find()
            .order_by_asc(entity::dj::Column::StageName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Dj::from_entity).collect())
    }

    /// Finds a DJ by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Dj>, DbErr> {
        let entity = entity::prelude::Dj::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Dj::from_entity))
    }

    /// Creates a new DJ
    pub async fn create(&self, params: DjParams) -> Result<Dj, DbErr> {
        let entity = entity::dj::ActiveModel {
            stage_name: ActiveValue::Set(params.stage_name),
            real_name: ActiveValue::Set(params.real_name),
            bio: ActiveValue::Set(params.bio),
            genre: ActiveValue::Set(params.genre),
            contact: ActiveValue::Set(params.contact),
            image: ActiveValue::Set(params.image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dj::from_entity(entity))
    }

    /// Replaces every field of a DJ. Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: DjParams) -> Result<Option<Dj>, DbErr> {
        let Some(existing) = entity::prelude::Dj::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::dj::ActiveModel = existing.into();
        active.stage_name = ActiveValue::Set(params.stage_name);
        active.real_name = ActiveValue::Set(params.real_name);
        active.bio = ActiveValue::Set(params.bio);
        active.genre = ActiveValue::Set(params.genre);
        active.contact = ActiveValue::Set(params.contact);
        active.image = ActiveValue::Set(params.image);

        let entity = active.update(self.db).await?;

        Ok(Some(Dj::from_entity(entity)))
    }

    /// Deletes a DJ. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Dj::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a DJ exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Dj::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
