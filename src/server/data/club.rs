use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::club::{Club, ClubParams};

pub struct ClubRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all clubs ordered by name
    pub async fn get_all(&self) -> Result<Vec<Club>, DbErr> {
        let entities = entity::prelude::Club::find()
            .order_by_asc(entity::club::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Club::from_entity).collect())
    }

    /// Finds a club by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Club>, DbErr> {
        let entity = entity::prelude::Club::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Club::from_entity))
    }

    /// Gets the clubs of one city ordered by name
    pub async fn get_by_city(&self, city_id: i32) -> Result<Vec<Club>, DbErr> {
        let entities = entity::prelude::Club::find()
            .filter(entity::club::Column::CityId.eq(city_id))
            .order_by_asc(entity::club::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Club::from_entity).collect())
    }

    /// Creates a new club, linking the administrator user when one is given.
    pub async fn create(&self, params: ClubParams) -> Result<Club, DbErr> {
        let club = entity::club::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            description: ActiveValue::Set(params.description),
            capacity: ActiveValue::Set(params.capacity),
            image: ActiveValue::Set(params.image),
            city_id: ActiveValue::Set(params.city_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if let Some(admin_user_id) = params.admin_user_id {
            entity::user_club::ActiveModel {
                user_id: ActiveValue::Set(admin_user_id),
                club_id: ActiveValue::Set(club.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(Club::from_entity(club))
    }

    /// Replaces every field of a club. The administrator link is untouched.
    /// Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: ClubParams) -> Result<Option<Club>, DbErr> {
        let Some(existing) = entity::prelude::Club::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::club::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.address = ActiveValue::Set(params.address);
        active.description = ActiveValue::Set(params.description);
        active.capacity = ActiveValue::Set(params.capacity);
        active.image = ActiveValue::Set(params.image);
        active.city_id = ActiveValue::Set(params.city_id);

        let entity = active.update(self.db).await?;

        Ok(Some(Club::from_entity(entity)))
    }

    /// Deletes a club. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Club::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a club exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Club::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets the ID of the first club a user administers, lowest club ID first.
    pub async fn first_club_id_for_user(&self, user_id: i32) -> Result<Option<i32>, DbErr> {
        let link = entity::prelude::UserClub::find()
            .filter(entity::user_club::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_club::Column::ClubId)
            .one(self.db)
            .await?;

        Ok(link.map(|l| l.club_id))
    }
}
