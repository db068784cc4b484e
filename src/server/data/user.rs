//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Unlike
//! the other repositories it returns entity models rather than domain models:
//! the authentication service and guard need the stored password hash, which
//! the domain model deliberately does not carry. Callers convert with
//! `User::from_entity` before anything leaves the service layer.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::CreateUserParams;

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user record.
    ///
    /// # Arguments
    /// - `params` - Name, email, hashed password and role for the new row
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including the unique-email violation
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role),
            wallet_balance: ActiveValue::Set(0.0),
            reward_points: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email, the login identifier and token subject.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether an email is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all users ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await
    }

    /// Replaces a user's name, email and optionally password hash.
    ///
    /// Role, wallet balance and reward points are untouched; the update
    /// endpoint only replaces profile fields. Returns None if the ID has no
    /// row.
    ///
    /// # Arguments
    /// - `id` - User ID to update
    /// - `name` / `email` - Replacement profile fields
    /// - `password_hash` - New stored hash, or None to keep the current one
    pub async fn update(
        &self,
        id: i32,
        name: String,
        email: String,
        password_hash: Option<String>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.name = ActiveValue::Set(name);
        active.email = ActiveValue::Set(email);
        if let Some(hash) = password_hash {
            active.password_hash = ActiveValue::Set(hash);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(entity))
    }

    /// Adds an amount to a user's wallet balance.
    ///
    /// Returns the updated row, or None if the ID has no row.
    pub async fn add_wallet_balance(
        &self,
        id: i32,
        amount: f64,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let balance = existing.wallet_balance + amount;
        let mut active: entity::user::ActiveModel = existing.into();
        active.wallet_balance = ActiveValue::Set(balance);

        let entity = active.update(self.db).await?;

        Ok(Some(entity))
    }

    /// Subtracts reward points from a user.
    ///
    /// The caller checks sufficiency first; this only performs the write.
    /// Returns the updated row, or None if the ID has no row.
    pub async fn spend_reward_points(
        &self,
        id: i32,
        points: i32,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let remaining = existing.reward_points - points;
        let mut active: entity::user::ActiveModel = existing.into();
        active.reward_points = ActiveValue::Set(remaining);

        let entity = active.update(self.db).await?;

        Ok(Some(entity))
    }

    /// Deletes a user; club links, redemptions, tickets and orders go with it
    /// through the schema cascades. Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a user exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
