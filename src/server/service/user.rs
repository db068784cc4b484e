use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParams, User},
    service::password,
};

const RESOURCE: &str = "Usuario";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let entities = repo.get_all().await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets a user by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let entity = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))?;

        Ok(User::from_entity(entity))
    }

    /// Replaces a user's profile fields by path ID.
    ///
    /// A present password is hashed before storage; a missing one keeps the
    /// stored hash. Role, wallet and points are untouched.
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let password_hash = params.password.as_deref().map(password::hash_password);

        let entity = repo
            .update(id, params.name, params.email, password_hash)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))?;

        Ok(User::from_entity(entity))
    }

    /// Adds a positive amount to a user's wallet balance.
    pub async fn top_up_wallet(&self, user_id: i32, amount: f64) -> Result<User, AppError> {
        if amount <= 0.0 {
            return Err(AppError::Validation(vec![
                "amount: must be greater than 0".to_string(),
            ]));
        }

        let repo = UserRepository::new(self.db);

        let entity = repo
            .add_wallet_balance(user_id, amount)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, user_id))?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user, erroring when the ID has no row. Club links,
    /// redemptions, tickets and orders disappear through the schema cascades.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn top_up_adds_to_balance() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();

        let service = UserService::new(db);
        let updated = service.top_up_wallet(user.id, 50.0).await.unwrap();

        assert_eq!(updated.wallet_balance, 50.0);
    }

    #[tokio::test]
    async fn top_up_rejects_non_positive_amounts() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();

        let service = UserService::new(db);

        assert!(matches!(
            service.top_up_wallet(user.id, 0.0).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.top_up_wallet(user.id, -5.0).await,
            Err(AppError::Validation(_))
        ));

        let stored = service.get_by_id(user.id).await.unwrap();
        assert_eq!(stored.wallet_balance, 0.0);
    }

    #[tokio::test]
    async fn update_forces_path_id() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();

        let service = UserService::new(db);
        let updated = service
            .update(
                user.id,
                UpdateUserParams {
                    name: "Ana".to_string(),
                    email: "ana@x.com".to_string(),
                    password: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.email, "ana@x.com");
    }
}
