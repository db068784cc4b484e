//! Registration and login.
//!
//! Registration rejects duplicate emails and stores a salted hash; login
//! checks credentials and issues a signed token together with the account
//! facts the client shows after signing in. A failed login is not an error:
//! it yields `None` and the controller answers 401 with an all-null body,
//! which is the wire contract the platform's clients expect.

use entity::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, user::UserRepository},
    error::AppError,
    model::{
        auth::{LoginParams, LoginSession, RegisterParams},
        user::CreateUserParams,
    },
    service::{password, token::TokenService},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account with role CLIENTE and zero wallet/points.
    ///
    /// Blank fields are a validation error; an already-registered email is
    /// rejected with the duplicate-email message.
    pub async fn register(&self, params: RegisterParams) -> Result<(), AppError> {
        let mut field_errors = Vec::new();
        if params.name.trim().is_empty() {
            field_errors.push("nombre: must not be blank".to_string());
        }
        if params.email.trim().is_empty() {
            field_errors.push("email: must not be blank".to_string());
        }
        if params.password.is_empty() {
            field_errors.push("password: must not be blank".to_string());
        }
        if !field_errors.is_empty() {
            return Err(AppError::Validation(field_errors));
        }

        let repo = UserRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::BadRequest(
                "El email ya está registrado".to_string(),
            ));
        }

        repo.create(CreateUserParams {
            name: params.name,
            email: params.email,
            password_hash: password::hash_password(&params.password),
            role: UserRole::Cliente,
        })
        .await?;

        Ok(())
    }

    /// Attempts a login.
    ///
    /// Unknown email and wrong password both yield `Ok(None)`; the caller
    /// cannot tell which failed. On success the session carries the issued
    /// token, the role, wallet balance, reward points and, for club
    /// administrators, the first club they manage.
    pub async fn login(&self, params: LoginParams) -> Result<Option<LoginSession>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&params.email).await? else {
            return Ok(None);
        };

        if !password::verify_password(&params.password, &user.password_hash) {
            return Ok(None);
        }

        let club_id = match user.role {
            UserRole::AdminDiscoteca => {
                ClubRepository::new(self.db)
                    .first_club_id_for_user(user.id)
                    .await?
            }
            UserRole::Cliente | UserRole::Admin => None,
        };

        Ok(Some(LoginSession {
            token: self.tokens.issue(&user.email),
            role: user.role,
            wallet_balance: user.wallet_balance,
            reward_points: user.reward_points,
            club_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::builder::TestBuilder;

    fn tokens() -> TokenService {
        TokenService::new("test-secret", Duration::hours(1))
    }

    fn register_params() -> RegisterParams {
        RegisterParams {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "pw".to_string(),
        }
    }

    #[tokio::test]
    async fn registers_and_logs_in() {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        service.register(register_params()).await.unwrap();

        let session = service
            .login(LoginParams {
                email: "ana@x.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap()
            .expect("login should succeed");

        assert!(!session.token.is_empty());
        assert_eq!(session.role, UserRole::Cliente);
        assert_eq!(session.wallet_balance, 0.0);
        assert_eq!(session.reward_points, 0);
        assert_eq!(session.club_id, None);
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        service.register(register_params()).await.unwrap();
        let result = service.register(register_params()).await;

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "El email ya está registrado"),
            other => panic!("expected duplicate-email rejection, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn rejects_blank_fields() {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        let result = service
            .register(RegisterParams {
                name: "  ".to_string(),
                email: String::new(),
                password: String::new(),
            })
            .await;

        match result {
            Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation failure, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn wrong_credentials_yield_no_session() {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        service.register(register_params()).await.unwrap();

        let wrong_password = service
            .login(LoginParams {
                email: "ana@x.com".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap();
        let unknown_email = service
            .login(LoginParams {
                email: "eva@x.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        assert!(wrong_password.is_none());
        assert!(unknown_email.is_none());
    }

    #[tokio::test]
    async fn club_admin_session_carries_club_id() {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();

        let admin = test_utils::factory::user::UserFactory::new(db)
            .email("gestor@x.com")
            .password_hash(password::hash_password("pw"))
            .role(UserRole::AdminDiscoteca)
            .build()
            .await
            .unwrap();
        let city = test_utils::factory::create_city(db).await.unwrap();
        let club = test_utils::factory::create_club(db, city.id).await.unwrap();
        sea_orm::ActiveModelTrait::insert(
            entity::user_club::ActiveModel {
                user_id: sea_orm::ActiveValue::Set(admin.id),
                club_id: sea_orm::ActiveValue::Set(club.id),
            },
            db,
        )
        .await
        .unwrap();

        let service = AuthService::new(db, &tokens);
        let session = service
            .login(LoginParams {
                email: "gestor@x.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap()
            .expect("login should succeed");

        assert_eq!(session.club_id, Some(club.id));
    }
}
