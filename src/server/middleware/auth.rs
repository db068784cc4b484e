//! Bearer-token authentication guard.
//!
//! Handlers on guarded routes call `AuthGuard::require` with the permissions
//! the route demands. The guard extracts the `Authorization: Bearer` header,
//! validates the token, loads the user behind the token subject and checks
//! the role. The identity travels as the returned value, never as ambient
//! state.

use axum::http::{header, HeaderMap};
use entity::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::token::TokenService,
};

/// What a route demands from the caller.
pub enum Permission {
    /// Any authenticated identity.
    Authenticated,
    /// Platform administrator.
    Admin,
    /// Club administrator.
    ClubAdmin,
    /// Platform administrator or club administrator.
    Staff,
}

impl Permission {
    /// Whether a role grants this permission. Matches exhaustively so a new
    /// role variant forces every checkpoint to be revisited.
    fn granted_by(&self, role: UserRole) -> bool {
        match self {
            Permission::Authenticated => match role {
                UserRole::Cliente | UserRole::Admin | UserRole::AdminDiscoteca => true,
            },
            Permission::Admin => match role {
                UserRole::Admin => true,
                UserRole::Cliente | UserRole::AdminDiscoteca => false,
            },
            Permission::ClubAdmin => match role {
                UserRole::AdminDiscoteca => true,
                UserRole::Cliente | UserRole::Admin => false,
            },
            Permission::Staff => match role {
                UserRole::Admin | UserRole::AdminDiscoteca => true,
                UserRole::Cliente => false,
            },
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Establishes the caller's identity and checks it against the required
    /// permissions.
    ///
    /// An absent or invalid token answers 401; a valid token whose user
    /// lacks a required permission answers 403. On success the loaded user
    /// row is returned for the handler to use.
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.validate(token)?;

        let user = UserRepository::new(self.db)
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AuthError::UnknownUser(claims.sub.clone()))?;

        for permission in permissions {
            if !permission.granted_by(user.role) {
                return Err(AuthError::AccessDenied(user.id).into());
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
