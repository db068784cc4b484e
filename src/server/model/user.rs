//! User domain model and operation parameters.

use chrono::{DateTime, Utc};
use entity::UserRole;

use crate::model::user::{UpdateUserDto, UserDto};

/// Platform user with role, wallet balance and loyalty points.
///
/// The password hash stays in the entity layer; the domain model only carries
/// what the API surface exposes.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub wallet_balance: f64,
    pub reward_points: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            wallet_balance: entity.wallet_balance,
            reward_points: entity.reward_points,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            wallet_balance: self.wallet_balance,
            reward_points: self.reward_points,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a user row. The password arrives already hashed;
/// registration assigns role CLIENTE and zero wallet/points before building
/// this.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Parameters for the full-replace user update. A `None` password keeps the
/// stored hash.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}
