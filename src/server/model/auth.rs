//! Authentication operation parameters and results.

use entity::UserRole;

use crate::model::auth::{LoginDto, LoginResponseDto, RegisterDto};

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for a login attempt.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// A successful login: the issued token plus the account facts the client
/// shows after signing in. `club_id` is set only for club administrators.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub role: UserRole,
    pub wallet_balance: f64,
    pub reward_points: i32,
    pub club_id: Option<i32>,
}

impl LoginSession {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            token: Some(self.token),
            role: Some(self.role.as_str().to_string()),
            wallet_balance: Some(self.wallet_balance),
            reward_points: Some(self.reward_points),
            club_id: self.club_id,
        }
    }
}
