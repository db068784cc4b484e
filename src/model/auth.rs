use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration payload. The `nombre` key is part of the legacy wire
/// contract and kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Login response. Every field is null on a failed login; on success the
/// token comes with the caller's role, wallet balance, reward points and,
/// for club administrators, the club they manage.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub token: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "monedero")]
    pub wallet_balance: Option<f64>,
    #[serde(rename = "puntosRecompensa")]
    pub reward_points: Option<i32>,
    #[serde(rename = "discotecaId")]
    pub club_id: Option<i32>,
}

impl LoginResponseDto {
    /// All-null body used for failed logins.
    pub fn empty() -> Self {
        Self {
            token: None,
            role: None,
            wallet_balance: None,
            reward_points: None,
            club_id: None,
        }
    }
}
