use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "monedero")]
    pub wallet_balance: f64,
    #[serde(rename = "puntosRecompensa")]
    pub reward_points: i32,
    pub created_at: DateTime<Utc>,
}

/// Full-replace payload for `PUT /api/usuarios/{id}`. A missing password
/// keeps the stored hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

/// Wallet top-up payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletTopUpDto {
    pub amount: f64,
}
