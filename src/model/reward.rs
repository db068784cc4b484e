use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewardDto {
    pub id: i32,
    pub name: String,
    pub points_required: i32,
    pub description: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub bottle_id: i32,
    pub reservation_id: i32,
    pub ticket_id: i32,
    pub event_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRewardDto {
    pub name: String,
    pub points_required: i32,
    pub description: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub bottle_id: i32,
    pub reservation_id: i32,
    pub ticket_id: i32,
    pub event_id: i32,
}

/// Result of redeeming a reward: the join row plus the caller's remaining
/// points.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionDto {
    pub id: i32,
    pub user_id: i32,
    pub reward_id: i32,
    pub redeemed_at: DateTime<Utc>,
    pub points_spent: i32,
    #[serde(rename = "puntosRestantes")]
    pub points_remaining: i32,
}
