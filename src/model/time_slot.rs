use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotDto {
    pub id: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub price_multiplier: f64,
    pub club_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeSlotDto {
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub price_multiplier: f64,
    pub club_id: i32,
}
