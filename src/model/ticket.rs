use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub id: i32,
    pub ticket_type: String,
    pub purchased_at: DateTime<Utc>,
    pub price: f64,
    pub user_id: i32,
    pub event_id: i32,
    pub time_slot_id: i32,
}

/// Creation payload; also accepted by PUT. The purchase timestamp is assigned
/// server-side on creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketDto {
    pub ticket_type: String,
    pub price: f64,
    pub user_id: i32,
    pub event_id: i32,
    pub time_slot_id: i32,
}
