use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub description: Option<String>,
    pub entry_price: f64,
    pub reserved_price: f64,
    pub capacity: i32,
    pub event_type: String,
    /// ACTIVO, CANCELADO or FINALIZADO.
    pub status: String,
    pub image: Option<String>,
    pub club_id: i32,
    pub dj_id: i32,
    pub created_by: i32,
}

/// Creation payload; also accepted by PUT. A missing status defaults to
/// ACTIVO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub description: Option<String>,
    pub entry_price: f64,
    pub reserved_price: f64,
    pub capacity: i32,
    pub event_type: String,
    pub status: Option<String>,
    pub image: Option<String>,
    pub club_id: i32,
    pub dj_id: i32,
    pub created_by: i32,
}
