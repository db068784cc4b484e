use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Revenue aggregated per event of one club. Events with no tickets report
/// zero.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRevenueDto {
    pub event_id: i32,
    pub event_name: String,
    #[serde(rename = "ingresos")]
    pub revenue: f64,
}

/// Ticket count aggregated per event of one club.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendanceDto {
    pub event_id: i32,
    pub event_name: String,
    #[serde(rename = "asistencia")]
    pub attendance: i64,
}
