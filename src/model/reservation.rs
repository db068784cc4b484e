use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BottleReservationDto {
    pub id: i32,
    pub guest_count: i32,
    pub total: f64,
    pub reservation_type: String,
    pub ticket_id: i32,
    pub vip_zone_id: i32,
    pub details: Vec<ReservationDetailDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetailDto {
    pub id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub bottle_id: i32,
    pub reservation_id: i32,
}

/// Creation payload; also accepted by PUT. Details are created together with
/// the reservation; on PUT they replace the existing ones.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBottleReservationDto {
    pub guest_count: i32,
    pub total: f64,
    pub reservation_type: String,
    pub ticket_id: i32,
    pub vip_zone_id: i32,
    #[serde(default)]
    pub details: Vec<CreateReservationDetailDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDetailDto {
    pub quantity: i32,
    pub unit_price: f64,
    pub bottle_id: i32,
}
