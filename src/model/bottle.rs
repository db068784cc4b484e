use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BottleDto {
    pub id: i32,
    pub name: String,
    pub bottle_type: String,
    pub size: String,
    pub price: f64,
    pub available: bool,
    pub image: Option<String>,
    pub club_id: i32,
}

/// Creation payload; also accepted by PUT. A missing `available` defaults to
/// true.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBottleDto {
    pub name: String,
    pub bottle_type: String,
    pub size: String,
    pub price: f64,
    pub available: Option<bool>,
    pub image: Option<String>,
    pub club_id: i32,
}
