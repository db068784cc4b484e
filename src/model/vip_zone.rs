use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VipZoneDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub max_capacity: i32,
    pub status: String,
    pub club_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVipZoneDto {
    pub name: String,
    pub description: Option<String>,
    pub max_capacity: i32,
    pub status: String,
    pub club_id: i32,
}
