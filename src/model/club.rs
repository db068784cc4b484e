use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClubDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub image: Option<String>,
    pub city_id: i32,
}

/// Creation payload; also accepted by PUT. `admin_user_id` links an
/// existing user as the club's administrator at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubDto {
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub image: Option<String>,
    pub city_id: i32,
    pub admin_user_id: Option<i32>,
}
