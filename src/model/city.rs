use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub province: String,
    pub country: String,
    pub postal_code: String,
}

/// Creation payload; also accepted by PUT, which replaces every field and
/// forces the path ID.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCityDto {
    pub name: String,
    pub province: String,
    pub country: String,
    pub postal_code: String,
}
