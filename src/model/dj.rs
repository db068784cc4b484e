use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DjDto {
    pub id: i32,
    pub stage_name: String,
    pub real_name: Option<String>,
    pub bio: Option<String>,
    pub genre: Option<String>,
    pub contact: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDjDto {
    pub stage_name: String,
    pub real_name: Option<String>,
    pub bio: Option<String>,
    pub genre: Option<String>,
    pub contact: Option<String>,
    pub image: Option<String>,
}
