use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    /// PENDIENTE, EN_PROCESO, COMPLETADO or CANCELADO.
    pub status: String,
    pub total: f64,
    pub ordered_at: DateTime<Utc>,
    pub user_id: i32,
    pub lines: Vec<OrderLineDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDto {
    pub id: i32,
    pub quantity: i32,
    pub price: f64,
    /// Opaque JSON blob describing the line contents.
    pub contents: String,
    pub order_id: i32,
}

/// Creation payload; also accepted by PUT. A missing status defaults to
/// PENDIENTE. Lines are created together with the order; on PUT they replace
/// the existing ones.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub status: Option<String>,
    pub total: f64,
    pub user_id: i32,
    #[serde(default)]
    pub lines: Vec<CreateOrderLineDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderLineDto {
    pub quantity: i32,
    pub price: f64,
    pub contents: String,
}
