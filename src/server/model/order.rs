use chrono::{DateTime, Utc};
use entity::OrderStatus;

use crate::{
    model::order::{CreateOrderDto, CreateOrderLineDto, OrderDto, OrderLineDto},
    server::error::AppError,
};

/// An order with its line items.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub status: OrderStatus,
    pub total: f64,
    pub ordered_at: DateTime<Utc>,
    pub user_id: i32,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub id: i32,
    pub quantity: i32,
    pub price: f64,
    pub contents: String,
    pub order_id: i32,
}

impl Order {
    pub fn from_entities(
        order: entity::order::Model,
        lines: Vec<entity::order_line::Model>,
    ) -> Self {
        Self {
            id: order.id,
            status: order.status,
            total: order.total,
            ordered_at: order.ordered_at,
            user_id: order.user_id,
            lines: lines.into_iter().map(OrderLine::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            status: self.status.as_str().to_string(),
            total: self.total,
            ordered_at: self.ordered_at,
            user_id: self.user_id,
            lines: self.lines.into_iter().map(OrderLine::into_dto).collect(),
        }
    }
}

impl OrderLine {
    pub fn from_entity(entity: entity::order_line::Model) -> Self {
        Self {
            id: entity.id,
            quantity: entity.quantity,
            price: entity.price,
            contents: entity.contents,
            order_id: entity.order_id,
        }
    }

    pub fn into_dto(self) -> OrderLineDto {
        OrderLineDto {
            id: self.id,
            quantity: self.quantity,
            price: self.price,
            contents: self.contents,
            order_id: self.order_id,
        }
    }
}

/// Parameters for creating or replacing an order together with its lines.
#[derive(Debug, Clone)]
pub struct OrderParams {
    pub status: OrderStatus,
    pub total: f64,
    pub user_id: i32,
    pub lines: Vec<OrderLineParams>,
}

#[derive(Debug, Clone)]
pub struct OrderLineParams {
    pub quantity: i32,
    pub price: f64,
    pub contents: String,
}

impl OrderParams {
    /// Converts the wire DTO, rejecting unknown status strings. A missing
    /// status defaults to PENDIENTE.
    pub fn from_dto(dto: CreateOrderDto) -> Result<Self, AppError> {
        let status = match dto.status {
            Some(raw) => parse_order_status(&raw)?,
            None => OrderStatus::Pendiente,
        };

        Ok(Self {
            status,
            total: dto.total,
            user_id: dto.user_id,
            lines: dto.lines.into_iter().map(OrderLineParams::from_dto).collect(),
        })
    }
}

impl OrderLineParams {
    pub fn from_dto(dto: CreateOrderLineDto) -> Self {
        Self {
            quantity: dto.quantity,
            price: dto.price,
            contents: dto.contents,
        }
    }
}

pub fn parse_order_status(raw: &str) -> Result<OrderStatus, AppError> {
    match raw {
        "PENDIENTE" => Ok(OrderStatus::Pendiente),
        "EN_PROCESO" => Ok(OrderStatus::EnProceso),
        "COMPLETADO" => Ok(OrderStatus::Completado),
        "CANCELADO" => Ok(OrderStatus::Cancelado),
        other => Err(AppError::BadRequest(format!(
            "Estado de pedido no válido: {}",
            other
        ))),
    }
}
