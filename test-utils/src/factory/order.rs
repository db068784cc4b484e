//! Order and order line factories.

use chrono::Utc;
use entity::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    status: OrderStatus,
    total: f64,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values (PENDIENTE, total 0.0,
    /// ordered now).
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            status: OrderStatus::Pendiente,
            total: 0.0,
        }
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            status: ActiveValue::Set(self.status),
            total: ActiveValue::Set(self.total),
            ordered_at: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for the given user.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}

/// Creates an order line attached to the given order (quantity 1, price 20.0,
/// empty JSON contents).
pub async fn create_order_line(
    db: &DatabaseConnection,
    order_id: i32,
) -> Result<entity::order_line::Model, DbErr> {
    entity::order_line::ActiveModel {
        quantity: ActiveValue::Set(1),
        price: ActiveValue::Set(20.0),
        contents: ActiveValue::Set("{}".to_string()),
        order_id: ActiveValue::Set(order_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
