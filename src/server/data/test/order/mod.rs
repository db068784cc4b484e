use crate::server::{
    data::order::OrderRepository,
    model::order::{OrderLineParams, OrderParams},
};
use entity::OrderStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod create;
mod delete;
mod update;

fn params(user_id: i32, lines: Vec<OrderLineParams>) -> OrderParams {
    OrderParams {
        status: OrderStatus::Pendiente,
        total: 45.0,
        user_id,
        lines,
    }
}

fn line(quantity: i32, price: f64) -> OrderLineParams {
    OrderLineParams {
        quantity,
        price,
        contents: r#"{"producto":"entrada"}"#.to_string(),
    }
}
