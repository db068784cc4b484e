use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::OrderParams,
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "pedidos";

/// List all orders with their lines.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/pedidos",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "All orders", body = Vec<OrderDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let orders = OrderService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(orders.into_iter().map(|o| o.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one order by ID with its lines.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/pedidos/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let order = OrderService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// List the orders of one user.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/pedidos/usuario/{usuario_id}",
    tag = ORDER_TAG,
    params(("usuario_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Orders of the user", body = Vec<OrderDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders_by_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let orders = OrderService::new(&state.db).get_by_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(orders.into_iter().map(|o| o.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create an order with its lines. The order timestamp is assigned
/// server-side; a missing status defaults to PENDIENTE.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    post,
    path = "/api/pedidos",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 400, description = "Unknown status value", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let order = OrderService::new(&state.db)
        .create(OrderParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Replace an order and its lines by ID. The path ID always wins over any ID
/// in the body.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    put,
    path = "/api/pedidos/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = CreateOrderDto,
    responses(
        (status = 200, description = "Order replaced", body = OrderDto),
        (status = 400, description = "Unknown status value", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let order = OrderService::new(&state.db)
        .update(id, OrderParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Mark an order COMPLETADO.
///
/// The transition is unconditional; completing an already-completed or
/// cancelled order succeeds and leaves the status COMPLETADO.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    put,
    path = "/api/pedidos/{id}/completar",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order completed", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let order = OrderService::new(&state.db).complete(id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete an order by ID; its lines are removed by the schema cascade.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    delete,
    path = "/api/pedidos/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    OrderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
