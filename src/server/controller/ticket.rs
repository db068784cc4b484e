use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ticket::{CreateTicketDto, TicketDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::ticket::TicketParams,
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "entradas";

/// List all tickets.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/entradas",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "All tickets", body = Vec<TicketDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let tickets = TicketService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(tickets.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one ticket by ID.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/entradas/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "The ticket", body = TicketDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let ticket = TicketService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

/// List the tickets of one user.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/entradas/usuario/{usuario_id}",
    tag = TICKET_TAG,
    params(("usuario_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Tickets of the user", body = Vec<TicketDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets_by_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let tickets = TicketService::new(&state.db).get_by_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(tickets.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List the tickets of one event.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/entradas/evento/{evento_id}",
    tag = TICKET_TAG,
    params(("evento_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Tickets of the event", body = Vec<TicketDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets_by_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let tickets = TicketService::new(&state.db).get_by_event(event_id).await?;

    Ok((
        StatusCode::OK,
        Json(tickets.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Buy a ticket. The purchase timestamp is assigned server-side.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    post,
    path = "/api/entradas",
    tag = TICKET_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User, event or time slot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let ticket = TicketService::new(&state.db)
        .create(TicketParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}

/// Replace a ticket by ID. The path ID always wins over any ID in the body.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    put,
    path = "/api/entradas/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket replaced", body = TicketDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let ticket = TicketService::new(&state.db)
        .update(id, TicketParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

/// Delete a ticket by ID.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    delete,
    path = "/api/entradas/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    TicketService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
