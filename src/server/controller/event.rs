use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::EventParams,
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "eventos";

/// List all events. Public.
#[utoipa::path(
    get,
    path = "/api/eventos",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one event by ID. Public.
#[utoipa::path(
    get,
    path = "/api/eventos/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// List the events of one club. Public.
#[utoipa::path(
    get,
    path = "/api/eventos/discoteca/{discoteca_id}",
    tag = EVENT_TAG,
    params(("discoteca_id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Events of the club", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events_by_club(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_by_club(club_id).await?;

    Ok((
        StatusCode::OK,
        Json(events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List only the ACTIVO events of one club. Public.
#[utoipa::path(
    get,
    path = "/api/eventos/discoteca/{discoteca_id}/activos",
    tag = EVENT_TAG,
    params(("discoteca_id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Active events of the club", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_events_by_club(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_active_by_club(club_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create an event.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    post,
    path = "/api/eventos",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Unknown status value", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Club, DJ or creator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let event = EventService::new(&state.db)
        .create(EventParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Replace an event by ID. The path ID always wins over any ID in the body.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    put,
    path = "/api/eventos/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = CreateEventDto,
    responses(
        (status = 200, description = "Event replaced", body = EventDto),
        (status = 400, description = "Unknown status value", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let event = EventService::new(&state.db)
        .update(id, EventParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event by ID.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    delete,
    path = "/api/eventos/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    EventService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
