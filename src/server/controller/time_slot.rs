use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        time_slot::{CreateTimeSlotDto, TimeSlotDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::time_slot::TimeSlotParams,
        service::time_slot::TimeSlotService,
        state::AppState,
    },
};

/// Tag for grouping time slot endpoints in OpenAPI documentation
pub static TIME_SLOT_TAG: &str = "tramos-horarios";

/// List all pricing time slots.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/tramos-horarios",
    tag = TIME_SLOT_TAG,
    responses(
        (status = 200, description = "All time slots", body = Vec<TimeSlotDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_time_slots(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let slots = TimeSlotService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(slots.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one time slot by ID.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/tramos-horarios/{id}",
    tag = TIME_SLOT_TAG,
    params(("id" = i32, Path, description = "Time slot ID")),
    responses(
        (status = 200, description = "The time slot", body = TimeSlotDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Time slot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_time_slot_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let slot = TimeSlotService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(slot.into_dto())))
}

/// List the time slots of one club.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/tramos-horarios/discoteca/{discoteca_id}",
    tag = TIME_SLOT_TAG,
    params(("discoteca_id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Time slots of the club", body = Vec<TimeSlotDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_time_slots_by_club(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let slots = TimeSlotService::new(&state.db).get_by_club(club_id).await?;

    Ok((
        StatusCode::OK,
        Json(slots.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a time slot.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    post,
    path = "/api/tramos-horarios",
    tag = TIME_SLOT_TAG,
    request_body = CreateTimeSlotDto,
    responses(
        (status = 201, description = "Time slot created", body = TimeSlotDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_time_slot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTimeSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let slot = TimeSlotService::new(&state.db)
        .create(TimeSlotParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(slot.into_dto())))
}

/// Replace a time slot by ID. The path ID always wins over any ID in the
/// body.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    put,
    path = "/api/tramos-horarios/{id}",
    tag = TIME_SLOT_TAG,
    params(("id" = i32, Path, description = "Time slot ID")),
    request_body = CreateTimeSlotDto,
    responses(
        (status = 200, description = "Time slot replaced", body = TimeSlotDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Time slot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_time_slot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateTimeSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let slot = TimeSlotService::new(&state.db)
        .update(id, TimeSlotParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(slot.into_dto())))
}

/// Delete a time slot by ID.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    delete,
    path = "/api/tramos-horarios/{id}",
    tag = TIME_SLOT_TAG,
    params(("id" = i32, Path, description = "Time slot ID")),
    responses(
        (status = 204, description = "Time slot deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Time slot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_time_slot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    TimeSlotService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
