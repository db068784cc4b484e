use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reservation::{BottleReservationDto, CreateBottleReservationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::reservation::ReservationParams,
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping bottle reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservas-botella";

/// List all bottle reservations with their details.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/reservas-botella",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = Vec<BottleReservationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let reservations = ReservationService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            reservations
                .into_iter()
                .map(|r| r.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get one reservation by ID with its details.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/reservas-botella/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "The reservation", body = BottleReservationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let reservation = ReservationService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// List the reservations attached to one ticket.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/reservas-botella/entrada/{entrada_id}",
    tag = RESERVATION_TAG,
    params(("entrada_id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Reservations of the ticket", body = Vec<BottleReservationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations_by_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ticket_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let reservations = ReservationService::new(&state.db)
        .get_by_ticket(ticket_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            reservations
                .into_iter()
                .map(|r| r.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a reservation with its details.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    post,
    path = "/api/reservas-botella",
    tag = RESERVATION_TAG,
    request_body = CreateBottleReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = BottleReservationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket, VIP zone or bottle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBottleReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let reservation = ReservationService::new(&state.db)
        .create(ReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Replace a reservation and its details by ID. The path ID always wins over
/// any ID in the body.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    put,
    path = "/api/reservas-botella/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = CreateBottleReservationDto,
    responses(
        (status = 200, description = "Reservation replaced", body = BottleReservationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateBottleReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let reservation = ReservationService::new(&state.db)
        .update(id, ReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Delete a reservation by ID; its details are removed by the schema cascade.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    delete,
    path = "/api/reservas-botella/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    ReservationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
