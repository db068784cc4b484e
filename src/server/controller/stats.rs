use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        stats::{EventAttendanceDto, EventRevenueDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "estadisticas";

/// Per-event ticket revenue for one club. Events without tickets report zero.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/estadisticas/ingresos/{discoteca_id}",
    tag = STATS_TAG,
    params(("discoteca_id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Revenue per event", body = Vec<EventRevenueDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_revenue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let revenue = StatsService::new(&state.db).revenue(club_id).await?;

    Ok((
        StatusCode::OK,
        Json(revenue.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Per-event ticket counts for one club.
///
/// # Access Control
/// - `ADMIN_DISCOTECA`
#[utoipa::path(
    get,
    path = "/api/admin-discoteca/estadisticas/asistencia/{discoteca_id}",
    tag = STATS_TAG,
    params(("discoteca_id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Attendance per event", body = Vec<EventAttendanceDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a club admin", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ClubAdmin])
        .await?;

    let attendance = StatsService::new(&state.db).attendance(club_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            attendance
                .into_iter()
                .map(|a| a.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
