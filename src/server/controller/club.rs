use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        club::{ClubDto, CreateClubDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::club::ClubParams,
        service::club::ClubService,
        state::AppState,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "discotecas";

/// List all clubs. Public.
#[utoipa::path(
    get,
    path = "/api/discotecas",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "All clubs", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clubs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clubs = ClubService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(clubs.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one club by ID. Public.
#[utoipa::path(
    get,
    path = "/api/discotecas/{id}",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "The club", body = ClubDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let club = ClubService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(club.into_dto())))
}

/// List the clubs of one city. Public.
#[utoipa::path(
    get,
    path = "/api/discotecas/ciudad/{ciudad_id}",
    tag = CLUB_TAG,
    params(("ciudad_id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "Clubs in the city", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clubs_by_city(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let clubs = ClubService::new(&state.db).get_by_city(city_id).await?;

    Ok((
        StatusCode::OK,
        Json(clubs.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a club, optionally linking its administrator.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/discotecas",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Club created", body = ClubDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "City or administrator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let club = ClubService::new(&state.db)
        .create(ClubParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(club.into_dto())))
}

/// Replace a club by ID. The path ID always wins over any ID in the body.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/discotecas/{id}",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    request_body = CreateClubDto,
    responses(
        (status = 200, description = "Club replaced", body = ClubDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_club(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let club = ClubService::new(&state.db)
        .update(id, ClubParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(club.into_dto())))
}

/// Delete a club by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/discotecas/{id}",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    responses(
        (status = 204, description = "Club deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_club(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ClubService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
