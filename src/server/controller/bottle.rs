use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        bottle::{BottleDto, CreateBottleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bottle::BottleParams,
        service::bottle::BottleService,
        state::AppState,
    },
};

/// Tag for grouping bottle endpoints in OpenAPI documentation
pub static BOTTLE_TAG: &str = "botellas";

/// List all bottles. Public.
#[utoipa::path(
    get,
    path = "/api/botellas",
    tag = BOTTLE_TAG,
    responses(
        (status = 200, description = "All bottles", body = Vec<BottleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bottles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bottles = BottleService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(bottles.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one bottle by ID. Public.
#[utoipa::path(
    get,
    path = "/api/botellas/{id}",
    tag = BOTTLE_TAG,
    params(("id" = i32, Path, description = "Bottle ID")),
    responses(
        (status = 200, description = "The bottle", body = BottleDto),
        (status = 404, description = "Bottle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bottle_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let bottle = BottleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(bottle.into_dto())))
}

/// List the bottles of one club. Public.
#[utoipa::path(
    get,
    path = "/api/botellas/discoteca/{discoteca_id}",
    tag = BOTTLE_TAG,
    params(("discoteca_id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Bottles of the club", body = Vec<BottleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bottles_by_club(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let bottles = BottleService::new(&state.db).get_by_club(club_id).await?;

    Ok((
        StatusCode::OK,
        Json(bottles.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a bottle.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    post,
    path = "/api/botellas",
    tag = BOTTLE_TAG,
    request_body = CreateBottleDto,
    responses(
        (status = 201, description = "Bottle created", body = BottleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bottle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBottleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let bottle = BottleService::new(&state.db)
        .create(BottleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(bottle.into_dto())))
}

/// Replace a bottle by ID. The path ID always wins over any ID in the body.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    put,
    path = "/api/botellas/{id}",
    tag = BOTTLE_TAG,
    params(("id" = i32, Path, description = "Bottle ID")),
    request_body = CreateBottleDto,
    responses(
        (status = 200, description = "Bottle replaced", body = BottleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Bottle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bottle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateBottleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let bottle = BottleService::new(&state.db)
        .update(id, BottleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(bottle.into_dto())))
}

/// Delete a bottle by ID.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    delete,
    path = "/api/botellas/{id}",
    tag = BOTTLE_TAG,
    params(("id" = i32, Path, description = "Bottle ID")),
    responses(
        (status = 204, description = "Bottle deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Bottle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bottle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    BottleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
