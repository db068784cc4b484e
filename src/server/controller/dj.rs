use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        dj::{CreateDjDto, DjDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::dj::DjParams,
        service::dj::DjService,
        state::AppState,
    },
};

/// Tag for grouping DJ endpoints in OpenAPI documentation
pub static DJ_TAG: &str = "djs";

/// List all DJs. Public.
#[utoipa::path(
    get,
    path = "/api/djs",
    tag = DJ_TAG,
    responses(
        (status = 200, description = "All DJs", body = Vec<DjDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_djs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let djs = DjService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(djs.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one DJ by ID. Public.
#[utoipa::path(
    get,
    path = "/api/djs/{id}",
    tag = DJ_TAG,
    params(("id" = i32, Path, description = "DJ ID")),
    responses(
        (status = 200, description = "The DJ", body = DjDto),
        (status = 404, description = "DJ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dj_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dj = DjService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(dj.into_dto())))
}

/// Create a DJ.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/djs",
    tag = DJ_TAG,
    request_body = CreateDjDto,
    responses(
        (status = 201, description = "DJ created", body = DjDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dj(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDjDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let dj = DjService::new(&state.db)
        .create(DjParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(dj.into_dto())))
}

/// Replace a DJ by ID. The path ID always wins over any ID in the body.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/djs/{id}",
    tag = DJ_TAG,
    params(("id" = i32, Path, description = "DJ ID")),
    request_body = CreateDjDto,
    responses(
        (status = 200, description = "DJ replaced", body = DjDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "DJ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dj(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateDjDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let dj = DjService::new(&state.db)
        .update(id, DjParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(dj.into_dto())))
}

/// Delete a DJ by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/djs/{id}",
    tag = DJ_TAG,
    params(("id" = i32, Path, description = "DJ ID")),
    responses(
        (status = 204, description = "DJ deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "DJ not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dj(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    DjService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
