use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        city::{CityDto, CreateCityDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::city::CityParams,
        service::city::CityService,
        state::AppState,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "ciudades";

/// List all cities. Public.
#[utoipa::path(
    get,
    path = "/api/ciudades",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "All cities", body = Vec<CityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cities = CityService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(cities.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one city by ID. Public.
#[utoipa::path(
    get,
    path = "/api/ciudades/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "The city", body = CityDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let city = CityService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(city.into_dto())))
}

/// Create a city.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/ciudades",
    tag = CITY_TAG,
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "City created", body = CityDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let city = CityService::new(&state.db)
        .create(CityParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(city.into_dto())))
}

/// Replace a city by ID. The path ID always wins over any ID in the body.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/ciudades/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City ID")),
    request_body = CreateCityDto,
    responses(
        (status = 200, description = "City replaced", body = CityDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let city = CityService::new(&state.db)
        .update(id, CityParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(city.into_dto())))
}

/// Delete a city by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/ciudades/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    CityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
