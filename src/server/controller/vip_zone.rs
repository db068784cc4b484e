use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        vip_zone::{CreateVipZoneDto, VipZoneDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::vip_zone::VipZoneParams,
        service::vip_zone::VipZoneService,
        state::AppState,
    },
};

/// Tag for grouping VIP zone endpoints in OpenAPI documentation
pub static VIP_ZONE_TAG: &str = "zonas-vip";

/// List all VIP zones. Public.
#[utoipa::path(
    get,
    path = "/api/zonas-vip",
    tag = VIP_ZONE_TAG,
    responses(
        (status = 200, description = "All VIP zones", body = Vec<VipZoneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vip_zones(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let zones = VipZoneService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(zones.into_iter().map(|z| z.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one VIP zone by ID. Public.
#[utoipa::path(
    get,
    path = "/api/zonas-vip/{id}",
    tag = VIP_ZONE_TAG,
    params(("id" = i32, Path, description = "VIP zone ID")),
    responses(
        (status = 200, description = "The VIP zone", body = VipZoneDto),
        (status = 404, description = "VIP zone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vip_zone_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let zone = VipZoneService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(zone.into_dto())))
}

/// List the VIP zones of one club. Public.
#[utoipa::path(
    get,
    path = "/api/zonas-vip/discoteca/{discoteca_id}",
    tag = VIP_ZONE_TAG,
    params(("discoteca_id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "VIP zones of the club", body = Vec<VipZoneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vip_zones_by_club(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let zones = VipZoneService::new(&state.db).get_by_club(club_id).await?;

    Ok((
        StatusCode::OK,
        Json(zones.into_iter().map(|z| z.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a VIP zone.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    post,
    path = "/api/zonas-vip",
    tag = VIP_ZONE_TAG,
    request_body = CreateVipZoneDto,
    responses(
        (status = 201, description = "VIP zone created", body = VipZoneDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vip_zone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateVipZoneDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let zone = VipZoneService::new(&state.db)
        .create(VipZoneParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(zone.into_dto())))
}

/// Replace a VIP zone by ID. The path ID always wins over any ID in the body.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    put,
    path = "/api/zonas-vip/{id}",
    tag = VIP_ZONE_TAG,
    params(("id" = i32, Path, description = "VIP zone ID")),
    request_body = CreateVipZoneDto,
    responses(
        (status = 200, description = "VIP zone replaced", body = VipZoneDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "VIP zone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vip_zone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateVipZoneDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let zone = VipZoneService::new(&state.db)
        .update(id, VipZoneParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(zone.into_dto())))
}

/// Delete a VIP zone by ID.
///
/// # Access Control
/// - `Admin` or `ADMIN_DISCOTECA`
#[utoipa::path(
    delete,
    path = "/api/zonas-vip/{id}",
    tag = VIP_ZONE_TAG,
    params(("id" = i32, Path, description = "VIP zone ID")),
    responses(
        (status = 204, description = "VIP zone deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "VIP zone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vip_zone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    VipZoneService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
