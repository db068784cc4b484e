use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reward::{CreateRewardDto, RedemptionDto, RewardDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::reward::RewardParams,
        service::reward::RewardService,
        state::AppState,
    },
};

/// Tag for grouping reward endpoints in OpenAPI documentation
pub static REWARD_TAG: &str = "recompensas";

/// List all rewards. Public.
#[utoipa::path(
    get,
    path = "/api/recompensas",
    tag = REWARD_TAG,
    responses(
        (status = 200, description = "All rewards", body = Vec<RewardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rewards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rewards = RewardService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(rewards.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one reward by ID.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    get,
    path = "/api/recompensas/{id}",
    tag = REWARD_TAG,
    params(("id" = i32, Path, description = "Reward ID")),
    responses(
        (status = 200, description = "The reward", body = RewardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reward not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reward_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let reward = RewardService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(reward.into_dto())))
}

/// Redeem a reward for the calling user.
///
/// Deducts the reward's points from the caller and records the redemption.
/// Rejected when the reward is outside its validity window or the caller's
/// points are insufficient.
///
/// # Access Control
/// - Any authenticated identity
#[utoipa::path(
    post,
    path = "/api/recompensas/{id}/canjear",
    tag = REWARD_TAG,
    params(("id" = i32, Path, description = "Reward ID")),
    responses(
        (status = 200, description = "Reward redeemed", body = RedemptionDto),
        (status = 400, description = "Reward expired or insufficient points", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reward not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn redeem_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let redemption = RewardService::new(&state.db).redeem(id, &user).await?;

    Ok((StatusCode::OK, Json(redemption.into_dto())))
}

/// Create a reward.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/recompensas",
    tag = REWARD_TAG,
    request_body = CreateRewardDto,
    responses(
        (status = 201, description = "Reward created", body = RewardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Referenced row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRewardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let reward = RewardService::new(&state.db)
        .create(RewardParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reward.into_dto())))
}

/// Replace a reward by ID. The path ID always wins over any ID in the body.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/recompensas/{id}",
    tag = REWARD_TAG,
    params(("id" = i32, Path, description = "Reward ID")),
    request_body = CreateRewardDto,
    responses(
        (status = 200, description = "Reward replaced", body = RewardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Reward not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateRewardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let reward = RewardService::new(&state.db)
        .update(id, RewardParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reward.into_dto())))
}

/// Delete a reward by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/recompensas/{id}",
    tag = REWARD_TAG,
    params(("id" = i32, Path, description = "Reward ID")),
    responses(
        (status = 204, description = "Reward deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Reward not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    RewardService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
