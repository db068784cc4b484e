use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, LoginResponseDto, RegisterDto},
    },
    server::{
        error::AppError,
        model::auth::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Public. Assigns role CLIENTE with zero wallet and points; a duplicate
/// email answers 400 with the duplicate-email message.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Account created", body = MessageDto),
        (status = 400, description = "Blank fields or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    service.register(RegisterParams::from_dto(payload)).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Usuario registrado exitosamente".to_string(),
        }),
    ))
}

/// Log in with email and password.
///
/// Public. A successful login answers the signed token plus role, wallet
/// balance, reward points and, for club administrators, their club ID. Any
/// credential failure answers 401 with every field null.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponseDto),
        (status = 401, description = "Bad credentials; all fields null", body = LoginResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service.login(LoginParams::from_dto(payload)).await?;

    Ok(match session {
        Some(session) => (StatusCode::OK, Json(session.into_dto())),
        None => (StatusCode::UNAUTHORIZED, Json(LoginResponseDto::empty())),
    })
}
