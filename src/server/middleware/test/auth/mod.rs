use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::token::TokenService,
};
use axum::http::{header, HeaderMap};
use chrono::Duration;
use entity::UserRole;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod require;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::hours(1))
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    headers
}
