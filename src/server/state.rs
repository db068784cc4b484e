//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned cheaply for each request via
//! Axum's state extraction: the database connection is a pooled handle and
//! the token service only carries the signing secret and lifetime.

use sea_orm::DatabaseConnection;

use crate::server::service::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and validates the platform's bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
