use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub app_origin: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required; `TOKEN_TTL_HOURS`,
    /// `APP_ORIGIN` and `PORT` fall back to defaults when unset.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_ttl_hours: optional_parsed("TOKEN_TTL_HOURS")?.unwrap_or(DEFAULT_TOKEN_TTL_HOURS),
            app_origin: std::env::var("APP_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_APP_ORIGIN.to_string()),
            port: optional_parsed("PORT")?.unwrap_or(DEFAULT_PORT),
        })
    }
}

fn optional_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string()).into()),
        Err(_) => Ok(None),
    }
}
