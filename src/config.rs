//! Environment-driven configuration.

use std::env;

pub const DEFAULT_PORT: u16 = 8080;

/// Deployment environment name from `APP_ENV`, defaulting to `development`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

pub fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}

/// HTTP port from `PORT`, defaulting to [`DEFAULT_PORT`].
pub fn server_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
