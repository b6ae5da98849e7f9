//! Environment-driven configuration accessors

use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "host=localhost user=postgres dbname=fleet";
pub const DEFAULT_CONNECT_RETRIES: usize = 3;

/// Deployment environment name (`production`, `prod`, `sandbox`, ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// HTTP listen port
pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// tokio-postgres connection string for the fleet record store
pub fn get_database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Number of connection attempts made before the store is considered unreachable
pub fn get_connect_retries() -> usize {
    env::var("DATABASE_CONNECT_RETRIES")
        .ok()
        .and_then(|r| r.parse().ok())
        .unwrap_or(DEFAULT_CONNECT_RETRIES)
}
