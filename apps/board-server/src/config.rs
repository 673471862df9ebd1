//! Application configuration loaded from environment variables.

use std::env;

use board_core::services::DEFAULT_PAGE_SIZE;
use board_infra::{DatabaseConfig, PasswordHashConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Run pending migrations before serving.
    pub auto_migrate: bool,
    /// Posts per list page.
    pub page_size: u64,
    pub password: PasswordHashConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(10),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(1),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            auto_migrate: env::var("DB_AUTO_MIGRATE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            page_size: parse_var::<u64>("POSTS_PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            password: PasswordHashConfig::from_env(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
