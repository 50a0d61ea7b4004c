//! Server configuration
//!
//! # Environment variables
//!
//! | variable | default | description |
//! |----------|---------|-------------|
//! | HTTP_PORT | 5000 | HTTP API port |
//! | DATA_DIR | data | directory holding the JSON collections |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | CORS_ORIGIN | http://localhost:5173 | allowed browser origin |
//! | JWT_SECRET | generated (debug only) | signing secret, >= 32 chars |
//! | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |
//! | JWT_ISSUER | roster-server | token issuer |
//! | JWT_AUDIENCE | roster-clients | token audience |

use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Pagination defaults applied at the handler boundary
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;
pub const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding users.json / employees.json
    pub data_dir: PathBuf,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Allowed CORS origin
    pub cors_origin: String,
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            jwt: JwtConfig::default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
