//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret for bearer tokens
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

/// Blob store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Root directory of the content-addressed store
    pub root_dir: String,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("FAIRHUB").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::FairHubError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                allowed_origins: vec!["http://localhost:5173".to_string()],
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/fairhub".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            auth: AuthConfig {
                jwt_secret: String::new(),
                token_ttl_hours: 24,
                bcrypt_cost: 12,
            },
            storage: StorageConfig {
                root_dir: "./uploads".to_string(),
                max_upload_bytes: 10 * 1024 * 1024,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/fairhub".to_string(),
            },
        }
    }
}
