//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{FairHubError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_auth_config(&settings.auth)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(FairHubError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(FairHubError::Config(
            "Server port must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(FairHubError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(FairHubError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(FairHubError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate authentication configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.jwt_secret.len() < 32 {
        return Err(FairHubError::Config(
            "JWT secret must be at least 32 bytes".to_string(),
        ));
    }

    if config.token_ttl_hours <= 0 {
        return Err(FairHubError::Config(
            "Token TTL must be greater than 0".to_string(),
        ));
    }

    // bcrypt rejects costs outside 4..=31
    if !(4..=31).contains(&config.bcrypt_cost) {
        return Err(FairHubError::Config(
            "bcrypt cost must be between 4 and 31".to_string(),
        ));
    }

    Ok(())
}

/// Validate blob store configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.root_dir.is_empty() {
        return Err(FairHubError::Config(
            "Storage root directory is required".to_string(),
        ));
    }

    if config.max_upload_bytes == 0 {
        return Err(FairHubError::Config(
            "Max upload size must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(FairHubError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(FairHubError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.auth.jwt_secret = "0123456789abcdef0123456789abcdef".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_short_jwt_secret_rejected() {
        let mut settings = valid_settings();
        settings.auth.jwt_secret = "short".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_connection_bounds_rejected() {
        let mut settings = valid_settings();
        settings.database.min_connections = 20;
        settings.database.max_connections = 10;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
