//! Configuration validation module

use super::Settings;
use crate::utils::errors::{ApiError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_geocoder_config(&settings.geocoder)?;
    validate_auth_config(&settings.auth)?;
    validate_uploads_config(&settings.uploads)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ApiError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(ApiError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(ApiError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

fn validate_geocoder_config(config: &super::GeocoderConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(ApiError::Config("Geocoder API URL is required".to_string()));
    }

    if config.api_key.is_empty() {
        return Err(ApiError::Config("Geocoder API key is required".to_string()));
    }

    if config.timeout_seconds == 0 {
        return Err(ApiError::Config(
            "Geocoder timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.jwt_secret.is_empty() {
        return Err(ApiError::Config("JWT secret is required".to_string()));
    }

    Ok(())
}

fn validate_uploads_config(config: &super::UploadConfig) -> Result<()> {
    if config.dir.is_empty() {
        return Err(ApiError::Config("Upload directory is required".to_string()));
    }

    if config.max_file_size == 0 {
        return Err(ApiError::Config(
            "Max upload size must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ApiError::Config("Log level is required".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.geocoder.api_key = "test-key".to_string();
        settings.auth.jwt_secret = "secret".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_jwt_secret_rejected() {
        let mut settings = valid_settings();
        settings.auth.jwt_secret = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_missing_geocoder_key_rejected() {
        let mut settings = valid_settings();
        settings.geocoder.api_key = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_connection_bounds_checked() {
        let mut settings = valid_settings();
        settings.database.min_connections = 20;
        settings.database.max_connections = 10;
        assert!(validate_settings(&settings).is_err());
    }
}
