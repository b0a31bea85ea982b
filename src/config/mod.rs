//! Configuration module

pub mod settings;
pub mod validation;

pub use settings::{
    AuthConfig, DatabaseConfig, GeocoderConfig, LoggingConfig, ServerConfig, Settings,
    UploadConfig,
};
