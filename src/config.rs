//! Configuration management for GearLoan server

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Single-slot file holding the serialized session user
    pub cache_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoansConfig {
    /// Fine charged per whole day past the due date
    pub daily_fine_rate: Decimal,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub loans: LoansConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix GEARLOAN_)
            .add_source(
                Environment::with_prefix("GEARLOAN")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override session cache path from SESSION_CACHE_PATH env var if present
            .set_override_option(
                "session.cache_path",
                env::var("SESSION_CACHE_PATH").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            session: SessionConfig::default(),
            loans: LoansConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from("gearloan-session.json"),
        }
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            daily_fine_rate: dec!(2.00),
        }
    }
}
