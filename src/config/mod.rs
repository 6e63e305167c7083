//! Configuration module for the restaurants backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON document holding every restaurant
    pub data_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log line format
    pub log_format: LogFormat,
}

/// Output format of the fmt logging layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; anything else falls back to text.
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("RESTAURANTS_DATA_PATH")
            .unwrap_or_else(|_| "./data/restaurants.json".to_string())
            .into();

        let bind_addr = env::var("RESTAURANTS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()?;

        let log_level = env::var("RESTAURANTS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format =
            LogFormat::from_env_value(env::var("RESTAURANTS_LOG_FORMAT").ok().as_deref());

        Ok(Self {
            data_path,
            bind_addr,
            log_level,
            log_format,
        })
    }
}
