use std::env;

use log::{info, warn};
use thiserror::Error;

use crate::locale::Locale;

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_PORT: u16 = 81;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name}='{value}' is invalid: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub openrouter_base_url: String,
    pub youtube_api_key: Option<String>,
    pub youtube_base_url: String,
    pub host: String,
    pub port: u16,
    pub locale: Locale,
    pub template_dir: String,
    pub static_dir: String,
}

impl Config {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_ok() {
            info!("Loaded variables from .env");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values are treated like unset ones.
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let openrouter_api_key =
            get("OPENROUTER_API_KEY").ok_or(ConfigError::Missing("OPENROUTER_API_KEY"))?;

        let youtube_api_key = get("YOUTUBE_API_KEY");
        if youtube_api_key.is_none() {
            warn!("YOUTUBE_API_KEY is not set, music and movie requests will find nothing");
        }

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let locale = match get("CHAT_LOCALE") {
            Some(raw) => raw
                .parse::<Locale>()
                .map_err(|reason| ConfigError::Invalid {
                    name: "CHAT_LOCALE",
                    value: raw.clone(),
                    reason,
                })?,
            None => Locale::default(),
        };

        Ok(Self {
            openrouter_api_key,
            openrouter_base_url: get("OPENROUTER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_BASE_URL.to_string()),
            youtube_api_key,
            youtube_base_url: get("YOUTUBE_API_BASE")
                .unwrap_or_else(|| DEFAULT_YOUTUBE_BASE_URL.to_string()),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            locale,
            template_dir: get("TEMPLATE_DIR").unwrap_or_else(|| "templates".to_string()),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        })
    }
}
