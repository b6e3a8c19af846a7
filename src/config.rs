use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for environment variable {0}")]
    InvalidVar(&'static str),
}

/// Process configuration, read once from the environment at startup.
/// `dotenvy` is applied before this in `main`, so a local `.env` file
/// works the same as real environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub models_dir: PathBuf,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub users_api_url: String,
    pub users_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        Ok(AppConfig {
            bind: env_string("SEGVIEW_BIND", "127.0.0.1:8080"),
            models_dir: env_string("SEGVIEW_MODELS_DIR", "models").into(),
            static_dir: env_string("SEGVIEW_STATIC_DIR", "static").into(),
            templates_dir: env_string("SEGVIEW_TEMPLATES_DIR", "templates").into(),
            session_secret: env_required("SEGVIEW_SESSION_SECRET")?,
            session_ttl_hours: env_i64("SEGVIEW_SESSION_TTL_HOURS", 24)?,
            users_api_url: env_required("USERS_API_URL")?,
            users_api_key: env_required("USERS_API_KEY")?,
        })
    }
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn env_i64(name: &'static str, default: i64) -> Result<i64, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar(name)),
    }
}
