use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MEDIA_DIR: &str = "./media";
const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60 * 24;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 60 * 60 * 24 * 7;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub app_url: String,

    pub jwt_secret: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,

    pub media_dir: String,

    /// HTTP mail relay endpoint; mail delivery is skipped when unset.
    pub mail_api_url: Option<String>,
    pub mail_from: Option<String>,

    /// Push gateway endpoint for device notifications; skipped when unset.
    pub push_api_url: Option<String>,
    pub push_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            listen_addr: env_or("LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            app_url: require_env("APP_URL")?,
            jwt_secret: require_env("JWT_SECRET")?,
            access_token_ttl_secs: env_i64(
                "ACCESS_TOKEN_TTL_SECS",
                DEFAULT_ACCESS_TOKEN_TTL_SECS,
            )?,
            refresh_token_ttl_secs: env_i64(
                "REFRESH_TOKEN_TTL_SECS",
                DEFAULT_REFRESH_TOKEN_TTL_SECS,
            )?,
            media_dir: env_or("MEDIA_DIR", DEFAULT_MEDIA_DIR),
            mail_api_url: std::env::var("MAIL_API_URL").ok(),
            mail_from: std::env::var("MAIL_FROM").ok(),
            push_api_url: std::env::var("PUSH_API_URL").ok(),
            push_api_key: std::env::var("PUSH_API_KEY").ok(),
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_i64(name: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<i64>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
