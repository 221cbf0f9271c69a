use std::env;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub site_url: String,
    pub username_cache_ttl_ms: i64,
}

pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_USERNAME_CACHE_TTL_MS: i64 = 15_000;

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let port = required("PORT")?;
        let port = port.parse::<u16>().map_err(|e| ConfigError::Invalid {
            key: "PORT",
            reason: e.to_string(),
        })?;

        let username_cache_ttl_ms = match lookup("USERNAME_CACHE_TTL_MS") {
            None => DEFAULT_USERNAME_CACHE_TTL_MS,
            Some(raw) => parse_positive("USERNAME_CACHE_TTL_MS", &raw)?,
        };

        let site_url = lookup("SITE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port,
            site_url,
            username_cache_ttl_ms,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn parse_positive(key: &'static str, raw: &str) -> Result<i64, ConfigError> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        Ok(_) => Err(ConfigError::Invalid {
            key,
            reason: "must be greater than 0".to_string(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

/// Loads `.env.{RUST_ENV}` when present, otherwise `.env`.
#[cfg(not(tarpaulin_include))]
pub fn load_dotenv() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
