use axum::http::HeaderValue;
use office_core::maturity::{MaturityLevel, ParseMaturityLevelError};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),

    #[error("MATURITY_LEVEL: {0}")]
    InvalidMaturityLevel(#[from] ParseMaturityLevelError),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Restrict the server to a single maturity level. `None` mounts all four.
    pub maturity_level: Option<MaturityLevel>,
    /// Include panic details in 500 responses (`APP_ENV=development`).
    pub development: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            cors_origins: vec!["http://localhost:5173".into()],
            request_timeout_secs: 30,
            maturity_level: None,
            development: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MATURITY_LEVEL`       | unset (all levels)         |
    /// | `APP_ENV`              | `production`               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: "PORT",
                expected: "u16",
                value,
            })?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::InvalidCorsOrigin(bad.clone()));
        }

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: "REQUEST_TIMEOUT_SECS",
                expected: "u64",
                value,
            })?,
            None => defaults.request_timeout_secs,
        };

        let maturity_level = lookup("MATURITY_LEVEL")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.parse::<MaturityLevel>())
            .transpose()?;

        let development = lookup("APP_ENV")
            .is_some_and(|env| env.trim().eq_ignore_ascii_case("development"));

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            maturity_level,
            development,
        })
    }

    /// The levels this server mounts, lowest first.
    pub fn levels(&self) -> Vec<MaturityLevel> {
        match self.maturity_level {
            Some(level) => vec![level],
            None => MaturityLevel::ALL.to_vec(),
        }
    }
}
