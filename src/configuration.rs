use thiserror::Error;

/// Version reported when `APP_VERSION` is not configured.
pub const DEFAULT_VERSION: &str = "1.0.0";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings consumed by the health check handler.
///
/// Read once at start-up and shared as application data, so handlers never
/// touch the process environment at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthConfig {
    pub version: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl HealthConfig {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Reads `APP_VERSION`, falling back to [`DEFAULT_VERSION`] when unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match non_blank(lookup("APP_VERSION")) {
            Some(version) => Self::new(version),
            None => Self::default(),
        }
    }
}

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    pub health: HealthConfig,
}

impl Settings {
    /// Loads settings from `APP_HOST`, `APP_PORT` and `APP_VERSION`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_host = non_blank(lookup("APP_HOST")).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let app_port = match non_blank(lookup("APP_PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "APP_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            app_host,
            app_port,
            health: HealthConfig::from_lookup(&lookup),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
