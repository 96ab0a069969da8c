use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier reported in every healthy response.
pub const SERVICE_NAME: &str = "libros-app";

/// Message carried by the unhealthy shape. The underlying cause is never exposed.
pub const FAILURE_MESSAGE: &str = "Service check failed";

/// # Health Status Document
///
/// Built fresh for every health check and discarded once serialized.
/// Internally tagged on `status`, so a value is always exactly one of the
/// two shapes below.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123Z",
///   "service": "libros-app",
///   "version": "1.0.0"
/// }
/// ```
///
/// ```json
/// {
///   "status": "unhealthy",
///   "timestamp": "2024-03-10T15:30:45.123Z",
///   "error": "Service check failed"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy {
        timestamp: String,
        service: String,
        version: String,
    },
    Unhealthy {
        timestamp: String,
        error: String,
    },
}

impl HealthStatus {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self::Healthy {
            timestamp: timestamp_now(),
            service: SERVICE_NAME.to_string(),
            version: version.into(),
        }
    }

    pub fn unhealthy() -> Self {
        Self::Unhealthy {
            timestamp: timestamp_now(),
            error: FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy { .. })
    }

    /// Value of the `status` tag.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy { .. } => "healthy",
            Self::Unhealthy { .. } => "unhealthy",
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            Self::Healthy { timestamp, .. } | Self::Unhealthy { timestamp, .. } => timestamp,
        }
    }
}

/// Current UTC time as ISO 8601 with millisecond precision, e.g. `2024-03-10T15:30:45.123Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
