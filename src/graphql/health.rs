use crate::configuration::HealthConfig;
use crate::handlers::health::HealthProbe;
use crate::models::health::HealthStatus;
use async_graphql::{Context, Object, Result};
use std::sync::Arc;

/// GraphQL representation of service health status
///
/// Flattens both shapes of [`HealthStatus`] into one object; fields that do
/// not belong to the current shape resolve to `null`.
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub service: Option<String>,
    pub version: Option<String>,
    pub error: Option<String>,
}

impl From<HealthStatus> for Health {
    fn from(status: HealthStatus) -> Self {
        let label = status.label().to_string();
        match status {
            HealthStatus::Healthy {
                timestamp,
                service,
                version,
            } => Self {
                status: label,
                timestamp,
                service: Some(service),
                version: Some(version),
                error: None,
            },
            HealthStatus::Unhealthy { timestamp, error } => Self {
                status: label,
                timestamp,
                service: None,
                version: None,
                error: Some(error),
            },
        }
    }
}

#[Object]
impl Health {
    /// `healthy` or `unhealthy`
    async fn status(&self) -> &str {
        &self.status
    }

    /// ISO-8601 timestamp of the check, UTC
    async fn timestamp(&self) -> &str {
        &self.timestamp
    }

    async fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    async fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Generic failure message, present only when unhealthy
    async fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Root query type for health-related GraphQL operations
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    ///
    /// A failing probe yields the unhealthy document rather than a GraphQL
    /// error, matching the REST endpoint.
    ///
    /// # Errors
    /// Only when the schema was built without health configuration or probe data.
    async fn health(&self, ctx: &Context<'_>) -> Result<Health> {
        let config = ctx.data::<HealthConfig>()?;
        let probe = ctx.data::<Arc<dyn HealthProbe>>()?;

        let status = probe.check(config).unwrap_or_else(|err| {
            tracing::error!(error = %err, "Health check failed");
            HealthStatus::unhealthy()
        });
        Ok(Health::from(status))
    }
}
