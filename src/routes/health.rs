use crate::configuration::HealthConfig;
use crate::handlers::health::{HealthCheckError, HealthProbe, handle_health_check};
use crate::models::health::HealthStatus;
use actix_web::{HttpResponse, get, web};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp,
/// the service identifier and the deployed version.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
/// - **500 Internal Server Error**: Service check failed
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "service": "libros-app",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 500, description = "Service check failed", body = HealthStatus)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(
    probe: web::Data<dyn HealthProbe>,
    config: web::Data<HealthConfig>,
) -> Result<HttpResponse, HealthCheckError> {
    handle_health_check(probe, config).await
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
