use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp,
/// service identifier and version.
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
///   "status": "unhealthy",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "error": "Service check failed"
/// }
/// ```
pub mod health;

/// GraphQL endpoint and playground.
pub mod graphql;

/// # API Route Configuration
///
/// Sets up endpoints under the `/api` base path.
///
/// ## Mounted Services
/// - Health check endpoints (see [`health::configure_routes`] for details)
/// - GraphQL endpoints (see [`graphql::configure_routes`] for details)
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/health     - Service health status
/// POST /api/graphql    - GraphQL queries
/// GET  /api/playground - GraphQL playground
/// ```
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`graphql::configure_routes`]: crate::routes::graphql::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure_routes)
            .configure(graphql::configure_routes),
    );
}
