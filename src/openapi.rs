use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa` annotations on the REST routes.
///
/// # Endpoints
/// - Health Check: `GET /api/health`
///
/// # Schemas
/// - `HealthStatus`: healthy or unhealthy status document
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health::health),
    components(schemas(crate::models::health::HealthStatus)),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "GraphQL", description = "GraphQL API exposing the same health document")
    ),
    info(
        description = "Liveness endpoint for the libros-app web application",
        title = "libros-app health API",
    )
)]
pub struct ApiDoc;
