/// # Service Health Check Endpoint
///
/// Provides a liveness probe for the service, indicating whether the API is operational.
///
/// ## Response
///
/// - **200 OK**: Service is running and healthy
///   - Content-Type: `application/json`
///   - Body: [`HealthStatus`] in its healthy shape
/// - **500 Internal Server Error**: the healthy document could not be built
///   - Body: [`HealthStatus`] in its unhealthy shape
///
/// [`HealthStatus`]: crate::models::health::HealthStatus
pub mod health;
