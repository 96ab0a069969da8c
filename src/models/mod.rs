/// # Health Status Document
///
/// The transient value object returned by the health check endpoint, in one
/// of two shapes:
/// - `healthy`: `status`, `timestamp`, `service`, `version`
/// - `unhealthy`: `status`, `timestamp`, `error`
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
pub mod health;

pub use health::HealthStatus;
