use crate::configuration::HealthConfig;
use crate::models::health::HealthStatus;
use actix_web::http::{StatusCode, header::ContentType};
use actix_web::{HttpResponse, ResponseError, web};
use thiserror::Error;

/// Any fault raised while building the healthy response.
///
/// Every variant renders the same unhealthy document with HTTP 500; the
/// cause only reaches the server log.
#[derive(Debug, Error)]
pub enum HealthCheckError {
    #[error("health probe failed: {0}")]
    Probe(String),
    #[error("failed to serialize health status: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ResponseError for HealthCheckError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(HealthStatus::unhealthy())
    }
}

/// Produces the healthy status document.
#[cfg_attr(test, mockall::automock)]
pub trait HealthProbe: Send + Sync {
    fn check(&self, config: &HealthConfig) -> Result<HealthStatus, HealthCheckError>;
}

/// Reports healthy whenever the process is able to answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl HealthProbe for SystemProbe {
    fn check(&self, config: &HealthConfig) -> Result<HealthStatus, HealthCheckError> {
        Ok(HealthStatus::healthy(config.version.as_str()))
    }
}

/// # Service Health Check Endpoint
///
/// Liveness probe for the service.
///
/// ## Response
///
/// - **200 OK**: healthy document with `status`, `timestamp`, `service` and `version`
/// - **500 Internal Server Error**: unhealthy document with `status`, `timestamp` and
///   the generic `error` message
///
/// ## Example Success Response
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123Z",
///   "service": "libros-app",
///   "version": "1.0.0"
/// }
/// ```
pub async fn handle_health_check(
    probe: web::Data<dyn HealthProbe>,
    config: web::Data<HealthConfig>,
) -> Result<HttpResponse, HealthCheckError> {
    let body = healthy_body(probe.get_ref(), config.get_ref()).inspect_err(|err| {
        tracing::error!(error = %err, "Health check failed");
    })?;

    tracing::debug!(version = %config.version, "Health check passed");
    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body))
}

fn healthy_body(probe: &dyn HealthProbe, config: &HealthConfig) -> Result<String, HealthCheckError> {
    let status = probe.check(config)?;
    Ok(serde_json::to_string(&status)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health::{FAILURE_MESSAGE, SERVICE_NAME};
    use actix_web::{App, body::to_bytes, test};
    use chrono::{DateTime, Duration, Utc};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn call_health(probe: Arc<dyn HealthProbe>, config: HealthConfig) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .app_data(web::Data::from(probe))
                .route("/health", web::get().to(handle_health_check)),
        )
        .await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body = test::read_body(resp).await;
        let json = serde_json::from_slice(&body).expect("Body should be valid JSON");
        (status, json)
    }

    fn failing_probe(cause: &'static str) -> Arc<dyn HealthProbe> {
        let mut probe = MockHealthProbe::new();
        probe
            .expect_check()
            .returning(move |_| Err(HealthCheckError::Probe(cause.to_string())));
        Arc::new(probe)
    }

    #[actix_web::test]
    async fn test_health_check_reports_healthy() {
        let before = Utc::now() - Duration::seconds(1);
        let (status, body) = call_health(Arc::new(SystemProbe), HealthConfig::default()).await;
        let after = Utc::now() + Duration::seconds(1);

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], SERVICE_NAME);
        assert_eq!(body["version"], "1.0.0");
        assert!(body.get("error").is_none());

        let timestamp = body["timestamp"]
            .as_str()
            .expect("Timestamp should be a string");
        let parsed = DateTime::parse_from_rfc3339(timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
        assert!(parsed >= before && parsed <= after);
    }

    #[actix_web::test]
    async fn test_health_check_uses_configured_version() {
        let (status, body) = call_health(Arc::new(SystemProbe), HealthConfig::new("2.3.1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], "2.3.1");
        assert_eq!(body["service"], "libros-app");
    }

    #[actix_web::test]
    async fn test_probe_failure_returns_unhealthy() {
        let (status, mut body) =
            call_health(failing_probe("disk unavailable"), HealthConfig::default()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let timestamp = body["timestamp"]
            .as_str()
            .expect("Timestamp should be a string")
            .to_string();
        assert!(DateTime::parse_from_rfc3339(&timestamp).is_ok());

        body["timestamp"] = Value::Null;
        assert_eq!(
            body,
            json!({"status": "unhealthy", "timestamp": null, "error": "Service check failed"})
        );
    }

    #[actix_web::test]
    async fn test_failure_cause_is_not_exposed() {
        let (_, body) = call_health(failing_probe("secret detail"), HealthConfig::default()).await;

        assert_eq!(body["error"], FAILURE_MESSAGE);
        assert!(!body.to_string().contains("secret detail"));
    }

    #[actix_web::test]
    async fn test_probe_receives_configured_version() {
        let mut probe = MockHealthProbe::new();
        probe
            .expect_check()
            .withf(|config| config.version == "4.0.0")
            .times(1)
            .returning(|config| Ok(HealthStatus::healthy(config.version.as_str())));

        let (status, body) = call_health(Arc::new(probe), HealthConfig::new("4.0.0")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], "4.0.0");
    }

    #[actix_web::test]
    async fn test_repeated_checks_have_identical_shape() {
        let (_, first) = call_health(Arc::new(SystemProbe), HealthConfig::default()).await;
        let (_, second) = call_health(Arc::new(SystemProbe), HealthConfig::default()).await;

        let keys = |v: &Value| {
            let mut keys: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
            keys.sort();
            keys
        };
        assert_eq!(keys(&first), keys(&second));
        assert_eq!(first["status"], second["status"]);
        assert_eq!(first["service"], second["service"]);
        assert_eq!(first["version"], second["version"]);
    }

    #[actix_web::test]
    async fn test_serialize_error_renders_unhealthy() {
        let cause = serde_json::from_str::<Value>("{").unwrap_err();
        let err = HealthCheckError::from(cause);

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "unhealthy");
        assert_eq!(json["error"], "Service check failed");
    }
}
