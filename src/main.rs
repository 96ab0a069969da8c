use actix_web::{App, HttpServer, web::Data};
use libros_app::configuration::Settings;
use libros_app::graphql::schema::create_schema;
use libros_app::handlers::health::{HealthProbe, SystemProbe};
use libros_app::openapi::ApiDoc;
use libros_app::telemetry::{get_subscriber, init_subscriber};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// libros-app Health Service Entry Point
///
/// # Endpoints
/// - Health: `GET /api/health`
/// - GraphQL: `POST /api/graphql`, playground at `GET /api/playground`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `APP_HOST` / `APP_PORT`, default `127.0.0.1:8080`
/// - `APP_VERSION`, default `1.0.0`
/// - `RUST_LOG`, default `info`
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let subscriber = get_subscriber("libros-app".into(), "info".into());
    init_subscriber(subscriber)?;

    let settings = Settings::from_env().map_err(std::io::Error::other)?;
    tracing::info!(
        host = %settings.app_host,
        port = settings.app_port,
        version = %settings.health.version,
        "Starting health service"
    );

    let probe: Arc<dyn HealthProbe> = Arc::new(SystemProbe);
    let schema = create_schema(settings.health.clone(), probe.clone());
    let health = Data::new(settings.health.clone());

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(TracingLogger::default())
            .app_data(health.clone())
            .app_data(Data::from(probe.clone()))
            .app_data(Data::new(schema.clone()))
            .configure(libros_app::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((settings.app_host.as_str(), settings.app_port))?
    .run()
    .await
}
