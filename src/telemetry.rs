use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Builds a JSON (bunyan) subscriber writing to stdout.
///
/// `RUST_LOG` takes precedence over `env_filter` when set.
pub fn get_subscriber(name: String, env_filter: String) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, std::io::stdout);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs `subscriber` globally and redirects `log` records (actix-web's) into it.
///
/// Fails if a global logger or subscriber was already set.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> std::io::Result<()> {
    LogTracer::init().map_err(std::io::Error::other)?;
    set_global_default(subscriber).map_err(std::io::Error::other)
}
