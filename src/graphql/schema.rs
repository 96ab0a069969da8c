use super::health::HealthQuery;
use crate::configuration::HealthConfig;
use crate::handlers::health::HealthProbe;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

/// Main GraphQL Schema Definition
///
/// Health is the only query root; mutations and subscriptions are unused.
pub type AppSchema = Schema<HealthQuery, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema.
///
/// The health configuration and probe are stored as schema data so the
/// `health` query reports the same document as the REST endpoint.
///
/// # Example
///
/// ```rust,no_run
/// use libros_app::configuration::HealthConfig;
/// use libros_app::graphql::schema::create_schema;
/// use libros_app::handlers::health::SystemProbe;
/// use std::sync::Arc;
///
/// let schema = create_schema(HealthConfig::default(), Arc::new(SystemProbe));
/// ```
pub fn create_schema(config: HealthConfig, probe: Arc<dyn HealthProbe>) -> AppSchema {
    Schema::build(
        HealthQuery::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .data(config)
    .data(probe)
    .finish()
}
