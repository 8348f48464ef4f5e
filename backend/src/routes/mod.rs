//! Route definitions for the FitSenior API
//!
//! This module organizes all API routes and applies middleware.

use crate::config::AppConfig;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

mod classes;
mod demands;
mod enrollments;
mod forum;
mod health;
mod messages;
mod profile;


pub use classes::class_routes;
pub use demands::demand_routes;
pub use enrollments::enrollment_routes;
pub use forum::forum_routes;
pub use messages::message_routes;
pub use profile::profile_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.config());

    let router = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check));

    // axum refuses to nest at "/"
    let prefix = state.config().api_prefix.as_str();
    let router = if prefix == "/" {
        router.merge(api_routes())
    } else {
        router.nest(prefix, api_routes())
    };

    router
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resource routes, all behind bearer authentication
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/me", profile::profile_routes())
        .nest("/classes", classes::class_routes())
        .nest("/enrollments", enrollments::enrollment_routes())
        .nest("/demands", demands::demand_routes())
        .nest("/forum", forum::forum_routes())
        .nest("/messages", messages::message_routes())
}

/// CORS policy from the configured origins
///
/// `*` allows any origin without credentials; an explicit list allows
/// credentials for exactly those origins.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins).allow_credentials(true)
}
