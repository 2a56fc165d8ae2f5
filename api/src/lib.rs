//! Liveness endpoint for the API service.
//!
//! Serves `GET /health` with `{"status":"UP","timestamp":...}` behind the
//! usual middleware stack (timeout, concurrency limit, CORS, HTTP tracing).

pub mod config;
pub mod dto;
pub mod errors;
pub mod routes;

use axum::{Router, error_handling::HandleErrorLayer};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;

/// Builds the router with the health route registered under `config.health_prefix`.
pub fn create_app(config: &Config) -> Router {
    let router = routes::health::register(Router::new(), &config.health_prefix);

    with_middleware(router.fallback(routes::fallback), config)
}

/// Wraps `router` in the timeout, concurrency limit, CORS and HTTP tracing layers.
pub fn with_middleware(router: Router, config: &Config) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(errors::handle_middleware_error))
                .concurrency_limit(config.concurrency_limit)
                .timeout(config.request_timeout),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
