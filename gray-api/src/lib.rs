//! Gray Code Explorer REST API
//!
//! Exposes conversion, sequence tables, bit differences, encoder disks and
//! the search-grounded assistant over HTTP.
//!
//! ## Features
//! - API Key Authentication (optional, via X-API-Key header)
//! - Rate Limiting (configurable requests per second)
//! - OpenAPI/Swagger documentation at /docs

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use middleware::{ApiKeyConfig, RateGuard, RateLimitConfig, auth_middleware, rate_limit_middleware};
use openapi::ApiDoc;
pub use state::{AppState, DisplayLimits};

/// Router with docs and the middleware stack applied
pub fn build_app(
    state: AppState,
    auth_config: Arc<ApiKeyConfig>,
    rate_config: RateLimitConfig,
    cors: bool,
) -> Router {
    let mut app = routes::create_router(state);

    // Add Swagger UI
    app = app.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Add rate limiting middleware
    app = app.layer(axum_middleware::from_fn_with_state(
        RateGuard::new(rate_config),
        rate_limit_middleware,
    ));

    // Add authentication middleware
    app = app.layer(axum_middleware::from_fn_with_state(
        auth_config,
        auth_middleware,
    ));

    if cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
}
