use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
};

use crate::config::{ConfigError, ServerConfig};
use crate::handlers::{
    api, health_check, metrics_handler, request_size_middleware, security_headers_middleware,
    ApiState,
};
use crate::observability::{observability_middleware, BusinessTracingMiddleware, Metrics};
use crate::repositories::CatalogRepository;
use crate::services::{CatalogService, ContactService, SubmissionRecorder};

/// Wire services around a catalog repository and a submission recorder
pub fn build_state(
    repository: Arc<dyn CatalogRepository>,
    recorder: Arc<dyn SubmissionRecorder>,
    metrics: Arc<Metrics>,
) -> ApiState {
    ApiState {
        catalog_service: Arc::new(CatalogService::new(repository)),
        contact_service: Arc::new(ContactService::new(recorder)),
        business_tracing: Arc::new(BusinessTracingMiddleware::new(metrics)),
    }
}

/// Build the application router with all routes and middleware layers
pub fn create_app(
    state: ApiState,
    metrics: Arc<Metrics>,
    server: &ServerConfig,
) -> Result<Router, ConfigError> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(server.cors_origins()?))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let max_request_size = server.max_request_size;
    let body_limit = usize::try_from(max_request_size).unwrap_or(usize::MAX);
    let metrics_for_middleware = metrics.clone();

    let router = Router::new()
        .route("/health/status", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
        .route("/api/menu", get(api::get_menu))
        .route("/api/menu/:category", get(api::get_category))
        .route("/api/item/:id", get(api::get_item))
        .route("/api/info", get(api::get_info))
        .route("/api/contact", post(api::submit_contact))
        .with_state(state)
        .fallback(api::not_found)
        // Layers run outer to inner from the bottom up
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(middleware::from_fn(move |req, next| {
            request_size_middleware(max_request_size, req, next)
        }))
        .layer(cors)
        // Outside CORS and the size guard so preflights and 413s carry them too
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(move |req, next| {
            observability_middleware(metrics_for_middleware.clone(), req, next)
        }));

    Ok(router)
}
