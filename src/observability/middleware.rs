use axum::{
    extract::{MatchedPath, Request},
    http::{header, HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use opentelemetry::trace::{Status, TraceContextExt};
use std::{sync::Arc, time::Instant};
use tracing::{error, info, instrument, Instrument};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use super::Metrics;
use crate::models::ServiceResult;

/// Route label used for requests that matched no route
const UNMATCHED_ROUTE: &str = "unmatched";

fn header_or<'a>(headers: &'a HeaderMap, name: HeaderName, fallback: &'a str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(fallback)
}

/// Opens one server span per request and records HTTP metrics against the
/// matched route template, never the raw path
pub async fn observability_middleware(
    metrics: Arc<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ROUTE, MatchedPath::as_str)
        .to_owned();

    let headers = request.headers();
    let span = tracing::info_span!(
        target: "food_valley_rs::http",
        "http_request",
        otel.name = %format!("{} {}", method, route),
        otel.kind = "server",
        http.method = %method,
        http.route = %route,
        http.target = %path,
        http.user_agent = header_or(headers, header::USER_AGENT, "unknown"),
        http.origin = header_or(headers, header::ORIGIN, "none"),
        http.status_code = tracing::field::Empty,
    );

    let in_flight = metrics.track_in_flight(method.as_str(), &route);
    let response = next.run(request).instrument(span.clone()).await;
    drop(in_flight);

    let elapsed = started.elapsed();
    let status = response.status();
    let status_code = status.as_u16();
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    metrics.record_http_request(method.as_str(), &route, status_code, elapsed.as_secs_f64());
    span.record("http.status_code", status_code);

    span.in_scope(|| {
        // Unknown categories and items are expected input, not faults
        if status.is_server_error() {
            tracing::Span::current()
                .context()
                .span()
                .set_status(Status::error(status.to_string()));
            crate::error_with_trace!(%method, %path, status_code, duration_ms, "Request failed");
        } else if status.is_client_error() {
            crate::warn_with_trace!(%method, %path, status_code, duration_ms, "Request rejected");
        } else {
            crate::info_with_trace!(%method, %path, status_code, duration_ms, "Request completed");
        }
    });

    response
}

/// Records business outcomes of catalog and contact operations
pub struct BusinessTracingMiddleware {
    metrics: Arc<Metrics>,
}

impl BusinessTracingMiddleware {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }

    /// Trace a catalog lookup. A `ServiceError` that is a lookup miss counts
    /// as a miss, anything else propagates unchanged.
    #[instrument(skip_all, fields(operation = %operation))]
    pub fn trace_catalog_lookup<T>(
        &self,
        operation: &str,
        lookup: impl FnOnce() -> ServiceResult<T>,
    ) -> ServiceResult<T> {
        let start_time = Instant::now();
        let result = lookup();

        self.metrics.record_catalog_lookup(operation, result.is_ok());
        match &result {
            Ok(_) => info!(
                duration_us = start_time.elapsed().as_micros(),
                "Catalog lookup hit"
            ),
            Err(e) if e.is_not_found() => info!(
                duration_us = start_time.elapsed().as_micros(),
                "Catalog lookup miss"
            ),
            Err(e) => error!(error = %e, "Catalog lookup failed"),
        }

        result
    }

    /// Trace a contact submission
    #[instrument(skip_all, fields(operation = "submit_contact"))]
    pub async fn trace_contact_submission<F, T, E>(&self, future: F) -> Result<T, E>
    where
        F: std::future::Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let start_time = Instant::now();

        match future.await {
            Ok(result) => {
                self.metrics.record_contact_submission(true);

                info!(
                    duration_ms = start_time.elapsed().as_millis(),
                    "Contact submission recorded"
                );

                Ok(result)
            }
            Err(error) => {
                self.metrics.record_contact_submission(false);

                error!(
                    error = %error,
                    duration_ms = start_time.elapsed().as_millis(),
                    "Contact submission failed"
                );

                Err(error)
            }
        }
    }
}
