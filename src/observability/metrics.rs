use prometheus::{
    core::Collector, CounterVec, Encoder, Gauge, GaugeVec, HistogramOpts, HistogramVec, Opts,
    Registry, TextEncoder,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to register metric: {0}")]
    Registration(#[from] prometheus::Error),
    #[error("Failed to encode metrics: {0}")]
    Encoding(String),
}

/// Prometheus metrics for the menu service
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,

    // HTTP metrics
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub http_requests_in_flight: GaugeVec,

    // Business metrics
    pub catalog_lookups_total: CounterVec,
    pub contact_submissions_total: CounterVec,
}

/// Sub-millisecond buckets; catalog lookups never touch I/O
const LATENCY_BUCKETS: &[f64] = &[0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0];

fn registered<C>(registry: &Registry, collector: C) -> Result<C, MetricsError>
where
    C: Collector + Clone + 'static,
{
    registry.register(Box::new(collector.clone()))?;
    Ok(collector)
}

impl Metrics {
    /// Create a new metrics instance with all metrics registered on a private registry
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let metrics = Metrics {
            http_requests_total: registered(
                &registry,
                CounterVec::new(
                    Opts::new("http_requests_total", "HTTP requests served"),
                    &["method", "endpoint", "status_code"],
                )?,
            )?,
            http_request_duration_seconds: registered(
                &registry,
                HistogramVec::new(
                    HistogramOpts::new("http_request_duration_seconds", "HTTP request latency")
                        .buckets(LATENCY_BUCKETS.to_vec()),
                    &["method", "endpoint"],
                )?,
            )?,
            http_requests_in_flight: registered(
                &registry,
                GaugeVec::new(
                    Opts::new("http_requests_in_flight", "HTTP requests being handled"),
                    &["method", "endpoint"],
                )?,
            )?,
            catalog_lookups_total: registered(
                &registry,
                CounterVec::new(
                    Opts::new("catalog_lookups_total", "Menu catalog lookups by outcome"),
                    &["operation", "outcome"],
                )?,
            )?,
            contact_submissions_total: registered(
                &registry,
                CounterVec::new(
                    Opts::new("contact_submissions_total", "Contact form submissions"),
                    &["status"],
                )?,
            )?,
            registry,
        };

        debug!("Prometheus metrics registered");
        Ok(metrics)
    }

    /// Encode all metrics in Prometheus text format
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| MetricsError::Encoding(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| MetricsError::Encoding(e.to_string()))
    }

    pub fn record_http_request(
        &self,
        method: &str,
        endpoint: &str,
        status_code: u16,
        duration_seconds: f64,
    ) {
        let status_str = status_code.to_string();

        self.http_requests_total
            .with_label_values(&[method, endpoint, &status_str])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, endpoint])
            .observe(duration_seconds);
    }

    /// Record a catalog lookup; a miss is an expected outcome, not an error
    pub fn record_catalog_lookup(&self, operation: &str, hit: bool) {
        let outcome = if hit { "hit" } else { "miss" };

        self.catalog_lookups_total
            .with_label_values(&[operation, outcome])
            .inc();
    }

    pub fn record_contact_submission(&self, success: bool) {
        let status = if success { "success" } else { "error" };

        self.contact_submissions_total
            .with_label_values(&[status])
            .inc();
    }

    /// Count a request as in flight until the returned guard is dropped
    pub fn track_in_flight(&self, method: &str, endpoint: &str) -> InFlightGuard {
        let gauge = self
            .http_requests_in_flight
            .with_label_values(&[method, endpoint]);
        gauge.inc();

        InFlightGuard { gauge }
    }
}

/// Decrements the in-flight gauge on drop, including when the request
/// future is cancelled
#[must_use = "the request stops counting as in flight once the guard is dropped"]
pub struct InFlightGuard {
    gauge: Gauge,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.gauge.dec();
    }
}
