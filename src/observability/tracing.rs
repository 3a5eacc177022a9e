use opentelemetry::{global, trace::TraceError, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    trace::{self, Sampler, Tracer},
    Resource,
};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn, Subscriber};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::ObservabilityConfig;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Failed to install OTLP exporter: {0}")]
    OpenTelemetryInit(#[from] TraceError),
    #[error("Failed to install tracing subscriber: {0}")]
    TracingInit(String),
}

/// Install the global subscriber: env filter, console formatter and, when an
/// OTLP endpoint is configured, an OpenTelemetry export layer.
pub fn init_observability(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    let tracer = match config.otlp_endpoint.as_deref().map(str::trim) {
        Some(endpoint) if !endpoint.is_empty() => Some(otlp_tracer(config, endpoint)?),
        _ => None,
    };
    let otlp_export = tracer.is_some();

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracer.map(OpenTelemetryLayer::new))
        .with(console_layer(config.enable_json_logging))
        .try_init()
        .map_err(|e| ObservabilityError::TracingInit(e.to_string()))?;

    info!(
        service = %config.service_name,
        version = %config.service_version,
        otlp_export,
        "Observability initialized"
    );
    Ok(())
}

/// `RUST_LOG` wins; otherwise the crate and tower-http log at `log_level`
fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let crate_target = config.service_name.replace('-', "_");
        EnvFilter::new(format!(
            "{crate_target}={level},tower_http={level}",
            level = config.log_level
        ))
    })
}

fn console_layer<S>(json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        layer
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .boxed()
    } else {
        layer.compact().boxed()
    }
}

fn otlp_tracer(config: &ObservabilityConfig, endpoint: &str) -> Result<Tracer, TraceError> {
    let resource = Resource::new([
        KeyValue::new("service.name", config.service_name.clone()),
        KeyValue::new("service.version", config.service_version.clone()),
        KeyValue::new("service.namespace", "food-valley"),
    ]);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint)
                .with_timeout(Duration::from_secs(3)),
        )
        .with_trace_config(
            trace::config()
                .with_sampler(Sampler::ParentBased(Box::new(Sampler::AlwaysOn)))
                .with_resource(resource),
        )
        .install_batch(opentelemetry_sdk::runtime::Tokio)
}

/// Trace id of the active span, if it belongs to a sampled OpenTelemetry trace
pub fn get_current_trace_id() -> Option<String> {
    use opentelemetry::trace::TraceContextExt;
    use tracing_opentelemetry::OpenTelemetrySpanExt;

    let context = tracing::Span::current().context();
    let span = context.span();
    let span_context = span.span_context();

    span_context
        .is_valid()
        .then(|| span_context.trace_id().to_string())
}

/// Emit an event at `$level`, tagged with the current trace id when one exists
#[doc(hidden)]
#[macro_export]
macro_rules! event_with_trace {
    ($level:expr, $($arg:tt)*) => {
        match $crate::observability::tracing::get_current_trace_id() {
            Some(trace_id) => tracing::event!($level, trace_id = %trace_id, $($arg)*),
            None => tracing::event!($level, $($arg)*),
        }
    };
}

#[macro_export]
macro_rules! info_with_trace {
    ($($arg:tt)*) => {
        $crate::event_with_trace!(tracing::Level::INFO, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn_with_trace {
    ($($arg:tt)*) => {
        $crate::event_with_trace!(tracing::Level::WARN, $($arg)*)
    };
}

#[macro_export]
macro_rules! error_with_trace {
    ($($arg:tt)*) => {
        $crate::event_with_trace!(tracing::Level::ERROR, $($arg)*)
    };
}

/// Flush pending spans and drop the global tracer provider
pub async fn shutdown_observability() {
    let flush = tokio::task::spawn_blocking(global::shutdown_tracer_provider);

    match tokio::time::timeout(SHUTDOWN_TIMEOUT, flush).await {
        Ok(Ok(())) => info!("Tracer provider shut down"),
        Ok(Err(e)) => warn!(error = %e, "Tracer provider shutdown panicked"),
        Err(_) => warn!(
            timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
            "Tracer provider shutdown timed out"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shutdown_without_provider_is_bounded() {
        let started = std::time::Instant::now();
        shutdown_observability().await;

        assert!(started.elapsed() <= SHUTDOWN_TIMEOUT + Duration::from_secs(1));
    }

    #[test]
    fn test_trace_id_absent_outside_spans() {
        assert_eq!(get_current_trace_id(), None);
    }

    #[test]
    fn test_env_filter_targets_crate() {
        std::env::remove_var("RUST_LOG");
        let config = ObservabilityConfig {
            service_name: "food-valley-rs".to_string(),
            service_version: "0.1.0".to_string(),
            otlp_endpoint: None,
            log_level: "debug".to_string(),
            enable_json_logging: false,
        };

        let filter = env_filter(&config).to_string();
        assert!(filter.contains("food_valley_rs=debug"));
        assert!(filter.contains("tower_http=debug"));
    }
}
