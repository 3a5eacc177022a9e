#[cfg(test)]
mod config_tests {
    use crate::config::{
        default_allowed_origins, default_host, default_log_level, default_max_request_size,
        default_port, default_service_name, default_timeout, Config, ConfigError, ServerConfig,
    };
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use std::time::Duration;
    use tracing_subscriber::{layer::Context, prelude::*, Layer};

    struct EventCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn settings(overrides: &[(&str, &str)]) -> config::Config {
        let mut builder = config::Config::builder();
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_loading_emits_no_events_before_logging_is_set_up() {
        let events = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(EventCounter(events.clone()));

        tracing::subscriber::with_default(subscriber, || {
            Config::from_settings(settings(&[("port", "8080")])).unwrap();
        });

        assert_eq!(events.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_defaults_from_empty_settings() {
        let config = Config::from_settings(settings(&[])).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 12001);
        assert_eq!(config.server.request_timeout_seconds, 30);
        assert_eq!(config.server.max_request_size, 100 * 1024);
        assert_eq!(config.observability.service_name, "food-valley-rs");
        assert_eq!(config.observability.otlp_endpoint, None);
        assert!(!config.observability.enable_json_logging);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_settings(settings(&[
            ("port", "8080"),
            ("allowed_origins", "http://localhost:3000, https://foodvalley.pk"),
            ("otlp_endpoint", "http://collector:4317"),
            ("log_level", "debug"),
            ("enable_json_logging", "true"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_origins().unwrap().len(), 2);
        assert_eq!(
            config.observability.otlp_endpoint.as_deref(),
            Some("http://collector:4317")
        );
        assert_eq!(config.observability.log_level, "debug");
        assert!(config.observability.enable_json_logging);
    }

    #[test]
    fn test_zero_port_rejected() {
        let result = Config::from_settings(settings(&[("port", "0")]));

        match result {
            Err(ConfigError::ValidationError { message }) => {
                assert_eq!(message, "Server port cannot be 0");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_origin_list_rejected() {
        let result = Config::from_settings(settings(&[("allowed_origins", " , ")]));
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let config = ServerConfig {
            allowed_origins: "http://ok.example,bad\norigin".to_string(),
            ..ServerConfig::default()
        };

        assert!(config.cors_origins().is_err());
    }

    #[test]
    fn test_server_config_request_timeout() {
        let config = ServerConfig {
            request_timeout_seconds: 45,
            ..ServerConfig::default()
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::ValidationError {
            message: "Invalid configuration".to_string(),
        };
        assert_eq!(error.to_string(), "Validation error: Invalid configuration");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 12001);
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_max_request_size(), 100 * 1024);
        assert_eq!(default_allowed_origins(), "http://localhost:3000");
        assert_eq!(default_service_name(), "food-valley-rs");
        assert_eq!(default_log_level(), "info");
    }
}
