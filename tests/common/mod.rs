use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::net::TcpListener;

use food_valley_rs::{
    build_state,
    config::ServerConfig,
    create_app,
    models::{ContactSubmission, RecorderError},
    observability::Metrics,
    repositories::StaticCatalogRepository,
    services::SubmissionRecorder,
};

/// Origin accepted by the default CORS allow-list
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Recorder that keeps every submission in memory
#[derive(Default)]
pub struct RecordingRecorder {
    submissions: Mutex<Vec<ContactSubmission>>,
    fail: bool,
}

impl RecordingRecorder {
    pub fn failing() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionRecorder for RecordingRecorder {
    async fn record(&self, submission: &ContactSubmission) -> Result<(), RecorderError> {
        if self.fail {
            return Err(RecorderError::Unavailable {
                message: "recorder offline".to_string(),
            });
        }
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
    pub recorder: Arc<RecordingRecorder>,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        Self::with_recorder(RecordingRecorder::default()).await
    }

    pub async fn with_recorder(recorder: RecordingRecorder) -> Self {
        let recorder = Arc::new(recorder);
        let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));
        let repository =
            StaticCatalogRepository::food_valley().expect("Failed to build catalog");

        let state = build_state(Arc::new(repository), recorder.clone(), metrics.clone());
        let app = create_app(state, metrics, &ServerConfig::default())
            .expect("Failed to build router");

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        Self {
            client: Client::new(),
            base_url,
            recorder,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        let status = response.status().as_u16();
        let body = response.json().await.expect("Failed to parse response");
        (status, body)
    }
}
