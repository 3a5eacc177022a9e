use async_trait::async_trait;

use crate::models::{ContactSubmission, RecorderError};

/// Sink that a contact submission is handed to for manual follow-up
#[async_trait]
pub trait SubmissionRecorder: Send + Sync {
    async fn record(&self, submission: &ContactSubmission) -> Result<(), RecorderError>;
}

/// Writes each submission as one structured log event
#[derive(Debug, Clone, Default)]
pub struct LogSubmissionRecorder;

impl LogSubmissionRecorder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionRecorder for LogSubmissionRecorder {
    async fn record(&self, submission: &ContactSubmission) -> Result<(), RecorderError> {
        let items = match &submission.items {
            Some(items) => serde_json::to_string(items)?,
            None => "null".to_string(),
        };

        crate::info_with_trace!(
            name = %submission.name,
            phone = %submission.phone,
            message = %submission.message,
            items = %items,
            item_count = submission.item_count(),
            timestamp = %submission.received_at.to_rfc3339(),
            "New order received"
        );

        Ok(())
    }
}
