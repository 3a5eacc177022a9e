use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use tracing::instrument;

use crate::models::{
    ContactRequest, ContactResponse, ContactSubmission, ServiceError, ServiceResult,
};
use crate::services::SubmissionRecorder;

/// Accepts contact form submissions and hands them to a recorder
pub struct ContactService {
    recorder: Arc<dyn SubmissionRecorder>,
}

impl ContactService {
    pub fn new(recorder: Arc<dyn SubmissionRecorder>) -> Self {
        Self { recorder }
    }

    /// Decode a raw request body. An empty body is an empty request; anything
    /// that is not a JSON object is a processing error.
    pub fn parse_request(body: &[u8]) -> ServiceResult<ContactRequest> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(ContactRequest::default());
        }

        // Sequences would otherwise fill the struct fields by position
        match serde_json::from_slice::<Value>(body).map_err(invalid_payload)? {
            value @ Value::Object(_) => serde_json::from_value(value).map_err(invalid_payload),
            _ => Err(invalid_payload("expected a JSON object")),
        }
    }

    /// Record one submission and acknowledge it
    #[instrument(skip(self, request), fields(has_items = request.items.is_some()))]
    pub async fn submit(&self, request: ContactRequest) -> ServiceResult<ContactResponse> {
        let submission = ContactSubmission::received(request);

        if let Err(e) = self.recorder.record(&submission).await {
            crate::error_with_trace!(error = %e, "Failed to record contact submission");
            return Err(e.into());
        }

        Ok(ContactResponse::accepted())
    }

    /// Parse and submit in one step
    pub async fn submit_raw(&self, body: &[u8]) -> ServiceResult<ContactResponse> {
        let request = Self::parse_request(body)?;
        self.submit(request).await
    }
}

fn invalid_payload(reason: impl Display) -> ServiceError {
    ServiceError::Processing {
        message: format!("Invalid contact payload: {}", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecorderError;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        TestRecorder {}

        #[async_trait]
        impl SubmissionRecorder for TestRecorder {
            async fn record(&self, submission: &ContactSubmission) -> Result<(), RecorderError>;
        }
    }

    #[tokio::test]
    async fn test_submit_records_once() {
        let mut recorder = MockTestRecorder::new();
        recorder
            .expect_record()
            .withf(|submission| {
                submission.name == "Ali"
                    && submission.phone == "0300-0000000"
                    && submission.message == "test order"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = ContactService::new(Arc::new(recorder));
        let response = service
            .submit_raw(br#"{"name":"Ali","phone":"0300-0000000","message":"test order"}"#)
            .await
            .unwrap();

        assert!(response.success);
    }

    #[tokio::test]
    async fn test_submit_empty_body_accepted() {
        let mut recorder = MockTestRecorder::new();
        recorder
            .expect_record()
            .withf(|submission| submission.name.is_empty() && submission.items.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let service = ContactService::new(Arc::new(recorder));

        assert!(service.submit_raw(b"").await.unwrap().success);
    }

    #[tokio::test]
    async fn test_malformed_body_is_processing_error() {
        let mut recorder = MockTestRecorder::new();
        recorder.expect_record().times(0);

        let service = ContactService::new(Arc::new(recorder));

        let bodies: [&[u8]; 5] = [
            b"{\"name\": ",
            b"[1, 2, 3]",
            b"[\"Ali\", \"0300-0000000\", \"test order\"]",
            b"\"hello\"",
            b"null",
        ];
        for body in bodies {
            match service.submit_raw(body).await {
                Err(ServiceError::Processing { message }) => {
                    assert!(message.starts_with("Invalid contact payload"));
                }
                other => panic!("Expected Processing error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_request_rejects_sequences() {
        let result = ContactService::parse_request(b"[1, 2, 3]");
        assert!(matches!(result, Err(ServiceError::Processing { .. })));

        let request = ContactService::parse_request(br#"{"name": 1, "phone": null}"#).unwrap();
        assert_eq!(request.name, "1");
        assert_eq!(request.phone, "");
    }

    #[tokio::test]
    async fn test_recorder_failure_is_processing_error() {
        let mut recorder = MockTestRecorder::new();
        recorder.expect_record().times(1).returning(|_| {
            Err(RecorderError::Unavailable {
                message: "sink closed".to_string(),
            })
        });

        let service = ContactService::new(Arc::new(recorder));
        let result = service.submit(ContactRequest::default()).await;

        assert!(matches!(result, Err(ServiceError::Processing { .. })));
    }
}
