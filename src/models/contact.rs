use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const CONTACT_ACCEPTED_MESSAGE: &str =
    "Order received! We will contact you shortly on the provided phone number.";
pub const CONTACT_FAILED_MESSAGE: &str = "Error processing your order. Please try again.";

/// Inbound contact form / order payload.
///
/// Nothing here is validated. Missing or `null` fields become empty strings,
/// other scalars are stringified, unknown fields are ignored and `items` is
/// carried through as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
}

/// A contact request stamped with its arrival time. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub items: Option<Value>,
    pub received_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn received(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            phone: request.phone,
            message: request.message,
            items: request.items,
            received_at: Utc::now(),
        }
    }

    pub fn item_count(&self) -> usize {
        match &self.items {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Null) | None => 0,
            Some(_) => 1,
        }
    }
}

/// Acknowledgment body for `/api/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: CONTACT_ACCEPTED_MESSAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: CONTACT_FAILED_MESSAGE.to_string(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_request_deserializes() {
        let request: ContactRequest = serde_json::from_value(json!({
            "name": "Ali",
            "phone": "0300-0000000",
            "message": "test order",
            "items": [{"id": 1, "qty": 2}]
        }))
        .unwrap();

        assert_eq!(request.name, "Ali");
        assert_eq!(request.phone, "0300-0000000");
        assert_eq!(request.message, "test order");
        assert_eq!(request.items, Some(json!([{"id": 1, "qty": 2}])));
    }

    #[test]
    fn test_missing_and_odd_fields_accepted() {
        let request: ContactRequest = serde_json::from_value(json!({
            "phone": 3001234567u64,
            "message": null,
            "referrer": "flyer"
        }))
        .unwrap();

        assert_eq!(request.name, "");
        assert_eq!(request.phone, "3001234567");
        assert_eq!(request.message, "");
        assert!(request.items.is_none());
    }

    #[test]
    fn test_submission_item_count() {
        let mut request = ContactRequest::default();
        assert_eq!(ContactSubmission::received(request.clone()).item_count(), 0);

        request.items = Some(json!(["Chicken Burger", "Lassi"]));
        assert_eq!(ContactSubmission::received(request.clone()).item_count(), 2);

        request.items = Some(json!("two samosas"));
        assert_eq!(ContactSubmission::received(request).item_count(), 1);
    }

    #[test]
    fn test_response_bodies() {
        let body = serde_json::to_value(ContactResponse::accepted()).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], CONTACT_ACCEPTED_MESSAGE);

        let body = serde_json::to_value(ContactResponse::failed()).unwrap();
        assert_eq!(body["success"], false);
    }
}
