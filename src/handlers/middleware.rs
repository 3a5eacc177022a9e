use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Reject requests whose declared body size exceeds `max_request_size`.
///
/// Bodies without a `Content-Length` are bounded separately by the body
/// limit layer on the router.
pub async fn request_size_middleware(
    max_request_size: u64,
    request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(length) = declared_content_length(&request) {
        if length > max_request_size {
            crate::warn_with_trace!(
                content_length = length,
                max_request_size = max_request_size,
                "Request body too large"
            );
            return payload_too_large(format!(
                "Request size {} bytes exceeds maximum of {} bytes",
                length, max_request_size
            ));
        }
    }

    next.run(request).await
}

/// JSON 413 shared by the Content-Length guard and body extraction
pub fn payload_too_large(message: String) -> Response {
    (
        StatusCode::PAYLOAD_TOO_LARGE,
        Json(json!({
            "error": "Request too large",
            "message": message,
        })),
    )
        .into_response()
}

fn declared_content_length(request: &Request<Body>) -> Option<u64> {
    request
        .headers()
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// Security headers middleware
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}
