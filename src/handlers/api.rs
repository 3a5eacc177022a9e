use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

use super::payload_too_large;
use crate::models::{Catalog, ContactResponse, MenuItem, RestaurantInfo, ServiceError};
use crate::observability::BusinessTracingMiddleware;
use crate::services::{CatalogService, ContactService};

/// Shared application state containing all services
#[derive(Clone)]
pub struct ApiState {
    pub catalog_service: Arc<CatalogService>,
    pub contact_service: Arc<ContactService>,
    pub business_tracing: Arc<BusinessTracingMiddleware>,
}

// =============================================================================
// MENU ENDPOINTS
// =============================================================================

/// The full menu as a mapping of category key to items
#[instrument(name = "get_menu", skip(state))]
pub async fn get_menu(State(state): State<ApiState>) -> Json<Arc<Catalog>> {
    Json(state.catalog_service.get_full_menu())
}

/// Items of a single category
#[instrument(name = "get_category", skip(state), fields(category = %category))]
pub async fn get_category(
    State(state): State<ApiState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state
        .business_tracing
        .trace_catalog_lookup("get_category", || {
            state.catalog_service.get_category(&category)
        })?;

    Ok(Json(items))
}

/// A single item by id. Non-numeric ids are plain misses.
#[instrument(name = "get_item", skip(state), fields(id = %id))]
pub async fn get_item(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, ApiError> {
    let item = state
        .business_tracing
        .trace_catalog_lookup("get_item", || state.catalog_service.get_item(&id))?;

    Ok(Json(item))
}

/// Static restaurant metadata
#[instrument(name = "get_info", skip(state))]
pub async fn get_info(State(state): State<ApiState>) -> Json<Arc<RestaurantInfo>> {
    Json(state.catalog_service.get_info())
}

// =============================================================================
// CONTACT ENDPOINT
// =============================================================================

/// Accept a contact/order submission.
///
/// The raw body is decoded by the service so that a malformed payload is
/// reported as a processing error rather than an extractor rejection. A body
/// cut off by the size limit gets the same JSON 413 as the Content-Length
/// guard.
#[instrument(name = "submit_contact", skip(state, body))]
pub async fn submit_contact(
    State(state): State<ApiState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            crate::warn_with_trace!(error = %rejection.body_text(), "Request body too large");
            return payload_too_large(rejection.body_text());
        }
        Err(rejection) => {
            return ApiError(ServiceError::Processing {
                message: rejection.body_text(),
            })
            .into_response();
        }
    };

    match state
        .business_tracing
        .trace_contact_submission(state.contact_service.submit_raw(&body))
        .await
    {
        Ok(response) => Json(response).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// JSON body for any route that does not exist
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

/// HTTP rendering of a [`ServiceError`]
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::CategoryNotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Category not found" })),
            )
                .into_response(),
            ServiceError::ItemNotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Item not found" })),
            )
                .into_response(),
            ServiceError::Processing { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::failed()),
            )
                .into_response(),
        }
    }
}
