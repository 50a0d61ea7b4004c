//! Success response envelopes
//!
//! All successful responses share the `{ success: true, ... }` shape:
//! single records in [`ApiResponse`], list endpoints in [`PagedResponse`]
//! with the pagination block at the top level.

use axum::Json;
use serde::Serialize;

use crate::db::repository::{Page, Pagination};

/// Standard response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// List response envelope with pagination
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        message: None,
        data: Some(data),
    })
}

/// Create a successful response with a custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        message: Some(message.into()),
        data: Some(data),
    })
}

/// Create a message-only response (no data payload)
pub fn message(message: impl Into<String>) -> Json<ApiResponse<()>> {
    Json(ApiResponse {
        success: true,
        message: Some(message.into()),
        data: None,
    })
}

/// Create a paginated list response
pub fn paged<T: Serialize>(page: Page<T>) -> Json<PagedResponse<T>> {
    Json(PagedResponse {
        success: true,
        data: page.data,
        pagination: page.pagination,
    })
}
