//! The `{ success, data, message, error }` envelope shared by every level.
//!
//! Level 3 adds a `links` array; the other levels omit the field entirely.

use office_core::error::CoreError;
use serde::Serialize;

use crate::hateoas::Link;

/// Standard response envelope.
///
/// `data` and `error` serialize as `null` when absent.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A successful envelope carrying `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            links: None,
        }
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = Some(links);
        self
    }
}

impl ApiResponse<()> {
    /// A failed envelope: `error` holds the detail, `message` the summary.
    pub fn failure(err: &CoreError) -> Self {
        Self {
            success: false,
            data: None,
            message: err.summary().to_string(),
            error: Some(err.to_string()),
            links: None,
        }
    }
}
