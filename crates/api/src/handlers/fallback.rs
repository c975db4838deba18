//! Catch-all handlers wired into the router and middleware stack.

use std::any::Any;

use axum::http::{HeaderMap, Uri};
use axum::response::{IntoResponse, Response};
use office_core::maturity::MaturityLevel;

use crate::error::{AppError, LevelRejection};
use crate::router::CORRELATION_ID_HEADER;

/// Any request that matched no route.
pub async fn route_not_found(uri: Uri, headers: HeaderMap) -> AppError {
    let trace_id = headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    AppError::RouteNotFound {
        path: uri.path().to_string(),
        trace_id,
    }
}

/// Turn a caught panic into a JSON 500, including the panic message only when
/// `expose_details` is set.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, expose_details: bool) -> Response {
    let details = expose_details.then(|| panic_message(panic.as_ref()));
    AppError::Panic { details }.into_response()
}

/// Turn a panic inside `level`'s handlers into that level's failure envelope.
///
/// Levels 0 and 1 still answer 200; levels 2 and 3 answer 500.
pub fn level_panic_response(
    level: MaturityLevel,
    panic: Box<dyn Any + Send + 'static>,
    expose_details: bool,
) -> Response {
    let details = if expose_details {
        panic_message(panic.as_ref())
    } else {
        "unexpected failure".to_string()
    };
    LevelRejection::internal(level, details).into_response()
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic payload".to_string()
    }
}
