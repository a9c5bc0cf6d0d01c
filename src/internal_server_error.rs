//! Converts panics in route handlers into a generic 500 response.
use std::any::Any;

use axum::{http::StatusCode, response::Response};

use crate::response::message_response;

/// Build the response for a request whose handler panicked.
///
/// The panic message is logged but never sent to the client.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    tracing::error!(error = detail, "Unhandled application error");

    message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
