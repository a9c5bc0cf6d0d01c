use axum::{http::StatusCode, response::Response};

use crate::response::message_response;

/// The fallback handler for requests that do not match any route.
pub async fn get_404_not_found() -> Response {
    message_response(StatusCode::NOT_FOUND, "Route not found")
}
