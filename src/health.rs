//! The liveness endpoint.
use axum::{http::StatusCode, response::Response};
use serde::Serialize;

use crate::response::json_response;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

/// Responds with 200 OK while the server is able to handle requests.
///
/// The database is not checked.
pub async fn get_health() -> Response {
    json_response(StatusCode::OK, Health { status: "healthy" })
}
