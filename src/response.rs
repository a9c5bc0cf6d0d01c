//! JSON response bodies shared by all route handlers.
//!
//! Every body is stamped with the time the response was created as Unix
//! seconds under the key `timestamp`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
struct Timestamped<T> {
    #[serde(flatten)]
    body: T,
    timestamp: i64,
}

#[derive(Serialize)]
struct Message {
    message: String,
}

/// The current time as Unix seconds.
pub fn unix_timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Create a response with `body` serialized as JSON alongside a `timestamp` field.
///
/// `body` must serialize as a map (i.e., a struct or a `serde_json` object).
pub fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        Json(Timestamped {
            body,
            timestamp: unix_timestamp(),
        }),
    )
        .into_response()
}

/// Create a response with the body `{"message": ..., "timestamp": ...}`.
pub fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    json_response(
        status,
        Message {
            message: message.into(),
        },
    )
}
