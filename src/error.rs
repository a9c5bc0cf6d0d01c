//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::message_response;

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The client supplied an amount, description or ID that could not be
    /// used, e.g. an amount that is not a whole number.
    ///
    /// The message is safe to show to the client.
    #[error("{0}")]
    InvalidInput(String),

    /// The storage round trip failed (connection, constraint, lock).
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error message.
    #[error("storage error: {0}")]
    StorageError(String),

    /// Something failed that none of the other variants anticipate, e.g. the
    /// task running a storage call panicked or was cancelled.
    #[error("unhandled error: {0}")]
    Unhandled(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::StorageError(value.to_string())
    }
}

impl Error {
    /// The HTTP status a client should receive for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::StorageError(_) | Error::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert the error into a JSON response.
    ///
    /// Invalid input is echoed back to the client. Any other error is logged
    /// with `failure_message` and the client only gets `failure_message`.
    pub(crate) fn into_response_with(self, failure_message: &str) -> Response {
        let status = self.status_code();

        match self {
            Error::InvalidInput(message) => {
                tracing::warn!("{failure_message}: {message}");
                message_response(status, message)
            }
            error => {
                tracing::error!(error = %error, "{failure_message}");
                message_response(status, failure_message)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_response_with("Internal server error")
    }
}
