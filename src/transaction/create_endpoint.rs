//! Defines the endpoint for creating a new transaction.
use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    database_id::TransactionId,
    response::{json_response, message_response},
    transaction::TransactionService,
};

/// The request body for creating a transaction.
///
/// Accepted as either JSON or a URL encoded form. Both fields take any JSON
/// value so that missing or mistyped fields are reported by the service with
/// a useful message instead of a generic decoding error.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewTransactionBody {
    /// The amount spent, either a number or a string starting with an integer.
    ///
    /// An explicit `null` is kept as `Some(Value::Null)` so that it is
    /// reported as an invalid amount rather than a missing one.
    #[serde(default, deserialize_with = "present_value")]
    pub amount: Option<Value>,
    /// Text detailing the transaction. Numbers are stored as text.
    #[serde(default)]
    pub description: Option<Value>,
}

/// Deserialize a field that is present in the body, including `null`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

const INVALID_BODY_MESSAGE: &str = "Invalid request body";

impl<S> FromRequest<S> for NewTransactionBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
            .is_some_and(|content_type| {
                content_type.starts_with("application/x-www-form-urlencoded")
            });

        let body = if is_form {
            Form::<NewTransactionBody>::from_request(request, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<NewTransactionBody>::from_request(request, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| rejection.body_text())
        };

        body.map_err(|reason| {
            tracing::warn!("Could not decode new transaction body: {reason}");
            message_response(StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE)
        })
    }
}

#[derive(Serialize)]
struct Created {
    message: &'static str,
    id: Option<TransactionId>,
}

/// A route handler for creating a new transaction, responds with 201 Created
/// and the new transaction's ID on success.
pub async fn create_transaction_endpoint(
    State(transactions): State<TransactionService>,
    body: NewTransactionBody,
) -> Response {
    let result = transactions
        .create(body.amount.as_ref(), body.description.as_ref())
        .await;

    match result {
        Ok(handle) => {
            tracing::info!(
                id = ?handle.id,
                amount = ?body.amount,
                description = ?body.description,
                "Added expense"
            );

            json_response(
                StatusCode::CREATED,
                Created {
                    message: "Transaction added successfully",
                    id: handle.id,
                },
            )
        }
        Err(error) => error.into_response_with("Failed to add transaction"),
    }
}
