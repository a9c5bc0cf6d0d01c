use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde::Serialize;

use crate::{
    response::{json_response, message_response},
    transaction::{Transaction, TransactionService},
};

#[derive(Serialize)]
struct Found {
    transaction: Transaction,
}

/// A route handler for getting a transaction by its ID.
///
/// Responds with 404 Not Found if there is no such transaction.
pub async fn get_transaction_endpoint(
    State(transactions): State<TransactionService>,
    Path(raw_id): Path<String>,
) -> Response {
    match transactions.get_by_id(&raw_id).await {
        Ok(Some(transaction)) => json_response(StatusCode::OK, Found { transaction }),
        Ok(None) => message_response(StatusCode::NOT_FOUND, "Transaction not found"),
        Err(error) => error.into_response_with("Failed to get transaction"),
    }
}
