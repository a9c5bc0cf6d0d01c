use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    response::message_response,
    transaction::{DeleteHandle, TransactionService},
};

/// A route handler for deleting a transaction by its ID.
///
/// Responds with 404 Not Found if there was no transaction to delete.
pub async fn delete_transaction_endpoint(
    State(transactions): State<TransactionService>,
    Path(raw_id): Path<String>,
) -> Response {
    match transactions.delete_by_id(&raw_id).await {
        Ok(DeleteHandle {
            rows_affected: 0, ..
        }) => message_response(StatusCode::NOT_FOUND, "Transaction not found"),
        Ok(DeleteHandle { id, .. }) => {
            tracing::info!("Deleted transaction {id}");

            message_response(
                StatusCode::OK,
                format!("Transaction {id} deleted successfully"),
            )
        }
        Err(error) => error.into_response_with("Failed to delete transaction"),
    }
}
