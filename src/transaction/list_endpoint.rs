//! Defines the endpoints that act on the whole transaction collection.
use axum::{extract::State, http::StatusCode, response::Response};
use serde::Serialize;

use crate::{
    response::json_response,
    transaction::{RowsAffected, Transaction, TransactionService},
};

#[derive(Serialize)]
struct TransactionList {
    transactions: Vec<Transaction>,
}

/// A route handler for listing every transaction.
pub async fn get_transactions_endpoint(
    State(transactions): State<TransactionService>,
) -> Response {
    match transactions.list_all().await {
        Ok(transactions) => {
            tracing::info!(count = transactions.len(), "Retrieved all expenses");

            json_response(StatusCode::OK, TransactionList { transactions })
        }
        Err(error) => error.into_response_with("Failed to get transactions"),
    }
}

#[derive(Serialize)]
struct Deleted {
    message: &'static str,
    deleted: RowsAffected,
}

/// A route handler for deleting every transaction.
///
/// Succeeds even if there were no transactions to delete.
pub async fn delete_all_transactions_endpoint(
    State(transactions): State<TransactionService>,
) -> Response {
    match transactions.delete_all().await {
        Ok(deleted) => {
            tracing::info!(count = deleted, "Deleted all expenses");

            json_response(
                StatusCode::OK,
                Deleted {
                    message: "All transactions deleted successfully",
                    deleted,
                },
            )
        }
        Err(error) => error.into_response_with("Failed to delete transactions"),
    }
}
