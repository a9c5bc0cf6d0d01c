//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the parsing of client supplied amounts and IDs
//! - The `TransactionStore` trait and its SQLite implementation
//! - The `TransactionService` access layer used by the route handlers
//! - The route handlers themselves

mod core;
mod create_endpoint;
mod delete_endpoint;
mod get_endpoint;
mod list_endpoint;
mod service;
mod store;

pub use core::{
    DeleteHandle, RecordHandle, RowsAffected, Transaction, create_transaction_table,
    description_text, map_transaction_row, parse_amount, parse_transaction_id,
};
pub use create_endpoint::{NewTransactionBody, create_transaction_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::{delete_all_transactions_endpoint, get_transactions_endpoint};
pub use service::TransactionService;
pub use store::{SQLiteTransactionStore, TransactionStore};

#[cfg(test)]
pub(crate) use service::test_utils;
