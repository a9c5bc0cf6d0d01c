//! Defines the core data model, input parsing and table schema for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense, i.e. an event where money was spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: TransactionId,
    /// The amount of money spent, in whole currency units.
    pub amount: i64,
    /// A text description of what the transaction was for.
    pub description: String,
}

/// The result of inserting a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordHandle {
    /// The ID the database assigned to the new transaction, if the store
    /// reports it.
    pub id: Option<TransactionId>,
    /// How many rows the insert changed.
    pub rows_affected: RowsAffected,
}

/// The number of rows changed by a mutating statement.
pub type RowsAffected = usize;

/// The result of deleting a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteHandle {
    /// The ID parsed from the request.
    pub id: TransactionId,
    /// How many rows the delete changed, 0 if there was no such transaction.
    pub rows_affected: RowsAffected,
}

// ============================================================================
// INPUT PARSING
// ============================================================================

/// Message for a create request without an amount or description.
pub const MISSING_FIELDS_MESSAGE: &str = "Amount and description are required";
/// Message for an amount that is not a whole number.
pub const INVALID_AMOUNT_MESSAGE: &str = "Amount must be a valid number";
/// Message for a transaction ID that is not a whole number.
pub const INVALID_ID_MESSAGE: &str = "Invalid transaction ID";

/// Parse a client supplied amount as a base-10 integer.
///
/// Numbers are truncated towards zero (`12.5` becomes 12). Strings are read
/// up to the first character that is not part of a leading integer, after
/// skipping leading whitespace, so `"12abc"` and `"12.5"` both become 12.
///
/// # Errors
/// Returns [Error::InvalidInput] if there is no leading integer, e.g. for
/// `null`, booleans, `"abc"` or an empty string, or if the integer does not
/// fit in an `i64`.
pub fn parse_amount(value: &Value) -> Result<i64, Error> {
    let amount = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .map(f64::trunc)
                .filter(|whole| *whole >= i64::MIN as f64 && *whole < i64::MAX as f64)
                .map(|whole| whole as i64)
        }),
        Value::String(text) => parse_leading_integer(text),
        _ => None,
    };

    amount.ok_or_else(|| Error::InvalidInput(INVALID_AMOUNT_MESSAGE.to_owned()))
}

/// Parse a transaction ID taken from a request path.
///
/// Like amounts, only the leading integer is used, so `"1.5"` is the ID 1.
///
/// # Errors
/// Returns [Error::InvalidInput] if `raw` does not start with an integer.
pub fn parse_transaction_id(raw: &str) -> Result<TransactionId, Error> {
    parse_leading_integer(raw).ok_or_else(|| Error::InvalidInput(INVALID_ID_MESSAGE.to_owned()))
}

/// Read an optionally signed run of ASCII digits from the start of `text`,
/// ignoring leading whitespace and anything after the digits.
fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_length = usize::from(text.starts_with(['+', '-']));
    let digit_count = text[sign_length..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digit_count == 0 {
        return None;
    }

    text[..sign_length + digit_count].parse().ok()
}

/// Convert a client supplied description to the text that is stored.
///
/// Strings are kept as they are and numbers are stored in their decimal
/// form. Returns `None` for anything else, including `null`.
pub fn description_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount INTEGER NOT NULL,
                description TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let description = row.get(2)?;

    Ok(Transaction {
        id,
        amount,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================
