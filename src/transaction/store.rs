//! Defines the transaction store trait and a SQLite backed implementation.
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::core::{RecordHandle, RowsAffected, Transaction, map_transaction_row},
};

/// Handles the persistence of transactions.
///
/// Every method is a single round trip to the underlying storage. Inputs are
/// expected to be validated already.
pub trait TransactionStore: Send + Sync {
    /// Insert a new transaction.
    fn create(&self, amount: i64, description: &str) -> Result<RecordHandle, Error>;

    /// Retrieve every transaction in the store.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve the transaction with `id`, or `None` if there is no such
    /// transaction.
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error>;

    /// Delete every transaction in the store.
    fn delete_all(&self) -> Result<RowsAffected, Error>;

    /// Delete the transaction with `id`. Returns 0 if there was no such
    /// transaction.
    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error>;
}

/// Stores transactions in a SQLite database.
///
/// The transaction table must already exist, see [crate::initialize_db].
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            Error::StorageError(format!("could not acquire the database lock: {error}"))
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Insert a new transaction and return the ID SQLite assigned to it.
    ///
    /// # Errors
    /// Returns an [Error::StorageError] if there is an SQL error.
    fn create(&self, amount: i64, description: &str) -> Result<RecordHandle, Error> {
        let connection = self.lock()?;

        let rows_affected = connection.execute(
            "INSERT INTO transactions (amount, description) VALUES (?1, ?2)",
            (amount, description),
        )?;

        Ok(RecordHandle {
            id: Some(connection.last_insert_rowid()),
            rows_affected,
        })
    }

    /// Retrieve all transactions ordered by ID, i.e. in the order they were created.
    ///
    /// # Errors
    /// Returns an [Error::StorageError] if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock()?;

        let transactions = connection
            .prepare("SELECT id, amount, description FROM transactions ORDER BY id ASC")?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// Returns an [Error::StorageError] if there is an SQL error.
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        let connection = self.lock()?;

        let transaction = connection
            .prepare("SELECT id, amount, description FROM transactions WHERE id = :id")?
            .query_row(&[(":id", &id)], map_transaction_row)
            .optional()?;

        Ok(transaction)
    }

    fn delete_all(&self) -> Result<RowsAffected, Error> {
        let connection = self.lock()?;

        connection
            .execute("DELETE FROM transactions", ())
            .map_err(|error| error.into())
    }

    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error> {
        let connection = self.lock()?;

        connection
            .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
            .map_err(|error| error.into())
    }
}
