//! The access layer between route handlers and the transaction store.
//!
//! [TransactionService] validates raw client input, then performs exactly one
//! store call per operation on Tokio's blocking thread pool. It never logs;
//! callers decide how to report errors.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    Error,
    transaction::{
        core::{
            DeleteHandle, MISSING_FIELDS_MESSAGE, RecordHandle, RowsAffected, Transaction,
            description_text, parse_amount, parse_transaction_id,
        },
        store::TransactionStore,
    },
};

/// Creates, retrieves and deletes transactions on behalf of route handlers.
#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
}

impl std::fmt::Debug for TransactionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionService").finish_non_exhaustive()
    }
}

impl TransactionService {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Create a new transaction from client input.
    ///
    /// `amount` may be a JSON number or a string starting with an integer, see
    /// [parse_amount](crate::transaction::parse_amount). `description` may be
    /// a string or a number, which is stored as text.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidInput] if `amount` or `description` is missing,
    ///   `description` is blank or not text, or `amount` has no leading
    ///   integer. The store is not touched.
    /// - or [Error::StorageError] if the insert fails.
    pub async fn create(
        &self,
        amount: Option<&Value>,
        description: Option<&Value>,
    ) -> Result<RecordHandle, Error> {
        let missing_fields = || Error::InvalidInput(MISSING_FIELDS_MESSAGE.to_owned());

        let amount = amount.ok_or_else(missing_fields)?;
        let description = description
            .and_then(description_text)
            .filter(|description| !description.trim().is_empty())
            .ok_or_else(missing_fields)?;

        let amount = parse_amount(amount)?;

        self.run(move |store| store.create(amount, &description))
            .await
    }

    /// Retrieve every transaction.
    ///
    /// # Errors
    /// Returns an [Error::StorageError] if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Transaction>, Error> {
        self.run(|store| store.get_all()).await
    }

    /// Retrieve the transaction with the ID `raw_id`.
    ///
    /// A missing transaction is `Ok(None)`, not an error.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidInput] if `raw_id` does not start with an integer,
    /// - or [Error::StorageError] if the query fails.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Option<Transaction>, Error> {
        let id = parse_transaction_id(raw_id)?;

        self.run(move |store| store.get(id)).await
    }

    /// Delete every transaction and return how many were deleted.
    ///
    /// # Errors
    /// Returns an [Error::StorageError] if the statement fails.
    pub async fn delete_all(&self) -> Result<RowsAffected, Error> {
        self.run(|store| store.delete_all()).await
    }

    /// Delete the transaction with the ID `raw_id`.
    ///
    /// The returned handle carries the parsed ID and has `rows_affected` of 0
    /// if there was no such transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidInput] if `raw_id` does not start with an integer,
    /// - or [Error::StorageError] if the statement fails.
    pub async fn delete_by_id(&self, raw_id: &str) -> Result<DeleteHandle, Error> {
        let id = parse_transaction_id(raw_id)?;

        let rows_affected = self.run(move |store| store.delete(id)).await?;

        Ok(DeleteHandle { id, rows_affected })
    }

    async fn run<T, F>(&self, operation: F) -> Result<T, Error>
    where
        T: Send + 'static,
        F: FnOnce(&dyn TransactionStore) -> Result<T, Error> + Send + 'static,
    {
        let store = Arc::clone(&self.store);

        tokio::task::spawn_blocking(move || operation(store.as_ref()))
            .await
            .map_err(|error| Error::Unhandled(format!("storage task failed: {error}")))?
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};

    use crate::{
        Error,
        transaction::{
            DeleteHandle, Transaction, TransactionService,
            core::{INVALID_AMOUNT_MESSAGE, INVALID_ID_MESSAGE, MISSING_FIELDS_MESSAGE},
            service::test_utils::{FailingStore, PanickingStore, get_test_service},
        },
    };

    #[tokio::test]
    async fn create_then_list_includes_new_transaction() {
        let service = get_test_service();
        service
            .create(Some(&json!(5)), Some(&json!("bus fare")))
            .await
            .unwrap();
        let before = service.list_all().await.unwrap();

        let handle = service
            .create(Some(&json!("42")), Some(&json!("groceries")))
            .await
            .unwrap();

        let after = service.list_all().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        let created: Vec<&Transaction> = after
            .iter()
            .filter(|transaction| transaction.amount == 42 && transaction.description == "groceries")
            .collect();
        assert_eq!(created.len(), 1);
        assert_eq!(Some(created[0].id), handle.id);
        assert_eq!(handle.rows_affected, 1);
    }

    #[tokio::test]
    async fn create_rejects_non_numeric_amounts_without_touching_storage() {
        let store = Arc::new(FailingStore::default());
        let service = TransactionService::new(store.clone());

        for amount in [json!("abc"), json!(null), json!(true), json!("")] {
            let result = service.create(Some(&amount), Some(&json!("lunch"))).await;

            assert_eq!(
                result,
                Err(Error::InvalidInput(INVALID_AMOUNT_MESSAGE.to_owned())),
                "amount {amount}"
            );
        }

        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn create_rejects_invalid_amount_and_keeps_count() {
        let service = get_test_service();
        service.create(Some(&json!(1)), Some(&json!("one"))).await.unwrap();

        let result = service.create(Some(&json!("abc")), Some(&json!("two"))).await;

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_requires_amount_and_description() {
        let store = Arc::new(FailingStore::default());
        let service = TransactionService::new(store.clone());
        let want = Err(Error::InvalidInput(MISSING_FIELDS_MESSAGE.to_owned()));

        assert_eq!(service.create(None, Some(&json!("lunch"))).await, want);
        assert_eq!(service.create(Some(&json!(100)), None).await, want);
        assert_eq!(service.create(Some(&json!(100)), Some(&json!(null))).await, want);
        assert_eq!(service.create(Some(&json!(100)), Some(&json!(true))).await, want);
        assert_eq!(service.create(Some(&json!(100)), Some(&json!(""))).await, want);
        assert_eq!(service.create(Some(&json!(100)), Some(&json!("   "))).await, want);
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn get_missing_transaction_is_none() {
        let service = get_test_service();

        assert_eq!(service.get_by_id("12345").await, Ok(None));
    }

    #[tokio::test]
    async fn invalid_ids_are_rejected_without_touching_storage() {
        let store = Arc::new(FailingStore::default());
        let service = TransactionService::new(store.clone());
        let want = Error::InvalidInput(INVALID_ID_MESSAGE.to_owned());

        assert_eq!(service.get_by_id("abc").await, Err(want.clone()));
        assert_eq!(service.delete_by_id("abc").await, Err(want));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn delete_missing_transaction_returns_zero() {
        let service = get_test_service();

        assert_eq!(
            service.delete_by_id("7").await,
            Ok(DeleteHandle {
                id: 7,
                rows_affected: 0
            })
        );
    }

    #[tokio::test]
    async fn delete_all_is_idempotent() {
        let service = get_test_service();
        for amount in 1..=3 {
            service
                .create(Some(&json!(amount)), Some(&json!("snack")))
                .await
                .unwrap();
        }

        assert_eq!(service.delete_all().await, Ok(3));
        assert_eq!(service.delete_all().await, Ok(0));
        assert_eq!(service.list_all().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn round_trip() {
        let service = get_test_service();

        let handle = service
            .create(Some(&json!(100)), Some(&json!("lunch")))
            .await
            .unwrap();
        let id = handle.id.expect("SQLite store should report the new ID").to_string();

        let transaction = service.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(transaction.amount, 100);
        assert_eq!(transaction.description, "lunch");

        assert_eq!(
            service.delete_by_id(&id).await.map(|handle| handle.rows_affected),
            Ok(1)
        );
        assert_eq!(service.get_by_id(&id).await, Ok(None));
    }

    #[tokio::test]
    async fn sql_metacharacters_are_stored_verbatim() {
        let service = get_test_service();
        let description = "\"); DROP TABLE transactions; --";

        let handle = service
            .create(Some(&json!(1)), Some(&json!(description)))
            .await
            .unwrap();

        let id = handle.id.unwrap().to_string();
        let transaction = service.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(transaction.description, description);
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn storage_failures_are_surfaced_once() {
        let store = Arc::new(FailingStore::default());
        let service = TransactionService::new(store.clone());
        let want = Error::StorageError(FailingStore::MESSAGE.to_owned());

        assert_eq!(
            service.create(Some(&json!(1)), Some(&json!("lunch"))).await,
            Err(want.clone())
        );
        assert_eq!(service.list_all().await, Err(want.clone()));
        assert_eq!(service.get_by_id("1").await, Err(want.clone()));
        assert_eq!(service.delete_all().await, Err(want.clone()));
        assert_eq!(service.delete_by_id("1").await, Err(want));
        // No retries.
        assert_eq!(store.call_count(), 5);
    }

    #[tokio::test]
    async fn panicking_store_is_unhandled_error() {
        let service = TransactionService::new(Arc::new(PanickingStore));

        let result = service.list_all().await;

        assert!(matches!(result, Err(Error::Unhandled(_))), "got {result:?}");
    }

    #[tokio::test]
    async fn accepts_amount_from_form_strings() {
        let service = get_test_service();
        let amount = Value::String("15".to_owned());

        let handle = service.create(Some(&amount), Some(&json!("taxi"))).await.unwrap();

        let id = handle.id.unwrap().to_string();
        assert_eq!(service.get_by_id(&id).await.unwrap().unwrap().amount, 15);
    }

    #[tokio::test]
    async fn amounts_use_leading_integer() {
        let service = get_test_service();

        for (amount, want) in [(json!(12.5), 12), (json!("12abc"), 12), (json!("7.9"), 7)] {
            let handle = service
                .create(Some(&amount), Some(&json!("snack")))
                .await
                .unwrap();

            let id = handle.id.unwrap().to_string();
            let transaction = service.get_by_id(&id).await.unwrap().unwrap();
            assert_eq!(transaction.amount, want, "amount {amount}");
        }
    }

    #[tokio::test]
    async fn numeric_descriptions_are_stored_as_text() {
        let service = get_test_service();

        let handle = service
            .create(Some(&json!(1)), Some(&json!(7)))
            .await
            .unwrap();

        let id = handle.id.unwrap().to_string();
        assert_eq!(
            service.get_by_id(&id).await.unwrap().unwrap().description,
            "7"
        );
    }

    #[tokio::test]
    async fn delete_reports_parsed_id() {
        let service = get_test_service();
        service
            .create(Some(&json!(1)), Some(&json!("snack")))
            .await
            .unwrap();

        assert_eq!(
            service.delete_by_id("+1").await,
            Ok(DeleteHandle {
                id: 1,
                rows_affected: 1
            })
        );
    }
}
