//! The API endpoints URIs.

/// The liveness check.
pub const HEALTH: &str = "/health";
/// The route for creating a transaction.
pub const TRANSACTION: &str = "/transaction";
/// The route for listing or deleting all transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for getting or deleting a single transaction.
pub const TRANSACTION_BY_ID: &str = "/transaction/{transaction_id}";
