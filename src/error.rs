use thiserror::Error;

/// Errors the ledger core can throw. None of them is fatal: every failure
/// leaves the in-memory ledger in its last-known-consistent state.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("\"{0}\" not found")]
    NotFound(String),
    #[error("Unknown user: {0}")]
    UnknownUser(String),
    #[error("Storage unavailable: {0}")]
    Persistence(#[from] std::io::Error),
    #[error("Malformed ledger data: {0}")]
    Corrupt(#[from] serde_json::Error),
}
