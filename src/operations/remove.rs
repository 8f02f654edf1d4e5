use crate::error::LedgerError;
use crate::models::goal::Goal;
use crate::models::transaction::Transaction;

/// Removes one transaction by id. An unknown id is a recoverable
/// `NotFound` and leaves the collection untouched.
pub fn remove_transaction(
    transactions: &mut Vec<Transaction>,
    id: &str,
) -> Result<(), LedgerError> {
    match transactions.iter().position(|t| t.id == id) {
        Some(pos) => {
            transactions.remove(pos);
            Ok(())
        }
        None => Err(LedgerError::NotFound(id.to_string())),
    }
}

/// Same contract as transaction removal, for goals.
pub fn remove_goal(goals: &mut Vec<Goal>, id: &str) -> Result<(), LedgerError> {
    match goals.iter().position(|g| g.id == id) {
        Some(pos) => {
            goals.remove(pos);
            Ok(())
        }
        None => Err(LedgerError::NotFound(id.to_string())),
    }
}
