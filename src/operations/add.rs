use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::models::transaction::{Transaction, TransactionType};

/// Raw form-shaped input, everything still a string. `user` left empty
/// means "stamp the active user".
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub transaction_type: String,
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub user: Option<String>,
}

/// Validates raw input and returns an admitted transaction with a fresh id.
/// Pure: the caller is responsible for appending it to the store, so every
/// rejection is guaranteed to leave the ledger untouched.
pub fn submit_transaction(
    config: &LedgerConfig,
    current_user: &str,
    input: &TransactionInput,
) -> Result<Transaction, LedgerError> {
    let transaction_type = match input.transaction_type.trim().to_lowercase().as_str() {
        "income" => TransactionType::Income,
        "expense" => TransactionType::Expense,
        other => {
            return Err(LedgerError::Validation(format!(
                "Invalid transaction type '{}'. Use 'income' or 'expense'",
                other
            )));
        }
    };

    let amount = Decimal::from_str(input.amount.trim()).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid amount '{}'. Please provide a valid decimal number",
            input.amount
        ))
    })?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::Validation(
            "Amount must be greater than zero".to_string(),
        ));
    }

    let description = input.description.trim();
    if description.is_empty() {
        return Err(LedgerError::Validation(
            "Description cannot be empty".to_string(),
        ));
    }

    let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation("Invalid date format. Please use YYYY-MM-DD".to_string())
    })?;

    let category = input.category.trim();
    if category.is_empty() {
        return Err(LedgerError::Validation(
            "Category cannot be empty".to_string(),
        ));
    }
    if !config
        .categories_for(transaction_type)
        .iter()
        .any(|c| c == category)
    {
        return Err(LedgerError::Validation(format!(
            "Unknown {} category '{}'",
            transaction_type.as_str(),
            category
        )));
    }

    let user = match &input.user {
        Some(user) => {
            let user = user.trim();
            if !config.is_known_user(user) {
                return Err(LedgerError::UnknownUser(user.to_string()));
            }
            user.to_string()
        }
        None => current_user.to_string(),
    };

    Ok(Transaction::new(
        Uuid::new_v4().to_string(),
        user,
        transaction_type,
        amount.round_dp(2),
        description.to_string(),
        category.to_string(),
        date,
    ))
}
