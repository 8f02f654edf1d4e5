use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::goal::Goal;

/// Raw goal form input. An empty `id` means "create", a filled one means
/// "update the goal it names".
#[derive(Debug, Clone, Default)]
pub struct GoalInput {
    pub id: Option<String>,
    pub name: String,
    pub target: String,
    pub current: String,
    pub date: String,
}

/// Validates raw input and resolves the upsert: a matching id is retained
/// for a full-field overwrite, a stale id is rejected rather than silently
/// creating a new record, no id mints a fresh one. Pure: the caller applies
/// the result through the store.
pub fn submit_goal(existing: &[Goal], input: &GoalInput) -> Result<Goal, LedgerError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(LedgerError::Validation(
            "Goal name cannot be empty".to_string(),
        ));
    }

    let target = Decimal::from_str(input.target.trim()).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid target '{}'. Please provide a valid decimal number",
            input.target
        ))
    })?;
    if target <= Decimal::ZERO {
        return Err(LedgerError::Validation(
            "Target must be greater than zero".to_string(),
        ));
    }

    let current = Decimal::from_str(input.current.trim()).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid current amount '{}'. Please provide a valid decimal number",
            input.current
        ))
    })?;
    if current < Decimal::ZERO {
        return Err(LedgerError::Validation(
            "Current amount cannot be negative".to_string(),
        ));
    }

    let date = match input.date.trim() {
        "" => None,
        raw => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            LedgerError::Validation("Invalid date format. Please use YYYY-MM-DD".to_string())
        })?),
    };

    let id = match input.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => {
            if !existing.iter().any(|goal| goal.id == id) {
                return Err(LedgerError::NotFound(id.to_string()));
            }
            id.to_string()
        }
        None => Uuid::new_v4().to_string(),
    };

    Ok(Goal::new(
        id,
        name.to_string(),
        target,
        current,
        date,
    ))
}
