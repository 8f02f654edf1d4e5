use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// JSON field names match the layout older exports were written with,
/// so a previously exported backup stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: String,
        user: String,
        transaction_type: TransactionType,
        amount: Decimal,
        description: String,
        category: String,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            user,
            transaction_type,
            amount,
            description,
            category,
            date,
        }
    }
}
