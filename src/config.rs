use crate::models::transaction::TransactionType;

/// Fixed configuration consulted by the validators and the aggregation
/// views: who may own a transaction and which categories exist per type.
/// The labels are opaque strings; changing them does not revalidate
/// records that were admitted under an earlier list.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub users: Vec<String>,
    pub default_user: String,
    pub expense_categories: Vec<String>,
    pub income_categories: Vec<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            users: vec!["Esposo".to_string(), "Esposa".to_string()],
            default_user: "Esposo".to_string(),
            expense_categories: vec![
                "Alimentação".to_string(),
                "Transporte".to_string(),
                "Moradia".to_string(),
                "Lazer".to_string(),
                "Saúde".to_string(),
                "Outros".to_string(),
            ],
            income_categories: vec![
                "Salário".to_string(),
                "Freelance".to_string(),
                "Investimentos".to_string(),
                "Outros".to_string(),
            ],
        }
    }
}

impl LedgerConfig {
    pub fn is_known_user(&self, user: &str) -> bool {
        self.users.iter().any(|u| u == user)
    }

    pub fn categories_for(&self, transaction_type: TransactionType) -> &[String] {
        match transaction_type {
            TransactionType::Expense => &self.expense_categories,
            TransactionType::Income => &self.income_categories,
        }
    }
}
