use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::transaction::{Transaction, TransactionType};

/// How many entries the dashboard history shows.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// The summary shape handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Every transaction dated in the same calendar year and month as
/// `reference`, in input order.
pub fn filter_by_month(transactions: &[Transaction], reference: NaiveDate) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.year() == reference.year() && t.date.month() == reference.month())
        .collect()
}

/// Income, expense and balance totals. Decimal sums, so repeated small
/// amounts never drift the way the old floating-point math did.
pub fn summarize<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> MonthlySummary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => income += transaction.amount,
            TransactionType::Expense => expense += transaction.amount,
        }
    }
    MonthlySummary {
        income,
        expense,
        balance: income - expense,
    }
}

/// Expense totals per category, one entry per input category in input
/// order. Zero totals stay in; the chart decides whether to hide them.
pub fn category_breakdown<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    categories: &[String],
) -> Vec<(String, Decimal)> {
    let mut totals = vec![Decimal::ZERO; categories.len()];
    for transaction in transactions {
        if transaction.transaction_type != TransactionType::Expense {
            continue;
        }
        if let Some(idx) = categories.iter().position(|c| *c == transaction.category) {
            totals[idx] += transaction.amount;
        }
    }
    categories.iter().cloned().zip(totals).collect()
}

/// Up to `limit` transactions, newest date first. The sort is stable, so
/// same-day entries keep their original relative order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_transaction(
        id: &str,
        transaction_type: TransactionType,
        amount: Decimal,
        category: &str,
        date: &str,
    ) -> Transaction {
        Transaction::new(
            id.to_string(),
            "A".to_string(),
            transaction_type,
            amount,
            "Test".to_string(),
            category.to_string(),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_summarize_empty_is_all_zero() {
        let transactions: Vec<Transaction> = Vec::new();
        let summary = summarize(&transactions);
        assert_eq!(summary.income, Decimal::ZERO);
        assert_eq!(summary.expense, Decimal::ZERO);
        assert_eq!(summary.balance, Decimal::ZERO);
    }

    #[test]
    fn test_summarize_is_order_independent() {
        let mut transactions = vec![
            create_test_transaction(
                "1",
                TransactionType::Income,
                Decimal::new(200000, 2),
                "Salário",
                "2024-03-01",
            ),
            create_test_transaction(
                "2",
                TransactionType::Expense,
                Decimal::new(7550, 2),
                "Alimentação",
                "2024-03-02",
            ),
            create_test_transaction(
                "3",
                TransactionType::Expense,
                Decimal::new(1999, 2),
                "Lazer",
                "2024-03-03",
            ),
        ];

        let forward = summarize(&transactions);
        transactions.reverse();
        let backward = summarize(&transactions);

        assert_eq!(forward, backward);
        assert_eq!(forward.income, Decimal::new(200000, 2));
        assert_eq!(forward.expense, Decimal::new(9549, 2));
        assert_eq!(forward.balance, Decimal::new(190451, 2));
    }

    #[test]
    fn test_march_groceries_scenario() {
        let transactions = vec![create_test_transaction(
            "1",
            TransactionType::Expense,
            Decimal::new(5000, 2),
            "Alimentação",
            "2024-03-05",
        )];

        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let summary = summarize(filter_by_month(&transactions, march));

        assert_eq!(summary.income, Decimal::ZERO);
        assert_eq!(summary.expense, Decimal::new(5000, 2));
        assert_eq!(summary.balance, Decimal::new(-5000, 2));
    }

    #[test]
    fn test_filter_by_month_checks_year_and_month() {
        let transactions = vec![
            create_test_transaction(
                "1",
                TransactionType::Expense,
                Decimal::ONE,
                "Outros",
                "2024-03-05",
            ),
            create_test_transaction(
                "2",
                TransactionType::Expense,
                Decimal::ONE,
                "Outros",
                "2023-03-05",
            ),
            create_test_transaction(
                "3",
                TransactionType::Expense,
                Decimal::ONE,
                "Outros",
                "2024-04-01",
            ),
            create_test_transaction(
                "4",
                TransactionType::Income,
                Decimal::ONE,
                "Salário",
                "2024-03-31",
            ),
        ];

        let march = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let filtered = filter_by_month(&transactions, march);
        let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_filter_by_month_is_idempotent() {
        let transactions = vec![
            create_test_transaction(
                "1",
                TransactionType::Expense,
                Decimal::ONE,
                "Outros",
                "2024-03-05",
            ),
            create_test_transaction(
                "2",
                TransactionType::Expense,
                Decimal::ONE,
                "Outros",
                "2024-05-05",
            ),
        ];

        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let once: Vec<Transaction> = filter_by_month(&transactions, march)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Transaction> = filter_by_month(&once, march)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_breakdown_keeps_list_order_and_zeros() {
        let categories = vec![
            "Alimentação".to_string(),
            "Transporte".to_string(),
            "Lazer".to_string(),
        ];
        let transactions = vec![
            create_test_transaction(
                "1",
                TransactionType::Expense,
                Decimal::new(3000, 2),
                "Lazer",
                "2024-03-01",
            ),
            create_test_transaction(
                "2",
                TransactionType::Expense,
                Decimal::new(2000, 2),
                "Alimentação",
                "2024-03-02",
            ),
            create_test_transaction(
                "3",
                TransactionType::Expense,
                Decimal::new(1000, 2),
                "Alimentação",
                "2024-03-03",
            ),
        ];

        let breakdown = category_breakdown(&transactions, &categories);
        assert_eq!(
            breakdown,
            vec![
                ("Alimentação".to_string(), Decimal::new(3000, 2)),
                ("Transporte".to_string(), Decimal::ZERO),
                ("Lazer".to_string(), Decimal::new(3000, 2)),
            ]
        );
    }

    #[test]
    fn test_category_breakdown_ignores_income() {
        let categories = vec!["Outros".to_string()];
        let transactions = vec![create_test_transaction(
            "1",
            TransactionType::Income,
            Decimal::new(5000, 2),
            "Outros",
            "2024-03-01",
        )];

        let breakdown = category_breakdown(&transactions, &categories);
        assert_eq!(breakdown, vec![("Outros".to_string(), Decimal::ZERO)]);
    }

    #[test]
    fn test_recent_transactions_caps_at_limit() {
        let transactions: Vec<Transaction> = (1..=15)
            .map(|day| {
                create_test_transaction(
                    &day.to_string(),
                    TransactionType::Expense,
                    Decimal::ONE,
                    "Outros",
                    &format!("2024-03-{:02}", day),
                )
            })
            .collect();

        let recent = recent_transactions(&transactions, DEFAULT_RECENT_LIMIT);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].id, "15");
        assert_eq!(recent[9].id, "6");
    }

    #[test]
    fn test_recent_transactions_stable_on_equal_dates() {
        let transactions = vec![
            create_test_transaction(
                "first",
                TransactionType::Expense,
                Decimal::ONE,
                "Outros",
                "2024-03-05",
            ),
            create_test_transaction(
                "second",
                TransactionType::Expense,
                Decimal::ONE,
                "Outros",
                "2024-03-05",
            ),
            create_test_transaction(
                "older",
                TransactionType::Expense,
                Decimal::ONE,
                "Outros",
                "2024-03-01",
            ),
        ];

        let recent = recent_transactions(&transactions, 10);
        let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "older"]);
    }
}
