//! Monthly income/expense series for trailing-month charts.

use serde::Serialize;
use time::Date;

use crate::transaction::{Transaction, TransactionKind};

use super::window::{month_label, trailing_months};

/// One month's totals in a monthly series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// The month label, e.g. "Jan 24".
    pub label: String,
    /// Total income for the month.
    pub income: f64,
    /// Total expenses for the month, as a positive number.
    pub expenses: f64,
    /// `income - expenses`.
    pub net: f64,
}

/// Sum income and expenses per month over the `months` trailing calendar
/// months ending at (and including) the month `anchor` falls in.
///
/// The output always has exactly `months` entries in chronological order,
/// oldest first. Months with no matching transactions appear as all-zero
/// entries rather than being omitted, so the series can be charted against
/// a fixed axis.
///
/// The anchor is explicit rather than read from the wall clock so callers
/// (and tests) control what "the current month" means; resolving today's
/// date is the boundary's job.
pub fn monthly_series(transactions: &[Transaction], months: usize, anchor: Date) -> Vec<MonthlyTotal> {
    trailing_months(anchor, months)
        .into_iter()
        .map(|window| {
            let mut income = 0.0;
            let mut expenses = 0.0;

            for transaction in transactions {
                if !window.contains(transaction.date) {
                    continue;
                }

                match transaction.kind {
                    TransactionKind::Income => income += transaction.amount,
                    TransactionKind::Expense => expenses += transaction.amount,
                }
            }

            MonthlyTotal {
                label: month_label(window.start),
                income,
                expenses,
                net: income - expenses,
            }
        })
        .collect()
}

#[cfg(test)]
mod monthly_series_tests {
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionKind};

    use super::monthly_series;

    fn transaction(amount: f64, kind: TransactionKind, date: time::Date) -> Transaction {
        Transaction {
            id: 0,
            date,
            description: "test".to_owned(),
            amount,
            kind,
            account_id: 1,
            category_id: None,
            notes: None,
            import_id: None,
        }
    }

    #[test]
    fn always_returns_the_requested_number_of_months() {
        let result = monthly_series(&[], 6, date!(2024 - 05 - 15));

        assert_eq!(result.len(), 6);
        assert!(
            result
                .iter()
                .all(|month| month.income == 0.0 && month.expenses == 0.0 && month.net == 0.0)
        );
    }

    #[test]
    fn orders_months_oldest_first_with_labels() {
        let result = monthly_series(&[], 3, date!(2024 - 01 - 15));

        let labels: Vec<&str> = result.iter().map(|month| month.label.as_str()).collect();
        assert_eq!(labels, vec!["Nov 23", "Dec 23", "Jan 24"]);
    }

    #[test]
    fn sums_income_and_expenses_independently() {
        let transactions = vec![
            transaction(1000.0, TransactionKind::Income, date!(2024 - 05 - 01)),
            transaction(250.0, TransactionKind::Expense, date!(2024 - 05 - 12)),
            transaction(100.0, TransactionKind::Expense, date!(2024 - 05 - 31)),
            // Outside the anchor month, lands in the previous bucket.
            transaction(40.0, TransactionKind::Expense, date!(2024 - 04 - 30)),
        ];

        let result = monthly_series(&transactions, 2, date!(2024 - 05 - 15));

        assert_eq!(result.len(), 2);

        assert_eq!(result[0].label, "Apr 24");
        assert_eq!(result[0].income, 0.0);
        assert_eq!(result[0].expenses, 40.0);
        assert_eq!(result[0].net, -40.0);

        assert_eq!(result[1].label, "May 24");
        assert_eq!(result[1].income, 1000.0);
        assert_eq!(result[1].expenses, 350.0);
        assert_eq!(result[1].net, 650.0);
    }

    #[test]
    fn serializes_for_the_presentation_layer() {
        let result = monthly_series(
            &[transaction(100.0, TransactionKind::Income, date!(2024 - 05 - 01))],
            1,
            date!(2024 - 05 - 15),
        );

        let json = serde_json::to_value(&result).expect("Could not serialize series");

        assert_eq!(
            json,
            serde_json::json!([
                {"label": "May 24", "income": 100.0, "expenses": 0.0, "net": 100.0}
            ])
        );
    }

    #[test]
    fn ignores_transactions_outside_the_trailing_window() {
        let transactions = vec![
            transaction(999.0, TransactionKind::Income, date!(2020 - 01 - 01)),
            transaction(999.0, TransactionKind::Income, date!(2030 - 01 - 01)),
        ];

        let result = monthly_series(&transactions, 6, date!(2024 - 05 - 15));

        assert!(result.iter().all(|month| month.income == 0.0));
    }
}
