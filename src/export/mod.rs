//! Serializes transaction data into a downloadable two-sheet bundle.
//!
//! The export mirrors what the dashboard shows: a sheet of line items plus
//! a derived summary (total income, total expenses, net, count, and when
//! the export was made). Each sheet is a standalone CSV document; packaging
//! the sheets into a workbook file is the download endpoint's job.

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    Error,
    account::Account,
    category::Category,
    transaction::{Transaction, TransactionKind},
};

/// A named sheet of the export bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// The sheet name shown to the user, e.g. "Transactions".
    pub name: String,
    /// The sheet contents as a CSV document.
    pub csv: String,
}

/// The two sheets produced by [export_transactions].
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBundle {
    /// One line item per transaction.
    pub transactions: Sheet,
    /// Derived totals for the exported set.
    pub summary: Sheet,
}

/// Serialize `transactions` into a two-sheet export bundle.
///
/// Account and category names are resolved from the provided metadata;
/// uncategorized transactions get an empty category cell. Amounts are
/// written with two decimal places and no sign, with the direction in its
/// own column, matching how transactions are stored.
///
/// # Errors
/// Returns [Error::ExportFailed] if a sheet cannot be serialized.
pub fn export_transactions(
    transactions: &[Transaction],
    accounts: &[Account],
    categories: &[Category],
    exported_at: OffsetDateTime,
) -> Result<ExportBundle, Error> {
    let line_items = write_line_items(transactions, accounts, categories)?;
    let summary = write_summary(transactions, exported_at)?;

    Ok(ExportBundle {
        transactions: Sheet {
            name: "Transactions".to_owned(),
            csv: line_items,
        },
        summary: Sheet {
            name: "Summary".to_owned(),
            csv: summary,
        },
    })
}

fn write_line_items(
    transactions: &[Transaction],
    accounts: &[Account],
    categories: &[Category],
) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "Date",
            "Description",
            "Kind",
            "Amount",
            "Account",
            "Category",
            "Notes",
        ])
        .map_err(|error| Error::ExportFailed(error.to_string()))?;

    for transaction in transactions {
        let account_name = accounts
            .iter()
            .find(|account| account.id == transaction.account_id)
            .map(|account| account.name.as_str())
            .unwrap_or_default();
        let category_name = transaction
            .category_id
            .and_then(|id| categories.iter().find(|category| category.id == id))
            .map(|category| category.name.as_ref())
            .unwrap_or_default();

        let date = transaction.date.to_string();
        let amount = format!("{:.2}", transaction.amount);

        writer
            .write_record([
                date.as_str(),
                transaction.description.as_str(),
                transaction.kind.as_str(),
                amount.as_str(),
                account_name,
                category_name,
                transaction.notes.as_deref().unwrap_or_default(),
            ])
            .map_err(|error| Error::ExportFailed(error.to_string()))?;
    }

    finish_sheet(writer)
}

fn write_summary(
    transactions: &[Transaction],
    exported_at: OffsetDateTime,
) -> Result<String, Error> {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expenses += transaction.amount,
        }
    }

    let timestamp = exported_at
        .format(&Rfc3339)
        .map_err(|error| Error::ExportFailed(error.to_string()))?;

    let mut writer = csv::Writer::from_writer(Vec::new());

    let rows = [
        ("Total Income", format!("{income:.2}")),
        ("Total Expenses", format!("{expenses:.2}")),
        ("Net", format!("{:.2}", income - expenses)),
        ("Transaction Count", transactions.len().to_string()),
        ("Exported At", timestamp),
    ];

    for (label, value) in rows {
        writer
            .write_record([label, value.as_str()])
            .map_err(|error| Error::ExportFailed(error.to_string()))?;
    }

    finish_sheet(writer)
}

fn finish_sheet(writer: csv::Writer<Vec<u8>>) -> Result<String, Error> {
    let bytes = writer
        .into_inner()
        .map_err(|error| Error::ExportFailed(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::ExportFailed(error.to_string()))
}

#[cfg(test)]
mod export_transactions_tests {
    use time::macros::{date, datetime};

    use crate::{
        account::Account,
        category::{Category, CategoryName},
        transaction::{Transaction, TransactionKind},
    };

    use super::export_transactions;

    fn account() -> Account {
        Account {
            id: 1,
            name: "Everyday".to_owned(),
            balance: 0.0,
            currency: "NZD".to_owned(),
            is_active: true,
        }
    }

    fn category() -> Category {
        Category {
            id: 7,
            name: CategoryName::new_unchecked("Groceries"),
            kind: TransactionKind::Expense,
            color: None,
        }
    }

    fn transaction(
        id: i64,
        amount: f64,
        kind: TransactionKind,
        category_id: Option<i64>,
    ) -> Transaction {
        Transaction {
            id,
            date: date!(2024 - 05 - 01),
            description: "test".to_owned(),
            amount,
            kind,
            account_id: 1,
            category_id,
            notes: None,
            import_id: None,
        }
    }

    #[test]
    fn writes_line_items_with_resolved_names() {
        let transactions = vec![
            transaction(1, 42.5, TransactionKind::Expense, Some(7)),
            transaction(2, 1000.0, TransactionKind::Income, None),
        ];

        let bundle = export_transactions(
            &transactions,
            &[account()],
            &[category()],
            datetime!(2024-05-31 12:00:00 UTC),
        )
        .expect("Could not export transactions");

        assert_eq!(bundle.transactions.name, "Transactions");

        let lines: Vec<&str> = bundle.transactions.csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Date,Description,Kind,Amount,Account,Category,Notes"
        );
        assert_eq!(lines[1], "2024-05-01,test,expense,42.50,Everyday,Groceries,");
        assert_eq!(lines[2], "2024-05-01,test,income,1000.00,Everyday,,");
    }

    #[test]
    fn summary_totals_match_the_line_items() {
        let transactions = vec![
            transaction(1, 42.5, TransactionKind::Expense, Some(7)),
            transaction(2, 7.5, TransactionKind::Expense, None),
            transaction(3, 1000.0, TransactionKind::Income, None),
        ];

        let bundle = export_transactions(
            &transactions,
            &[account()],
            &[category()],
            datetime!(2024-05-31 12:00:00 UTC),
        )
        .expect("Could not export transactions");

        assert_eq!(bundle.summary.name, "Summary");

        let lines: Vec<&str> = bundle.summary.csv.lines().collect();
        assert_eq!(lines[0], "Total Income,1000.00");
        assert_eq!(lines[1], "Total Expenses,50.00");
        assert_eq!(lines[2], "Net,950.00");
        assert_eq!(lines[3], "Transaction Count,3");
        assert_eq!(lines[4], "Exported At,2024-05-31T12:00:00Z");
    }

    #[test]
    fn empty_export_has_headers_and_zero_totals() {
        let bundle =
            export_transactions(&[], &[], &[], datetime!(2024-05-31 12:00:00 UTC))
                .expect("Could not export transactions");

        let lines: Vec<&str> = bundle.transactions.csv.lines().collect();
        assert_eq!(
            lines,
            vec!["Date,Description,Kind,Amount,Account,Category,Notes"]
        );

        let summary: Vec<&str> = bundle.summary.csv.lines().collect();
        assert_eq!(summary[0], "Total Income,0.00");
        assert_eq!(summary[1], "Total Expenses,0.00");
        assert_eq!(summary[2], "Net,0.00");
        assert_eq!(summary[3], "Transaction Count,0");
    }
}
