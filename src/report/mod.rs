//! Reporting aggregations over transaction collections.
//!
//! Provides the dashboard's derived views: expense totals grouped by
//! category and trailing monthly income/expense series. The projections are
//! pure functions over in-memory slices; the store-backed entry points here
//! fetch the needed window of transactions first and propagate fetch errors
//! verbatim.

mod breakdown;
mod series;
mod window;

pub use breakdown::{CategoryTotal, UNCATEGORIZED_LABEL, category_breakdown};
pub use series::{MonthlyTotal, monthly_series};
pub use window::DateWindow;

use time::Date;

use crate::{
    Error,
    category::Category,
    store::{TransactionQuery, TransactionStore},
    transaction::TransactionKind,
};

use window::trailing_months;

/// Fetch the expenses within `window` from `store` and build a category
/// breakdown.
///
/// # Errors
/// Propagates any error from the store's transaction fetch verbatim; the
/// aggregation itself cannot fail, and an empty window yields an empty
/// breakdown.
pub fn category_breakdown_for_window(
    store: &impl TransactionStore,
    categories: &[Category],
    window: DateWindow,
) -> Result<Vec<CategoryTotal>, Error> {
    let transactions = store.query(TransactionQuery {
        date_range: Some(window.start..=window.end),
        kind: Some(TransactionKind::Expense),
        ..Default::default()
    })?;

    Ok(category_breakdown(&transactions, categories, window))
}

/// Fetch the transactions for the `months` trailing months ending at
/// `anchor` from `store` and build a monthly series.
///
/// # Errors
/// Propagates any error from the store's transaction fetch verbatim; sparse
/// or missing data yields zero-filled entries, never an error.
pub fn monthly_series_ending_at(
    store: &impl TransactionStore,
    months: usize,
    anchor: Date,
) -> Result<Vec<MonthlyTotal>, Error> {
    let windows = trailing_months(anchor, months);

    let (Some(first), Some(last)) = (windows.first(), windows.last()) else {
        return Ok(Vec::new());
    };

    let transactions = store.query(TransactionQuery {
        date_range: Some(first.start..=last.end),
        ..Default::default()
    })?;

    Ok(monthly_series(&transactions, months, anchor))
}

#[cfg(test)]
mod store_backed_report_tests {
    use time::macros::date;

    use crate::{
        Error,
        store::{AccountStore, MemoryStore, TransactionQuery, TransactionStore},
        transaction::{Transaction, TransactionDraft, TransactionKind},
    };

    use super::{DateWindow, category_breakdown_for_window, monthly_series_ending_at};

    struct FailingStore;

    impl TransactionStore for FailingStore {
        fn insert(
            &mut self,
            _account_id: i64,
            _draft: TransactionDraft,
        ) -> Result<Transaction, Error> {
            Err(Error::Store("connection lost".to_owned()))
        }

        fn import(
            &mut self,
            _account_id: i64,
            _drafts: Vec<TransactionDraft>,
        ) -> Result<Vec<Transaction>, Error> {
            Err(Error::Store("connection lost".to_owned()))
        }

        fn query(&self, _query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
            Err(Error::Store("connection lost".to_owned()))
        }
    }

    #[test]
    fn breakdown_propagates_store_failure() {
        let window = DateWindow::new(date!(2024 - 05 - 01), date!(2024 - 05 - 31));

        let result = category_breakdown_for_window(&FailingStore, &[], window);

        assert_eq!(result, Err(Error::Store("connection lost".to_owned())));
    }

    #[test]
    fn series_propagates_store_failure() {
        let result = monthly_series_ending_at(&FailingStore, 6, date!(2024 - 05 - 15));

        assert_eq!(result, Err(Error::Store("connection lost".to_owned())));
    }

    #[test]
    fn series_with_zero_months_is_empty_without_a_fetch() {
        // No window to fetch, so even a failing store cannot object.
        let result = monthly_series_ending_at(&FailingStore, 0, date!(2024 - 05 - 15));

        assert_eq!(result, Ok(Vec::new()));
    }

    #[test]
    fn breakdown_reads_through_the_store() {
        let mut store = MemoryStore::new();
        let account = store
            .create_account("Everyday", "NZD")
            .expect("Could not create account");
        store
            .insert(
                account.id,
                TransactionDraft::new(
                    date!(2024 - 05 - 10),
                    "Groceries",
                    42.0,
                    TransactionKind::Expense,
                ),
            )
            .expect("Could not insert transaction");

        let window = DateWindow::new(date!(2024 - 05 - 01), date!(2024 - 05 - 31));
        let result = category_breakdown_for_window(&store, &[], window)
            .expect("Could not build breakdown");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total, 42.0);
    }
}
