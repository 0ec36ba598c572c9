//! Finboard is the import and reporting core of a personal finance
//! dashboard.
//!
//! This library turns raw bank-statement spreadsheet rows into normalized
//! transactions, aggregates transaction collections into reporting views
//! (category breakdowns and monthly income/expense series), and exports
//! transaction data as a two-sheet spreadsheet bundle.
//!
//! Persistence, authentication, and presentation are external collaborators:
//! the pipeline consumes the store traits in this crate and returns plain
//! view structs for the caller to render.

#![warn(missing_docs)]

mod account;
mod category;
mod export;
mod format;
mod report;
mod statement;
mod store;
mod timezone;
mod transaction;

pub use account::{Account, AccountId};
pub use category::{Category, CategoryId, CategoryName};
pub use export::{ExportBundle, Sheet, export_transactions};
pub use format::currency;
pub use report::{
    CategoryTotal, DateWindow, MonthlyTotal, UNCATEGORIZED_LABEL, category_breakdown,
    category_breakdown_for_window, monthly_series, monthly_series_ending_at,
};
pub use statement::{CellValue, ImportOutcome, RawRow, decode_csv, import_statement, normalize};
pub use store::{
    AccountStore, CategoryStore, MemoryStore, TransactionQuery, TransactionStore,
};
pub use timezone::get_local_offset;
pub use transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};

/// The errors that may occur in the import and reporting pipeline.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The uploaded data could not be interpreted as tabular data at all.
    ///
    /// Individual malformed rows never produce this error, they are dropped
    /// during normalization. This error means the whole document is
    /// unusable, e.g. it has no header row.
    #[error("could not read the file as a statement: {0}")]
    UnsupportedStatement(String),

    /// A statement import was requested but the target account does not
    /// exist.
    ///
    /// Imports attach every transaction to an account, so the caller must
    /// create an account first. Distinct from [Error::UnsupportedStatement]
    /// so the caller can tell "nothing to import" apart from "parsed fine,
    /// but could not save".
    #[error("no account to import transactions into")]
    NoAccount,

    /// The requested resource was not found in the store.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// An empty string was used to create an account name.
    #[error("account name cannot be empty")]
    EmptyAccountName,

    /// An empty description was used to create a transaction.
    #[error("transaction description cannot be empty")]
    EmptyDescription,

    /// A non-positive amount was used to create a transaction.
    ///
    /// Transaction amounts are magnitudes, direction is carried by
    /// [TransactionKind].
    #[error("{0} is not a valid transaction amount, amounts must be positive")]
    InvalidAmount(f64),

    /// The category ID used to create a transaction did not match a valid
    /// category.
    #[error("the category ID does not refer to a valid category")]
    InvalidCategory(Option<CategoryId>),

    /// The category's kind does not match the transaction's kind, e.g. an
    /// expense filed under an income category.
    #[error("the category kind does not match the transaction kind")]
    CategoryKindMismatch,

    /// A sheet could not be serialized during export.
    #[error("could not serialize the export sheet: {0}")]
    ExportFailed(String),

    /// The backing store failed.
    ///
    /// Store failures are surfaced to the caller verbatim rather than
    /// swallowed, so the UI can tell "nothing to show" apart from "could
    /// not fetch".
    #[error("the store failed: {0}")]
    Store(String),
}
