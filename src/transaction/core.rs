//! Defines the core data model for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{account::AccountId, category::CategoryId};

/// Store-assigned identifier for a transaction.
pub type TransactionId = i64;

/// The direction of a transaction: money earned or money spent.
///
/// Amounts are stored as positive magnitudes, so the kind is the only place
/// a transaction's direction lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money flowing into an account, e.g. salary or interest.
    Income,
    /// Money flowing out of an account, e.g. groceries or rent.
    Expense,
}

impl TransactionKind {
    /// The lowercase label used in exports and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// To create a new `Transaction`, build a [TransactionDraft] with
/// [Transaction::draft] and insert it through a
/// [TransactionStore](crate::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned, always positive.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// The ID of the account the transaction belongs to.
    pub account_id: AccountId,
    /// The ID of the category the transaction is filed under, if any.
    pub category_id: Option<CategoryId>,
    /// Optional free-text notes. Statement imports record their provenance
    /// here.
    pub notes: Option<String>,
    /// Content hash for imported transactions, used to skip duplicates when
    /// the same statement export is imported twice.
    pub import_id: Option<i64>,
}

impl Transaction {
    /// Start a draft for a new transaction.
    ///
    /// Shortcut for [TransactionDraft::new] for discoverability.
    pub fn draft(
        date: Date,
        description: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> TransactionDraft {
        TransactionDraft::new(date, description, amount, kind)
    }
}

/// A transaction that has not been persisted yet.
///
/// Drafts are produced by the statement normalizer and by manual entry
/// forms. The owning account is supplied at insert time by the caller, so a
/// draft carries everything *except* the store-assigned ID and the account.
///
/// Validation (positive amount, non-empty description) happens when the
/// draft is inserted into a store, mirroring where the database would
/// enforce its constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned, as a positive magnitude.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// The category to file the transaction under. Imported transactions
    /// start uncategorized.
    pub category_id: Option<CategoryId>,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Content hash for imported transactions.
    ///
    /// `Some` for drafts produced by the normalizer, `None` for manual
    /// entries. Stores skip drafts whose import ID already exists so that
    /// overlapping statement exports can be imported safely.
    pub import_id: Option<i64>,
}

impl TransactionDraft {
    /// Create a draft with no category, notes, or import ID.
    pub fn new(date: Date, description: &str, amount: f64, kind: TransactionKind) -> Self {
        Self {
            date,
            description: description.to_owned(),
            amount,
            kind,
            category_id: None,
            notes: None,
            import_id: None,
        }
    }

    /// Set the category for the transaction.
    pub fn category_id(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Set the notes for the transaction.
    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_owned());
        self
    }

    /// Set the import ID for the transaction.
    pub fn import_id(mut self, import_id: Option<i64>) -> Self {
        self.import_id = import_id;
        self
    }
}
