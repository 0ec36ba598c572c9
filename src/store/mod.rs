//! Traits for the external stores the pipeline reads and writes.
//!
//! Persistence is an external collaborator: the surrounding application
//! owns the durable store (and its per-user access control) and hands this
//! crate implementations of these traits. [MemoryStore] is the in-process
//! reference implementation used by the test suite and the CLI preview
//! tool.

mod memory;

use std::ops::RangeInclusive;

use time::Date;

use crate::{
    Error,
    account::{Account, AccountId},
    category::{Category, CategoryId, CategoryName},
    transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind},
};

pub use memory::MemoryStore;

/// Handles the creation and retrieval of transactions.
pub trait TransactionStore {
    /// Create a new transaction from a draft, attached to the account
    /// `account_id`.
    ///
    /// Implementers validate the draft (positive amount, non-empty
    /// description, valid category of a matching kind) and maintain the
    /// account's running balance.
    fn insert(&mut self, account_id: AccountId, draft: TransactionDraft)
    -> Result<Transaction, Error>;

    /// Create many transactions from statement drafts.
    ///
    /// Implementers skip drafts whose import ID already exists in the
    /// store, so that overlapping statement exports can be imported safely.
    /// Returns the transactions that were actually created.
    fn import(
        &mut self,
        account_id: AccountId,
        drafts: Vec<TransactionDraft>,
    ) -> Result<Vec<Transaction>, Error>;

    /// Retrieve transactions in the way defined by `query`.
    fn query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error>;

    /// Retrieve a transaction by its ID.
    fn get_transaction(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.query(TransactionQuery::default())?
            .into_iter()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)
    }
}

/// Defines which transactions [TransactionStore::query] should fetch.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Include only transactions within `date_range` (inclusive).
    pub date_range: Option<RangeInclusive<Date>>,
    /// Include only transactions of this kind.
    pub kind: Option<TransactionKind>,
    /// Include only transactions belonging to this account.
    pub account_id: Option<AccountId>,
}

/// Handles the creation and retrieval of accounts.
pub trait AccountStore {
    /// Create a new account with a zero balance.
    ///
    /// # Errors
    /// Returns [Error::EmptyAccountName] if `name` is empty after trimming.
    fn create_account(&mut self, name: &str, currency: &str) -> Result<Account, Error>;

    /// Retrieve an account by its ID.
    fn get_account(&self, id: AccountId) -> Result<Account, Error>;

    /// Retrieve all accounts.
    fn get_accounts(&self) -> Result<Vec<Account>, Error>;
}

/// Handles the creation and retrieval of transaction categories.
pub trait CategoryStore {
    /// Create a new category for transactions of `kind`.
    fn create_category(
        &mut self,
        name: CategoryName,
        kind: TransactionKind,
        color: Option<String>,
    ) -> Result<Category, Error>;

    /// Retrieve a category by its ID.
    fn get_category(&self, id: CategoryId) -> Result<Category, Error>;

    /// Retrieve all categories.
    fn get_categories(&self) -> Result<Vec<Category>, Error>;
}
