//! An in-memory store used by the test suite and the CLI preview tool.

use crate::{
    Error,
    account::{Account, AccountId},
    category::{Category, CategoryId, CategoryName},
    transaction::{Transaction, TransactionDraft, TransactionKind},
};

use super::{AccountStore, CategoryStore, TransactionQuery, TransactionStore};

/// An in-process implementation of the store traits.
///
/// Behaves like the real backing store from the pipeline's point of view:
/// it assigns IDs, validates drafts, maintains account balances as
/// transactions are inserted, and skips duplicate import IDs on bulk
/// import. Nothing is persisted anywhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    accounts: Vec<Account>,
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn validate_category(
        &self,
        category_id: Option<CategoryId>,
        kind: TransactionKind,
    ) -> Result<(), Error> {
        let Some(category_id) = category_id else {
            return Ok(());
        };

        let category = self
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .ok_or(Error::InvalidCategory(Some(category_id)))?;

        if category.kind != kind {
            return Err(Error::CategoryKindMismatch);
        }

        Ok(())
    }

    fn has_import_id(&self, import_id: i64) -> bool {
        self.transactions
            .iter()
            .any(|transaction| transaction.import_id == Some(import_id))
    }
}

impl TransactionStore for MemoryStore {
    fn insert(
        &mut self,
        account_id: AccountId,
        draft: TransactionDraft,
    ) -> Result<Transaction, Error> {
        let description = draft.description.trim().to_owned();

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        if !(draft.amount.is_finite() && draft.amount > 0.0) {
            return Err(Error::InvalidAmount(draft.amount));
        }

        self.validate_category(draft.category_id, draft.kind)?;

        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.id == account_id)
            .ok_or(Error::NotFound)?;

        match draft.kind {
            TransactionKind::Income => account.balance += draft.amount,
            TransactionKind::Expense => account.balance -= draft.amount,
        }

        let transaction = Transaction {
            id: self.transactions.len() as i64 + 1,
            date: draft.date,
            description,
            amount: draft.amount,
            kind: draft.kind,
            account_id,
            category_id: draft.category_id,
            notes: draft.notes,
            import_id: draft.import_id,
        };

        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn import(
        &mut self,
        account_id: AccountId,
        drafts: Vec<TransactionDraft>,
    ) -> Result<Vec<Transaction>, Error> {
        let mut imported = Vec::new();

        for draft in drafts {
            if let Some(import_id) = draft.import_id
                && self.has_import_id(import_id)
            {
                tracing::debug!("skipping duplicate import ID {import_id}");
                continue;
            }

            imported.push(self.insert(account_id, draft)?);
        }

        Ok(imported)
    }

    fn query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let transactions = self
            .transactions
            .iter()
            .filter(|transaction| {
                query
                    .date_range
                    .as_ref()
                    .is_none_or(|range| range.contains(&transaction.date))
            })
            .filter(|transaction| query.kind.is_none_or(|kind| transaction.kind == kind))
            .filter(|transaction| {
                query
                    .account_id
                    .is_none_or(|account_id| transaction.account_id == account_id)
            })
            .cloned()
            .collect();

        Ok(transactions)
    }
}

impl AccountStore for MemoryStore {
    fn create_account(&mut self, name: &str, currency: &str) -> Result<Account, Error> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::EmptyAccountName);
        }

        let account = Account {
            id: self.accounts.len() as i64 + 1,
            name: name.to_owned(),
            balance: 0.0,
            currency: currency.to_owned(),
            is_active: true,
        };

        self.accounts.push(account.clone());

        Ok(account)
    }

    fn get_account(&self, id: AccountId) -> Result<Account, Error> {
        self.accounts
            .iter()
            .find(|account| account.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_accounts(&self) -> Result<Vec<Account>, Error> {
        Ok(self.accounts.clone())
    }
}

impl CategoryStore for MemoryStore {
    fn create_category(
        &mut self,
        name: CategoryName,
        kind: TransactionKind,
        color: Option<String>,
    ) -> Result<Category, Error> {
        let category = Category {
            id: self.categories.len() as i64 + 1,
            name,
            kind,
            color,
        };

        self.categories.push(category.clone());

        Ok(category)
    }

    fn get_category(&self, id: CategoryId) -> Result<Category, Error> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_categories(&self) -> Result<Vec<Category>, Error> {
        Ok(self.categories.clone())
    }
}
