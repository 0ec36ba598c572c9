//! The statement import workflow: decode, normalize, persist.

use crate::{
    Error,
    account::AccountId,
    store::{AccountStore, TransactionStore},
    transaction::Transaction,
};

use super::{decode::decode_csv, normalize::normalize};

/// What happened during a statement import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    /// The transactions that were created, in statement order.
    pub imported: Vec<Transaction>,
    /// Rows that were dropped during normalization (missing columns,
    /// unparseable dates, non-positive amounts).
    pub skipped_rows: usize,
    /// Drafts that were skipped because a transaction with the same import
    /// ID already exists in the store.
    pub duplicates: usize,
}

/// Import a bank statement into `store`, attaching every transaction to the
/// account `account_id`.
///
/// The workflow refuses to start without a valid target account, so the
/// caller can distinguish "nothing to import" (a parse failure) from
/// "parsed fine, but could not save" (a store failure).
///
/// # Errors
/// This function will return a:
/// - [Error::NoAccount] if `account_id` does not refer to an account in the
///   store,
/// - or [Error::UnsupportedStatement] if the data cannot be interpreted as
///   tabular data at all,
/// - or any error from the store, propagated verbatim.
pub fn import_statement<S>(
    data: &[u8],
    account_id: AccountId,
    store: &mut S,
) -> Result<ImportOutcome, Error>
where
    S: TransactionStore + AccountStore,
{
    store.get_account(account_id).map_err(|error| match error {
        Error::NotFound => Error::NoAccount,
        error => error,
    })?;

    let rows = decode_csv(data)?;
    let row_count = rows.len();

    let drafts = normalize(&rows);
    let skipped_rows = row_count - drafts.len();
    let draft_count = drafts.len();

    let imported = store.import(account_id, drafts)?;
    let duplicates = draft_count - imported.len();

    tracing::debug!(
        "imported {} of {row_count} statement rows ({skipped_rows} dropped, {duplicates} duplicates)",
        imported.len(),
    );

    Ok(ImportOutcome {
        imported,
        skipped_rows,
        duplicates,
    })
}
