//! Transaction domain types.
//!
//! This module contains the `Transaction` model, the `TransactionKind`
//! direction enum, and the `TransactionDraft` builder used by the statement
//! normalizer and by manual entry flows.

mod core;

pub use core::{Transaction, TransactionDraft, TransactionId, TransactionKind};
