//! Defines the core data model for accounts.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for an account.
pub type AccountId = i64;

/// A bank account or credit card that transactions are recorded against.
///
/// The balance is an authoritative running total maintained by the store as
/// transactions are inserted. The reporting code never recomputes it from
/// transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The ID of the account.
    pub id: AccountId,
    /// The display name of the account.
    pub name: String,
    /// The current balance. Negative for accounts in the red.
    pub balance: f64,
    /// ISO 4217 currency code, e.g. "NZD".
    pub currency: String,
    /// Whether the account is still in use. Inactive accounts keep their
    /// transaction history but are hidden from entry forms.
    pub is_active: bool,
}
