//! Account domain types.

mod core;

pub use core::{Account, AccountId};
