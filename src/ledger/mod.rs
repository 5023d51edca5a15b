//! Ledger domain models: accounts, tiers, and the in-memory directory.

pub mod account;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use account::{Account, AccountSnapshot, AccountTier};
pub use ledger::Ledger;
