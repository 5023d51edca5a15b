use std::collections::HashMap;

use crate::errors::{BankError, Result};
use crate::interest;
use crate::ledger::account::{Account, AccountSnapshot, AccountTier};

/// In-memory directory of all active accounts, keyed by holder name.
///
/// The ledger owns its accounts exclusively. It is constructed once and held
/// by the caller; there is no ambient global state.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs and stores an account with the given starting balance.
    ///
    /// A second account under an existing name silently overwrites the
    /// first. The name is an overwritable key, matching the historical
    /// behavior of the simulator.
    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        passcode: impl Into<String>,
        tier: AccountTier,
        starting_balance: f64,
    ) -> &Account {
        let name = name.into();
        let mut account = Account::new(name.clone(), passcode, tier);
        account.set_balance(starting_balance);
        tracing::info!(%name, %tier, starting_balance, "account created");
        self.accounts.insert(name.clone(), account);
        self.accounts.get(&name).expect("entry just inserted")
    }

    /// Lookup by exact name match.
    pub fn find(&self, name: &str) -> Option<&Account> {
        self.accounts.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Account> {
        self.accounts.get_mut(name)
    }

    /// Deletes the named account after validating the passcode.
    ///
    /// On `WrongPasscode` the account is left intact and retrievable.
    pub fn remove(&mut self, name: &str, passcode: &str) -> Result<Account> {
        let account = self
            .accounts
            .get(name)
            .ok_or_else(|| BankError::AccountNotFound(name.to_string()))?;
        if !account.validate_passcode(passcode) {
            return Err(BankError::WrongPasscode);
        }
        tracing::info!(%name, "account removed");
        Ok(self
            .accounts
            .remove(name)
            .expect("entry present after lookup"))
    }

    /// Accounts of the given tier, in unspecified order.
    pub fn list_by_tier(&self, tier: AccountTier) -> Vec<&Account> {
        self.accounts
            .values()
            .filter(|account| account.tier == tier)
            .collect()
    }

    /// Projects interest for the named account over `months`.
    pub fn compute_interest(&self, name: &str, months: i64) -> Result<f64> {
        let account = self
            .find(name)
            .ok_or_else(|| BankError::AccountNotFound(name.to_string()))?;
        interest::projected_interest(account.balance, account.tier, months)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Snapshot of every account, for rendering and serialization.
    pub fn snapshots(&self) -> Vec<AccountSnapshot> {
        self.accounts.values().map(Account::snapshot).collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_find() {
        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "1234", AccountTier::Standard, 1000.0);

        let account = ledger.find("Alice").expect("account exists");
        assert_eq!(account.balance, 1000.0);
        assert!(ledger.find("Bob").is_none());
    }

    #[test]
    fn duplicate_name_overwrites_prior_entry() {
        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "1234", AccountTier::Standard, 1000.0);
        ledger.create_account("Alice", "9999", AccountTier::Vip, 50.0);

        assert_eq!(ledger.len(), 1);
        let account = ledger.find("Alice").expect("account exists");
        assert_eq!(account.tier, AccountTier::Vip);
        assert_eq!(account.balance, 50.0);
        assert!(account.validate_passcode("9999"));
        assert!(!account.validate_passcode("1234"));
    }

    #[test]
    fn remove_requires_matching_passcode() {
        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "1234", AccountTier::Standard, 1000.0);

        let err = ledger.remove("Alice", "0000").expect_err("wrong passcode");
        assert_eq!(err, BankError::WrongPasscode);
        assert_eq!(ledger.find("Alice").expect("still present").balance, 1000.0);

        ledger.remove("Alice", "1234").expect("removal succeeds");
        assert!(ledger.find("Alice").is_none());
    }

    #[test]
    fn remove_missing_account_reports_not_found() {
        let mut ledger = Ledger::new();
        let err = ledger.remove("Ghost", "1234").expect_err("absent");
        assert_eq!(err, BankError::AccountNotFound("Ghost".into()));
    }

    #[test]
    fn list_by_tier_filters() {
        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "1234", AccountTier::Standard, 100.0);
        ledger.create_account("Bob", "5678", AccountTier::Vip, 200.0);
        ledger.create_account("Carol", "4321", AccountTier::Standard, 300.0);

        let standard = ledger.list_by_tier(AccountTier::Standard);
        assert_eq!(standard.len(), 2);
        assert!(standard.iter().all(|a| a.tier == AccountTier::Standard));

        let vip = ledger.list_by_tier(AccountTier::Vip);
        assert_eq!(vip.len(), 1);
        assert_eq!(vip[0].name, "Bob");
    }

    #[test]
    fn compute_interest_for_missing_account_fails() {
        let ledger = Ledger::new();
        let err = ledger.compute_interest("Alice", 12).expect_err("absent");
        assert_eq!(err, BankError::AccountNotFound("Alice".into()));
    }
}
