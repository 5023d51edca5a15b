//! Validated entry points over the raw [`Ledger`] mutations.

use crate::errors::{BankError, Result};
use crate::ledger::{AccountSnapshot, AccountTier, Ledger};

const PASSCODE_LENGTH: usize = 4;

/// Provides validated, passcode-gated operations over a [`Ledger`].
///
/// `Account::deposit` and `Account::withdraw` themselves apply no bounds;
/// every precondition (negative amounts, balance cover, passcode length and
/// match) is checked here before any state changes.
pub struct TellerService;

impl TellerService {
    /// Opens an account after validating the passcode length.
    ///
    /// Opening under an existing name silently replaces the prior account.
    pub fn open_account(
        ledger: &mut Ledger,
        name: &str,
        passcode: &str,
        tier: AccountTier,
        starting_balance: f64,
    ) -> Result<AccountSnapshot> {
        if passcode.chars().count() != PASSCODE_LENGTH {
            return Err(BankError::InvalidPasscode(passcode.chars().count()));
        }
        let account = ledger.create_account(name, passcode, tier, starting_balance);
        Ok(account.snapshot())
    }

    /// Deposits into the named account, rejecting negative amounts. Returns
    /// the new balance.
    pub fn deposit(ledger: &mut Ledger, name: &str, amount: f64) -> Result<f64> {
        if amount < 0.0 {
            return Err(BankError::NegativeAmount(amount));
        }
        let account = ledger
            .find_mut(name)
            .ok_or_else(|| BankError::AccountNotFound(name.to_string()))?;
        account.deposit(amount);
        tracing::info!(%name, amount, balance = account.balance, "deposit");
        Ok(account.balance)
    }

    /// Withdraws from the named account. Passcode-gated; the balance must
    /// cover the amount. Returns the new balance.
    ///
    /// On any error the balance is left unchanged.
    pub fn withdraw(ledger: &mut Ledger, name: &str, passcode: &str, amount: f64) -> Result<f64> {
        let account = ledger
            .find_mut(name)
            .ok_or_else(|| BankError::AccountNotFound(name.to_string()))?;
        if !account.validate_passcode(passcode) {
            return Err(BankError::WrongPasscode);
        }
        if account.balance < amount {
            return Err(BankError::InsufficientBalance {
                requested: amount,
                available: account.balance,
            });
        }
        account.withdraw(amount);
        tracing::info!(%name, amount, balance = account.balance, "withdrawal");
        Ok(account.balance)
    }

    /// Removes the named account after passcode validation.
    pub fn close_account(ledger: &mut Ledger, name: &str, passcode: &str) -> Result<()> {
        ledger.remove(name, passcode).map(|_| ())
    }

    /// Projects interest for the named account over `months`.
    pub fn project_interest(ledger: &Ledger, name: &str, months: i64) -> Result<f64> {
        ledger.compute_interest(name, months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with_alice() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "1234", AccountTier::Standard, 1000.0);
        ledger
    }

    #[test]
    fn open_account_rejects_short_passcode() {
        let mut ledger = Ledger::new();
        let err = TellerService::open_account(&mut ledger, "Alice", "123", AccountTier::Vip, 0.0)
            .expect_err("short passcode must fail");
        assert_eq!(err, BankError::InvalidPasscode(3));
        assert!(ledger.is_empty());
    }

    #[test]
    fn open_account_seeds_starting_balance() {
        let mut ledger = Ledger::new();
        let snapshot =
            TellerService::open_account(&mut ledger, "Bob", "5678", AccountTier::Vip, 250.0)
                .expect("open succeeds");
        assert_eq!(snapshot.balance, 250.0);
        assert_eq!(snapshot.tier, AccountTier::Vip);
    }

    #[test]
    fn deposit_rejects_negative_amounts() {
        let mut ledger = ledger_with_alice();
        let err = TellerService::deposit(&mut ledger, "Alice", -5.0).expect_err("negative");
        assert_eq!(err, BankError::NegativeAmount(-5.0));
        assert_eq!(ledger.find("Alice").unwrap().balance, 1000.0);
    }

    #[test]
    fn withdraw_needs_passcode_and_cover() {
        let mut ledger = ledger_with_alice();
        TellerService::deposit(&mut ledger, "Alice", 50.0).expect("deposit succeeds");

        let err = TellerService::withdraw(&mut ledger, "Alice", "1234", 1200.0)
            .expect_err("overdraft must fail");
        assert_eq!(
            err,
            BankError::InsufficientBalance {
                requested: 1200.0,
                available: 1050.0,
            }
        );
        assert_eq!(ledger.find("Alice").unwrap().balance, 1050.0);

        let err = TellerService::withdraw(&mut ledger, "Alice", "0000", 10.0)
            .expect_err("wrong passcode must fail");
        assert_eq!(err, BankError::WrongPasscode);
        assert_eq!(ledger.find("Alice").unwrap().balance, 1050.0);

        let balance =
            TellerService::withdraw(&mut ledger, "Alice", "1234", 1050.0).expect("withdrawal");
        assert_eq!(balance, 0.0);
    }

    #[test]
    fn withdraw_missing_account_reports_not_found() {
        let mut ledger = Ledger::new();
        let err =
            TellerService::withdraw(&mut ledger, "Ghost", "1234", 1.0).expect_err("absent");
        assert_eq!(err, BankError::AccountNotFound("Ghost".into()));
    }

    #[test]
    fn project_interest_follows_tier() {
        let ledger = ledger_with_alice();
        assert_eq!(
            TellerService::project_interest(&ledger, "Alice", 12).unwrap(),
            36.0
        );
        assert_eq!(
            TellerService::project_interest(&ledger, "Alice", 0).unwrap_err(),
            BankError::InvalidMonths(0)
        );
    }
}
