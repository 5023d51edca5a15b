use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account classification. The tier fixes both the interest formula and the
/// rate; it cannot change after creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountTier {
    Standard,
    Vip,
}

impl AccountTier {
    /// Monthly interest rate attached to the tier. Not per-instance.
    pub fn rate(self) -> f64 {
        match self {
            AccountTier::Standard => 0.003,
            AccountTier::Vip => 0.008,
        }
    }
}

impl fmt::Display for AccountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountTier::Standard => write!(f, "Standard"),
            AccountTier::Vip => write!(f, "VIP"),
        }
    }
}

impl FromStr for AccountTier {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(AccountTier::Standard),
            "vip" => Ok(AccountTier::Vip),
            other => Err(format!("unknown account tier `{}`", other)),
        }
    }
}

/// A single bank account: identity, passcode, and a running balance.
///
/// The balance is a plain signed amount. `deposit` and `withdraw` apply no
/// bounds of their own; validated entry points live in
/// [`crate::services::TellerService`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    passcode: String,
    pub balance: f64,
    pub tier: AccountTier,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with a zero balance.
    ///
    /// Passcode length is a caller precondition, checked at the service
    /// layer rather than here.
    pub fn new(name: impl Into<String>, passcode: impl Into<String>, tier: AccountTier) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            passcode: passcode.into(),
            balance: 0.0,
            tier,
            created_at: Utc::now(),
        }
    }

    /// Overwrites the balance unconditionally. Used when seeding the
    /// starting balance at creation time.
    pub fn set_balance(&mut self, amount: f64) {
        self.balance = amount;
    }

    /// Adds the amount to the balance. The caller rejects negative amounts
    /// before getting here.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Subtracts the amount from the balance. The caller checks
    /// `balance >= amount` first; calling this directly can drive the
    /// balance negative.
    pub fn withdraw(&mut self, amount: f64) {
        self.balance -= amount;
    }

    /// Exact string comparison against the stored passcode.
    pub fn validate_passcode(&self, candidate: &str) -> bool {
        self.passcode == candidate
    }

    /// The fixed per-tier interest rate.
    pub fn rate(&self) -> f64 {
        self.tier.rate()
    }

    /// Pure data view for display and serialization. Never carries the
    /// passcode.
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id,
            name: self.name.clone(),
            tier: self.tier,
            balance: self.balance,
            created_at: self.created_at,
        }
    }
}

/// Serializable account view handed to the CLI for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSnapshot {
    pub id: Uuid,
    pub name: String,
    pub tier: AccountTier,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_starts_at_zero() {
        let account = Account::new("Alice", "1234", AccountTier::Standard);
        assert_eq!(account.balance, 0.0);
        assert_eq!(account.tier, AccountTier::Standard);
    }

    #[test]
    fn deposit_then_withdraw_round_trips() {
        let mut account = Account::new("Alice", "1234", AccountTier::Standard);
        account.set_balance(1000.0);
        account.deposit(250.5);
        account.withdraw(250.5);
        assert_eq!(account.balance, 1000.0);
    }

    #[test]
    fn passcode_comparison_is_exact() {
        let account = Account::new("Alice", "1234", AccountTier::Vip);
        assert!(account.validate_passcode("1234"));
        assert!(!account.validate_passcode("1234 "));
        assert!(!account.validate_passcode("12345"));
        assert!(!account.validate_passcode("abcd"));
    }

    #[test]
    fn tier_rates_are_fixed() {
        assert_eq!(AccountTier::Standard.rate(), 0.003);
        assert_eq!(AccountTier::Vip.rate(), 0.008);
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("VIP".parse::<AccountTier>().unwrap(), AccountTier::Vip);
        assert_eq!(
            "Standard".parse::<AccountTier>().unwrap(),
            AccountTier::Standard
        );
        assert!("gold".parse::<AccountTier>().is_err());
    }

    #[test]
    fn snapshot_omits_passcode() {
        let account = Account::new("Alice", "1234", AccountTier::Standard);
        let json = serde_json::to_string(&account.snapshot()).unwrap();
        assert!(!json.contains("passcode"));
        assert!(json.contains("Alice"));
    }
}
