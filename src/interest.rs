//! Pure interest projection over a balance, tier rate, and month count.

use crate::errors::{BankError, Result};
use crate::ledger::AccountTier;

/// Rounds to two decimal places, ties away from zero on the cents digit.
///
/// The scheme is fixed: multiply by 100, round to the nearest integer,
/// divide by 100. Expected values in the test suites assume exactly this.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Projects interest earned over `months`.
///
/// Standard accounts earn simple interest (`balance * rate * months`); VIP
/// accounts earn compound interest (`balance * ((1 + rate)^months - 1)`).
pub fn projected_interest(balance: f64, tier: AccountTier, months: i64) -> Result<f64> {
    if months <= 0 {
        return Err(BankError::InvalidMonths(months));
    }
    let rate = tier.rate();
    let raw = match tier {
        AccountTier::Standard => balance * rate * months as f64,
        AccountTier::Vip => balance * ((1.0 + rate).powi(months as i32) - 1.0),
    };
    Ok(round_to_cents(raw))
}
