use thiserror::Error;

/// Error type covering every business failure the ledger can report.
///
/// None of these are fatal: the shell prints them and keeps running.
#[derive(Debug, Error, PartialEq)]
pub enum BankError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Wrong passcode")]
    WrongPasscode,
    #[error("Passcode must be exactly 4 characters (got {0})")]
    InvalidPasscode(usize),
    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(f64),
    #[error("Not enough balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: f64, available: f64 },
    #[error("Months must be a positive number (got {0})")]
    InvalidMonths(i64),
}

pub type Result<T> = std::result::Result<T, BankError>;
