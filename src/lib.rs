#![doc(test(attr(deny(warnings))))]

//! Bank Core offers the account, ledger, and interest-projection primitives
//! behind a small console banking simulator, plus the shell that drives them.

pub mod cli;
pub mod config;
pub mod errors;
pub mod interest;
pub mod ledger;
pub mod services;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
