#![doc(test(attr(deny(warnings))))]

//! Finance Core models a bank account with categorized income and expense
//! operations, enforces the sufficient-funds rule when recording expenses, and
//! computes simple analytics over the operation log.
//!
//! ```
//! use finance_core::core::services::{FinanceAnalytics, FinanceFactory};
//! use finance_core::domain::OperationKind;
//! use rust_decimal::Decimal;
//!
//! let mut account = FinanceFactory::create_bank_account("Wallet", Decimal::from(100));
//! let food = FinanceFactory::create_category("Food", OperationKind::Expense);
//! FinanceFactory::create_operation(
//!     OperationKind::Expense,
//!     &mut account,
//!     Decimal::from(30),
//!     &food,
//!     Some("Lunch"),
//! )?;
//! assert_eq!(account.balance(), Decimal::from(70));
//! assert_eq!(FinanceAnalytics::grouped_expenses(&account)["Food"], Decimal::from(30));
//! # Ok::<(), finance_core::errors::FinanceError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!(build = ?utils::build_info::current(), "Finance Core tracing initialized.");
    });
}
