//! Sample bookkeeping session used by the `finance_demo` binary.

use rust_decimal::Decimal;

use crate::core::services::FinanceFactory;
use crate::domain::{BankAccount, OperationKind};
use crate::errors::FinanceResult;
use crate::utils::timed;

pub const DEMO_ACCOUNT: &str = "Main account";

/// Opens the demo account and records two salaries and two expenses.
///
/// Any insufficient-funds rejection is returned to the caller unhandled.
pub fn build_demo_account() -> FinanceResult<BankAccount> {
    let mut account = FinanceFactory::create_bank_account(DEMO_ACCOUNT, Decimal::from(12_000));
    let salary = FinanceFactory::create_category("Salary", OperationKind::Income);
    let food = FinanceFactory::create_category("Food", OperationKind::Expense);
    let housing = FinanceFactory::create_category("Housing", OperationKind::Expense);

    timed("demo operations", || -> FinanceResult<()> {
        let entries = [
            (OperationKind::Income, 30_000, &salary, "Advance"),
            (OperationKind::Income, 30_000, &salary, "Salary"),
            (OperationKind::Expense, 20_000, &food, "Groceries"),
            (OperationKind::Expense, 50_000, &housing, "Mortgage"),
        ];
        for (kind, amount, category, description) in entries {
            FinanceFactory::create_operation(
                kind,
                &mut account,
                Decimal::from(amount),
                category,
                Some(description),
            )?;
        }
        Ok(())
    })?;

    Ok(account)
}
