//! Read-only aggregate queries over an account's operation log.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Amounted, BankAccount, Identifiable, NamedEntity, Operation, OperationKind};

/// Stateless analytics over [`BankAccount`] logs.
pub struct FinanceAnalytics;

impl FinanceAnalytics {
    /// Sum of income amounts minus sum of expense amounts over the whole log.
    pub fn income_expense_difference(account: &BankAccount) -> Decimal {
        account.operations().iter().map(Operation::signed_amount).sum()
    }

    pub fn total_income(account: &BankAccount) -> Decimal {
        Self::total_of(account, OperationKind::Income)
    }

    pub fn total_expenses(account: &BankAccount) -> Decimal {
        Self::total_of(account, OperationKind::Expense)
    }

    /// Expense totals keyed by category name. Categories sharing a name are
    /// merged into one entry; income operations never appear.
    pub fn grouped_expenses(account: &BankAccount) -> HashMap<String, Decimal> {
        let mut groups: HashMap<String, Decimal> = HashMap::new();
        for operation in Self::of_kind(account, OperationKind::Expense) {
            *groups
                .entry(operation.category().name().to_string())
                .or_default() += operation.amount();
        }
        groups
    }

    /// Bundles the account state and both aggregates for reporting.
    pub fn summarize(account: &BankAccount) -> AccountSummary {
        AccountSummary {
            account_id: account.id(),
            name: account.name().to_string(),
            opening_balance: account.opening_balance(),
            balance: account.balance(),
            total_income: Self::total_income(account),
            total_expenses: Self::total_expenses(account),
            difference: Self::income_expense_difference(account),
            grouped_expenses: Self::grouped_expenses(account).into_iter().collect(),
        }
    }

    fn total_of(account: &BankAccount, kind: OperationKind) -> Decimal {
        Self::of_kind(account, kind).map(Amounted::amount).sum()
    }

    fn of_kind(account: &BankAccount, kind: OperationKind) -> impl Iterator<Item = &Operation> {
        account
            .operations()
            .iter()
            .filter(move |operation| operation.kind() == kind)
    }
}

/// Snapshot of an account's figures, ordered by category name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSummary {
    pub account_id: Uuid,
    pub name: String,
    pub opening_balance: Decimal,
    pub balance: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub difference: Decimal,
    pub grouped_expenses: BTreeMap<String, Decimal>,
}
