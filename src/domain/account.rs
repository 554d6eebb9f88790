use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::*, operation::Operation};

/// A named account holding a running balance and its full operation log.
///
/// The stored balance is a cache of `opening_balance` plus the signed sum of
/// the log. [`BankAccount::add_operation`] keeps it in sync and
/// [`BankAccount::recalculate_balance`] rebuilds it from the log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankAccount {
    id: Uuid,
    name: String,
    opening_balance: Decimal,
    balance: Decimal,
    #[serde(default)]
    operations: Vec<Operation>,
}

impl BankAccount {
    /// Creates an account with an empty log. The opening balance may be negative.
    pub fn new(name: impl Into<String>, initial_balance: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            opening_balance: initial_balance,
            balance: initial_balance,
            operations: Vec::new(),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    /// Operations in the order they were recorded.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Adds a signed amount to the balance.
    pub fn update_balance(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Appends the operation to the log and applies it to the balance.
    ///
    /// No validation happens here; callers are expected to go through
    /// [`crate::core::services::FinanceFactory`].
    pub fn add_operation(&mut self, operation: Operation) {
        let delta = operation.signed_amount();
        self.operations.push(operation);
        self.update_balance(delta);
    }

    /// Rebuilds the balance from the opening balance and the log, discarding
    /// the stored value. Returns the recomputed balance.
    pub fn recalculate_balance(&mut self) -> Decimal {
        let recomputed = self.opening_balance
            + self
                .operations
                .iter()
                .map(Operation::signed_amount)
                .sum::<Decimal>();
        if recomputed != self.balance {
            tracing::warn!(
                account = %self.id,
                stored = %self.balance,
                recomputed = %recomputed,
                "account balance drifted from operation log"
            );
        }
        self.balance = recomputed;
        recomputed
    }
}

impl Identifiable for BankAccount {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for BankAccount {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for BankAccount {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use rust_decimal_macros::dec;

    fn operation(account: &BankAccount, kind: OperationKind, amount: Decimal) -> Operation {
        let category = Category::new("Misc", kind);
        Operation::new(kind, account.id(), amount, &category)
    }

    #[test]
    fn new_account_has_empty_log() {
        let account = BankAccount::new("Overdrawn", dec!(-50));
        assert_eq!(account.balance(), dec!(-50));
        assert_eq!(account.opening_balance(), dec!(-50));
        assert_eq!(account.operation_count(), 0);
    }

    #[test]
    fn add_operation_applies_sign_by_kind() {
        let mut account = BankAccount::new("Main", dec!(100));
        let income = operation(&account, OperationKind::Income, dec!(40));
        let expense = operation(&account, OperationKind::Expense, dec!(15.5));
        account.add_operation(income);
        account.add_operation(expense);
        assert_eq!(account.balance(), dec!(124.5));
        assert_eq!(account.operation_count(), 2);
        assert_eq!(account.operations()[0].kind(), OperationKind::Income);
    }

    #[test]
    fn recalculate_repairs_tampered_balance() {
        let mut account = BankAccount::new("Main", dec!(10));
        let income = operation(&account, OperationKind::Income, dec!(5));
        account.add_operation(income);
        account.update_balance(dec!(1000));
        assert_eq!(account.balance(), dec!(1015));

        assert_eq!(account.recalculate_balance(), dec!(15));
        assert_eq!(account.balance(), dec!(15));
        assert_eq!(account.recalculate_balance(), dec!(15));
    }
}
