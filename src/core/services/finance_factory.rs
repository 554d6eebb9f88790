//! Construction and validation of accounts, categories and operations.

use rust_decimal::Decimal;

use crate::domain::{BankAccount, Category, Identifiable, NamedEntity, Operation, OperationKind};
use crate::errors::{FinanceError, FinanceResult};

/// Creates bookkeeping entities and enforces the sufficient-funds rule.
pub struct FinanceFactory;

impl FinanceFactory {
    pub fn create_bank_account(name: impl Into<String>, initial_balance: Decimal) -> BankAccount {
        let account = BankAccount::new(name, initial_balance);
        tracing::debug!(
            account = %account.id(),
            name = account.name(),
            balance = %initial_balance,
            "created bank account"
        );
        account
    }

    pub fn create_category(name: impl Into<String>, kind: OperationKind) -> Category {
        let category = Category::new(name, kind);
        tracing::debug!(category = %category.id(), name = category.name(), %kind, "created category");
        category
    }

    /// Records a new operation against `account` and returns a copy of it.
    ///
    /// Expenses are rejected with [`FinanceError::InsufficientFunds`] when the
    /// live balance is strictly lower than `amount`; on rejection neither the
    /// balance nor the log changes. An empty description is the default.
    pub fn create_operation(
        kind: OperationKind,
        account: &mut BankAccount,
        amount: Decimal,
        category: &Category,
        description: Option<&str>,
    ) -> FinanceResult<Operation> {
        if kind.is_expense() && account.balance() < amount {
            tracing::warn!(
                account = %account.id(),
                balance = %account.balance(),
                requested = %amount,
                "rejected expense: insufficient funds"
            );
            return Err(FinanceError::InsufficientFunds {
                account: account.id(),
                balance: account.balance(),
                requested: amount,
            });
        }
        if kind != category.kind() {
            tracing::warn!(
                operation_kind = %kind,
                category = category.name(),
                category_kind = %category.kind(),
                "operation kind differs from category kind"
            );
        }

        let operation = Operation::new(kind, account.id(), amount, category)
            .with_description(description.unwrap_or_default());
        account.add_operation(operation.clone());
        tracing::debug!(
            account = %account.id(),
            operation = %operation.id(),
            %kind,
            %amount,
            balance = %account.balance(),
            "recorded operation"
        );
        Ok(operation)
    }
}
