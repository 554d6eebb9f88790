//! Shared traits and enums for bookkeeping primitives.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for bookkeeping entities.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving decimal amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Direction of money flow, shared by categories and operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Income,
    Expense,
}

impl OperationKind {
    /// Applies the kind's sign to a positive amount.
    pub fn apply_sign(self, amount: Decimal) -> Decimal {
        match self {
            OperationKind::Income => amount,
            OperationKind::Expense => -amount,
        }
    }

    pub fn is_expense(self) -> bool {
        matches!(self, OperationKind::Expense)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationKind::Income => "Income",
            OperationKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}
