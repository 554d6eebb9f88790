//! Domain model for a single income or expense event.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{category::Category, common::*};

/// Immutable record of money moving in or out of an account.
///
/// The operation refers to its account by id only; the account owns the
/// operation through its log. The category is carried by value since
/// categories never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    id: Uuid,
    kind: OperationKind,
    account_id: Uuid,
    amount: Decimal,
    created_at: DateTime<Utc>,
    #[serde(default)]
    description: String,
    category: Category,
}

impl Operation {
    /// Stamps the current time and assigns a fresh id. Performs no validation
    /// and does not touch the account.
    pub fn new(kind: OperationKind, account_id: Uuid, amount: Decimal, category: &Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            account_id,
            amount,
            created_at: Utc::now(),
            description: String::new(),
            category: category.clone(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn account_id(&self) -> Uuid {
        self.account_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Amount with the kind's sign applied, as it affects the balance.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.apply_sign(self.amount)
    }
}

impl Identifiable for Operation {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Operation {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for Operation {
    fn display_label(&self) -> String {
        if self.description.is_empty() {
            format!("{} {} [{}]", self.kind, self.amount, self.category.name())
        } else {
            format!(
                "{} {} [{}] {}",
                self.kind,
                self.amount,
                self.category.name(),
                self.description
            )
        }
    }
}
