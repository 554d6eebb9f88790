//! Domain types representing operation categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Classifies operations for reporting. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    id: Uuid,
    name: String,
    kind: OperationKind,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: OperationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_get_distinct_ids() {
        let first = Category::new("Salary", OperationKind::Income);
        let second = Category::new("Salary", OperationKind::Income);
        assert_ne!(first.id(), second.id());
        assert_eq!(first.name(), second.name());
    }

    #[test]
    fn display_label_includes_kind() {
        let category = Category::new("Groceries", OperationKind::Expense);
        assert_eq!(category.display_label(), "Groceries (Expense)");
    }
}
