#![allow(dead_code)]

use finance_core::core::services::FinanceFactory;
use finance_core::domain::{BankAccount, Category, OperationKind};
use finance_core::errors::FinanceResult;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Categories used by the reference scenario.
pub struct Categories {
    pub salary: Category,
    pub food: Category,
    pub housing: Category,
}

pub fn categories() -> Categories {
    Categories {
        salary: FinanceFactory::create_category("Salary", OperationKind::Income),
        food: FinanceFactory::create_category("Food", OperationKind::Expense),
        housing: FinanceFactory::create_category("Housing", OperationKind::Expense),
    }
}

/// Opens at 12000, adds two 30000 incomes then expenses of 20000 and 50000.
pub fn reference_account() -> FinanceResult<(BankAccount, Categories)> {
    let cats = categories();
    let mut account = FinanceFactory::create_bank_account("Reference", dec!(12000));
    let entries = [
        (OperationKind::Income, dec!(30000), &cats.salary, "Advance"),
        (OperationKind::Income, dec!(30000), &cats.salary, "Salary"),
        (OperationKind::Expense, dec!(20000), &cats.food, "Groceries"),
        (OperationKind::Expense, dec!(50000), &cats.housing, "Mortgage"),
    ];
    for (kind, amount, category, description) in entries {
        FinanceFactory::create_operation(kind, &mut account, amount, category, Some(description))?;
    }
    Ok((account, cats))
}

/// Deterministic mixed sequences of (kind, amount) used by the property tests.
pub fn operation_sequences() -> Vec<Vec<(OperationKind, Decimal)>> {
    use OperationKind::{Expense, Income};
    vec![
        vec![],
        vec![(Income, dec!(0.01))],
        vec![(Expense, dec!(99.99)), (Income, dec!(0.01))],
        vec![
            (Income, dec!(1500.50)),
            (Expense, dec!(200.25)),
            (Expense, dec!(1300.25)),
            (Income, dec!(0.10)),
            (Expense, dec!(0.20)),
        ],
        // includes expenses that overdraw and must be rejected
        vec![
            (Expense, dec!(60)),
            (Expense, dec!(60)),
            (Income, dec!(5)),
            (Expense, dec!(45)),
        ],
        (1..=50)
            .map(|i| {
                let kind = if i % 3 == 0 { Expense } else { Income };
                (kind, Decimal::new(i * 137, 2))
            })
            .collect(),
    ]
}
