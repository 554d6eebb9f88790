//! Pure domain models: accounts, categories and operations.
//! No I/O, no CLI, only data types and their own bookkeeping rules.

pub mod account;
pub mod category;
pub mod common;
pub mod operation;

pub use account::BankAccount;
pub use category::Category;
pub use common::{Amounted, Displayable, Identifiable, NamedEntity, OperationKind};
pub use operation::Operation;
