pub mod finance_analytics;
pub mod finance_factory;

pub use finance_analytics::{AccountSummary, FinanceAnalytics};
pub use finance_factory::FinanceFactory;
