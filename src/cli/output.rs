use colored::Colorize;

use crate::core::services::AccountSummary;
use crate::currency::{format_amount, CurrencyCode, LocaleConfig};

/// How amounts and headings are rendered in the text report.
#[derive(Debug, Clone, Default)]
pub struct ReportStyle {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
    pub color: bool,
}

impl ReportStyle {
    fn amount(&self, value: rust_decimal::Decimal) -> String {
        let text = format_amount(value, &self.currency, &self.locale);
        if !self.color {
            text
        } else if value.is_sign_negative() && !value.is_zero() {
            text.red().to_string()
        } else {
            text.green().to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Renders the account report, one line per expense category in name order.
pub fn render_report(summary: &AccountSummary, style: &ReportStyle) -> String {
    let mut lines = vec![
        format!("{} {}", style.heading("Account:"), summary.name),
        format!("{} {}", style.heading("Balance:"), style.amount(summary.balance)),
        format!(
            "{} {}",
            style.heading("Income minus expenses:"),
            style.amount(summary.difference)
        ),
        style.heading("Expenses by category:"),
    ];
    if summary.grouped_expenses.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (category, total) in &summary.grouped_expenses {
        lines.push(format!("  {category}: {}", style.amount(*total)));
    }
    lines.join("\n")
}
