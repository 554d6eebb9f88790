mod common;

use finance_core::cli::{demo::build_demo_account, render_report, ReportStyle};
use finance_core::core::services::FinanceAnalytics;
use finance_core::currency::{CurrencyCode, LocaleConfig};

#[test]
fn demo_report_text() {
    let account = build_demo_account().expect("demo account");
    let summary = FinanceAnalytics::summarize(&account);
    let rendered = render_report(&summary, &ReportStyle::default());
    insta::assert_snapshot!(rendered, @r"
    Account: Main account
    Balance: $2,000.00
    Income minus expenses: -$10,000.00
    Expenses by category:
      Food: $20,000.00
      Housing: $50,000.00
    ");
}

#[test]
fn report_uses_configured_currency_and_locale() {
    let (account, _) = common::reference_account().expect("reference account");
    let summary = FinanceAnalytics::summarize(&account);
    let style = ReportStyle {
        currency: CurrencyCode::new("EUR"),
        locale: LocaleConfig::for_tag("de-DE"),
        color: false,
    };
    let rendered = render_report(&summary, &style);
    assert!(rendered.contains("Balance: €2.000,00"), "{rendered}");
    assert!(rendered.contains("  Housing: €50.000,00"), "{rendered}");
}

#[test]
fn summary_serializes_amounts_as_strings() {
    let (account, _) = common::reference_account().expect("reference account");
    let summary = FinanceAnalytics::summarize(&account);
    let json = serde_json::to_value(&summary).expect("serialize summary");
    assert_eq!(json["balance"], "2000");
    assert_eq!(json["difference"], "-10000");
    assert_eq!(json["grouped_expenses"]["Food"], "20000");
}
