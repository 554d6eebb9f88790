//! Display formatting for decimal amounts. A single currency code is used for
//! labelling only; amounts are never converted.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware number formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl LocaleConfig {
    /// Picks separators for a handful of well-known language tags, falling
    /// back to the `en-US` conventions.
    pub fn for_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator) = match tag {
            "de-DE" | "es-ES" | "it-IT" | "pt-BR" => (',', '.'),
            "fr-FR" | "ru-RU" => (',', ' '),
            "de-CH" => ('.', '\''),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag("en-US")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "RUB" => "₽".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders `value` with exactly `precision` fractional digits, grouping the
/// integer part with the locale separator.
pub fn format_number(locale: &LocaleConfig, value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", precision as usize, rounded.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Formats an amount with the currency symbol, e.g. `-$1,250.00`.
pub fn format_amount(amount: Decimal, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let number = format_number(locale, amount, precision);
    let symbol = symbol_for(code.as_str());
    match number.strip_prefix('-') {
        Some(magnitude) => format!("-{symbol}{magnitude}"),
        None => format!("{symbol}{number}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_thousands_and_pads_minor_units() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, dec!(1234567.5), 2), "1,234,567.50");
        assert_eq!(format_number(&locale, dec!(999), 2), "999.00");
        assert_eq!(format_number(&locale, dec!(-10000), 0), "-10,000");
    }

    #[test]
    fn respects_locale_separators() {
        let locale = LocaleConfig::for_tag("de-DE");
        assert_eq!(format_number(&locale, dec!(2000.4), 2), "2.000,40");
    }

    #[test]
    fn negative_amounts_put_sign_before_symbol() {
        let locale = LocaleConfig::default();
        let usd = CurrencyCode::new("usd");
        assert_eq!(format_amount(dec!(-10000), &usd, &locale), "-$10,000.00");
        assert_eq!(format_amount(dec!(12.345), &usd, &locale), "$12.35");
        assert_eq!(
            format_amount(dec!(1500), &CurrencyCode::new("JPY"), &locale),
            "¥1,500"
        );
    }

    #[test]
    fn rounding_to_zero_drops_sign() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, dec!(-0.001), 2), "0.00");
    }
}
