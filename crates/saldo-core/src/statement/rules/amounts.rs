//! Monetary token handling for German-formatted statements.

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::AmountError;

/// Parse a German-formatted amount (e.g., "1.206,00" or "-45,50").
///
/// Every `.` is a thousands separator and dropped; `,` becomes the decimal point.
pub fn parse_amount(token: &str) -> Result<Decimal, AmountError> {
    let normalized = token.replace('.', "").replace(',', ".");

    Decimal::from_str(&normalized).map_err(|e| AmountError::Malformed {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

/// Format an amount with exactly two decimals (1206.00).
///
/// Extra decimals are rounded half away from zero. Amounts that round to zero
/// print unsigned.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    format!("{:.2}", rounded)
}

/// Collect the first capture group of every match of `pattern` in `line`.
pub fn amount_tokens<'a>(pattern: &Regex, line: &'a str) -> Vec<&'a str> {
    pattern
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::rules::patterns::{BALANCE_AMOUNT, SUMMARY_AMOUNT};

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.206,00"), Ok(dec("1206.00")));
        assert_eq!(parse_amount("-45,50"), Ok(dec("-45.50")));
        assert_eq!(parse_amount("0,00"), Ok(dec("0.00")));
        assert_eq!(parse_amount("12.345.678,90"), Ok(dec("12345678.90")));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("1-2,00").is_err());
        assert!(parse_amount("--,00").is_err());
        assert!(parse_amount("").is_err());

        let err = parse_amount("1-2,00").unwrap_err();
        assert!(err.to_string().contains("1-2,00"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec("1206")), "1206.00");
        assert_eq!(format_amount(dec("-45.5")), "-45.50");
        assert_eq!(format_amount(parse_amount("0,00").unwrap()), "0.00");
        assert_eq!(format_amount(parse_amount("1.206,00").unwrap()), "1206.00");
    }

    #[test]
    fn test_format_amount_rounds_extra_decimals() {
        assert_eq!(format_amount(parse_amount("0,129").unwrap()), "0.13");
        assert_eq!(format_amount(parse_amount("0,135").unwrap()), "0.14");
        assert_eq!(format_amount(parse_amount("1,005").unwrap()), "1.01");
        assert_eq!(format_amount(parse_amount("-2,345").unwrap()), "-2.35");
        assert_eq!(format_amount(parse_amount("1.206,0049").unwrap()), "1206.00");
    }

    #[test]
    fn test_format_amount_zero_is_unsigned() {
        assert_eq!(format_amount(parse_amount("-0,00").unwrap()), "0.00");
        assert_eq!(format_amount(parse_amount("-0,001").unwrap()), "0.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_amount_tokens() {
        let line = "Periodensumme 1.206,00 € 980,10 € Summe 5,00";
        assert_eq!(amount_tokens(&SUMMARY_AMOUNT, line), vec!["1.206,00", "980,10"]);

        let line = "laufender Saldo 10,00 € laufender Saldo -226,00 €";
        assert_eq!(amount_tokens(&BALANCE_AMOUNT, line), vec!["10,00", "-226,00"]);
    }
}
