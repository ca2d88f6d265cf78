//! Fixed label phrases and regex patterns of the statement layout.
//!
//! These are matched verbatim against the statement text; documents using
//! other label wording are not recognized.

use lazy_static::lazy_static;
use regex::Regex;

/// Label that starts a billing period block.
pub const ANCHOR_LABEL: &str = "Sollstellung";

/// Label of the line carrying the expected and paid totals.
pub const SUMMARY_LABEL: &str = "Periodensumme";

/// Label of the line carrying the running balance.
pub const BALANCE_LABEL: &str = "laufender Saldo";

/// Currency marker that must follow every monetary token.
pub const CURRENCY_MARKER: char = '€';

lazy_static! {
    // Anchor: "Sollstellung 03.2024"
    pub static ref ANCHOR_PATTERN: Regex = Regex::new(&format!(
        r"{}\s+(\d{{2}})\.(\d{{4}})",
        regex::escape(ANCHOR_LABEL)
    )).unwrap();

    // Period value alone at the start of a continuation line: "03.2024"
    pub static ref PERIOD_CONTINUATION: Regex = Regex::new(
        r"^\s*(\d{2})\.(\d{4})\b"
    ).unwrap();

    // Unsigned amounts on the summary line: "1.206,00 €"
    pub static ref SUMMARY_AMOUNT: Regex = Regex::new(&format!(
        r"([\d.]+,\d+)\s*{}",
        CURRENCY_MARKER
    )).unwrap();

    // Possibly signed amounts on the balance line: "-45,50 €"
    pub static ref BALANCE_AMOUNT: Regex = Regex::new(&format!(
        r"([\d.-]+,\d+)\s*{}",
        CURRENCY_MARKER
    )).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_pattern() {
        let caps = ANCHOR_PATTERN.captures("Sollstellung 03.2024").unwrap();
        assert_eq!((&caps[1], &caps[2]), ("03", "2024"));

        assert!(ANCHOR_PATTERN.is_match("xx Sollstellung   12.2023 yy"));
        assert!(!ANCHOR_PATTERN.is_match("Sollstellung 3.2024"));
        assert!(!ANCHOR_PATTERN.is_match("Sollstellung03.2024"));
    }

    #[test]
    fn test_period_continuation_is_line_leading() {
        assert!(PERIOD_CONTINUATION.is_match("03.2024"));
        assert!(PERIOD_CONTINUATION.is_match("  03.2024 Miete"));
        assert!(!PERIOD_CONTINUATION.is_match("Datum 15.03.2024"));
        assert!(!PERIOD_CONTINUATION.is_match("03.20245"));
    }

    #[test]
    fn test_amount_patterns() {
        let line = "Periodensumme 1.206,00 € 1.206,00€";
        let tokens: Vec<&str> = SUMMARY_AMOUNT
            .captures_iter(line)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(tokens, vec!["1.206,00", "1.206,00"]);

        let caps = BALANCE_AMOUNT.captures("laufender Saldo -45,50 €").unwrap();
        assert_eq!(&caps[1], "-45,50");

        assert!(!SUMMARY_AMOUNT.is_match("Periodensumme 1.206,00 EUR"));
    }

    #[test]
    fn test_patterns_use_label_constants() {
        assert!(ANCHOR_PATTERN.as_str().starts_with(ANCHOR_LABEL));
        assert!(SUMMARY_AMOUNT.as_str().ends_with(CURRENCY_MARKER));
        assert!(BALANCE_AMOUNT.as_str().ends_with(CURRENCY_MARKER));
        assert_eq!(SUMMARY_AMOUNT.as_str(), r"([\d.]+,\d+)\s*€");
        assert_eq!(BALANCE_AMOUNT.as_str(), r"([\d.-]+,\d+)\s*€");
    }
}
