//! Summary and balance line extractors.

use rust_decimal::Decimal;
use tracing::trace;

use super::amounts::{amount_tokens, parse_amount};
use super::patterns::{BALANCE_AMOUNT, BALANCE_LABEL, SUMMARY_AMOUNT, SUMMARY_LABEL};
use super::FieldExtractor;

/// Expected and paid totals taken from a `Periodensumme` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryAmounts {
    pub expected: Decimal,
    pub paid: Decimal,
}

/// Extracts expected/paid from a summary line.
///
/// The line qualifies when it carries the summary label and at least two
/// currency-tagged amounts, the first two of which both parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryExtractor;

impl SummaryExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for SummaryExtractor {
    type Output = SummaryAmounts;

    fn extract(&self, line: &str) -> Option<Self::Output> {
        if !line.contains(SUMMARY_LABEL) {
            return None;
        }

        let tokens = amount_tokens(&SUMMARY_AMOUNT, line);
        if tokens.len() < 2 {
            trace!("Summary line with {} amount(s), need 2: {:?}", tokens.len(), line);
            return None;
        }

        let expected = parse_amount(tokens[0])
            .inspect_err(|e| trace!("Skipping summary line: {}", e))
            .ok()?;
        let paid = parse_amount(tokens[1])
            .inspect_err(|e| trace!("Skipping summary line: {}", e))
            .ok()?;

        Some(SummaryAmounts { expected, paid })
    }
}

/// Extracts the running balance from a balance line.
///
/// The balance is the last currency-tagged amount on the line, since the
/// rendering may repeat the label and value.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceExtractor;

impl BalanceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for BalanceExtractor {
    type Output = Decimal;

    fn extract(&self, line: &str) -> Option<Self::Output> {
        if !line.contains(BALANCE_LABEL) {
            return None;
        }

        let token = amount_tokens(&BALANCE_AMOUNT, line).pop()?;
        parse_amount(token)
            .inspect_err(|e| trace!("Skipping balance line: {}", e))
            .ok()
    }
}
