//! Billing-period record extracted from a statement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One billing period's summary as printed on the statement.
///
/// Built once the anchor's window has yielded all three amounts and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Period in `MM.YYYY` form, verbatim from the anchor line.
    pub period: String,

    /// First amount on the `Periodensumme` line.
    pub expected: Decimal,

    /// Second amount on the `Periodensumme` line.
    pub paid: Decimal,

    /// Last amount on the `laufender Saldo` line. May be negative.
    pub balance: Decimal,

    /// Zero-based index of the resolved anchor line (the value line when the
    /// label and the period are split across two lines).
    pub anchor_line: usize,
}
