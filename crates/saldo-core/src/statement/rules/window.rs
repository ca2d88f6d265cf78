//! Bounded lookahead for the summary and balance lines of one anchor.

use rust_decimal::Decimal;

use super::fields::{BalanceExtractor, SummaryAmounts, SummaryExtractor};
use super::FieldExtractor;
use crate::models::config::DEFAULT_WINDOW_SIZE;

/// Fields found inside one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowFields {
    /// Expected/paid from the first qualifying summary line.
    pub summary: Option<SummaryAmounts>,
    /// Balance from the first qualifying balance line.
    pub balance: Option<Decimal>,
    /// Number of lines examined before the search stopped.
    pub lines_scanned: usize,
}

impl WindowFields {
    /// Both fields, if the window produced them.
    pub fn complete(&self) -> Option<(SummaryAmounts, Decimal)> {
        Some((self.summary?, self.balance?))
    }
}

/// Searches `window_size` lines starting at an anchor.
#[derive(Debug, Clone, Copy)]
pub struct WindowSearch {
    window_size: usize,
    summary: SummaryExtractor,
    balance: BalanceExtractor,
}

impl WindowSearch {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            summary: SummaryExtractor::new(),
            balance: BalanceExtractor::new(),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Scan `lines[start..start + window_size]`, clipped to the end of input.
    ///
    /// Each field keeps the value of the first line that yields it; the scan
    /// stops as soon as both are set.
    pub fn search<S: AsRef<str>>(&self, lines: &[S], start: usize) -> WindowFields {
        let mut fields = WindowFields::default();
        let end = start.saturating_add(self.window_size).min(lines.len());

        for line in lines.get(start..end).unwrap_or_default() {
            let line = line.as_ref();
            fields.lines_scanned += 1;

            if fields.summary.is_none() {
                fields.summary = self.summary.extract(line);
            }
            if fields.balance.is_none() {
                fields.balance = self.balance.extract(line);
            }

            if fields.complete().is_some() {
                break;
            }
        }

        fields
    }
}

impl Default for WindowSearch {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}
