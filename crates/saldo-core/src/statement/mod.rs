//! Billing-period extraction from statement text.

mod scanner;
pub mod rules;

pub use scanner::{ScanResult, StatementScanner};

use crate::source::split_lines;

/// Trait for statement parsing.
pub trait StatementParser {
    /// Extract period records from decoded lines.
    fn parse_lines(&self, lines: &[String]) -> ScanResult;

    /// Extract period records from a whole text, split on line breaks.
    fn parse(&self, text: &str) -> ScanResult {
        self.parse_lines(&split_lines(text))
    }
}
