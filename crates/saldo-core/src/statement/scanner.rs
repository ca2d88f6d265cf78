//! Line-oriented statement scanner.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ScanConfig;
use crate::models::period::PeriodRecord;

use super::rules::{find_anchor, WindowSearch};
use super::StatementParser;

/// Result of scanning one statement.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Extracted records, in anchor order.
    pub records: Vec<PeriodRecord>,
    /// Number of anchors found, including those that produced no record.
    pub anchors: usize,
    /// One entry per anchor whose window did not yield all fields.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Scans a statement for period anchors and their summary blocks.
///
/// The outer scan moves one line at a time; after an anchor's window search
/// it resumes on the line following the anchor, so a window never consumes
/// the anchors inside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementScanner {
    window: WindowSearch,
}

impl StatementScanner {
    /// Create a scanner with the default window size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner from configuration.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new().with_window_size(config.window_size)
    }

    /// Set the number of lines searched after each anchor.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window = WindowSearch::new(window_size);
        self
    }

    pub fn window_size(&self) -> usize {
        self.window.window_size()
    }

    /// Scan a sequence of lines.
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> ScanResult {
        let start = Instant::now();
        let mut result = ScanResult::default();
        let mut cursor = 0;

        while cursor < lines.len() {
            let Some(anchor) = find_anchor(lines, cursor) else {
                cursor += 1;
                continue;
            };
            result.anchors += 1;

            let fields = self.window.search(lines, anchor.line);
            match fields.complete() {
                Some((summary, balance)) => {
                    debug!(
                        "Period {} at anchor_line {}: expected={} paid={} balance={}",
                        anchor.period, anchor.line, summary.expected, summary.paid, balance
                    );
                    result.records.push(PeriodRecord {
                        period: anchor.period,
                        expected: summary.expected,
                        paid: summary.paid,
                        balance,
                        anchor_line: anchor.line,
                    });
                }
                None => {
                    let missing = match (fields.summary.is_some(), fields.balance.is_some()) {
                        (false, false) => "summary and balance",
                        (false, true) => "summary",
                        _ => "balance",
                    };
                    let warning = format!(
                        "period {} at anchor_line {}: no {} within {} lines",
                        anchor.period,
                        anchor.line,
                        missing,
                        self.window.window_size()
                    );
                    debug!("Dropping {}", warning);
                    result.warnings.push(warning);
                }
            }

            cursor = anchor.line + 1;
        }

        result.processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Scanned {} lines: {} anchors, {} periods",
            lines.len(),
            result.anchors,
            result.records.len()
        );

        result
    }
}

impl StatementParser for StatementScanner {
    fn parse_lines(&self, lines: &[String]) -> ScanResult {
        self.scan(lines)
    }
}
