//! Core library for extracting billing-period summaries from account statements.
//!
//! This crate provides:
//! - Source loading (single-byte text decoding, optional PDF text layer)
//! - Period anchor scanning with a bounded lookahead window
//! - German-format amount parsing into exact decimals

pub mod error;
pub mod models;
pub mod source;
pub mod statement;

pub use error::{AmountError, Result, SaldoError, SourceError};
pub use models::config::{SaldoConfig, ScanConfig, SourceConfig, SourceMode};
pub use models::period::PeriodRecord;
pub use source::{load_document, read_document, SourceDocument, SourceKind, TextSource};
pub use statement::rules::{format_amount, parse_amount};
pub use statement::{ScanResult, StatementParser, StatementScanner};
