//! Error types for the saldo-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the saldo library.
#[derive(Error, Debug)]
pub enum SaldoError {
    /// Source loading or decoding error.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to turning a source document into text lines.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source file could not be read at all.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured text encoding label is not known.
    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    PdfParse(String),

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// PDF text extraction was requested but the crate was built without it.
    #[error("PDF support is not enabled in this build")]
    PdfUnsupported,
}

/// A monetary token that does not normalize to a decimal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The cleaned token is not a valid decimal number.
    #[error("malformed amount {token:?}: {reason}")]
    Malformed { token: String, reason: String },
}

/// Result type for the saldo library.
pub type Result<T> = std::result::Result<T, SaldoError>;
