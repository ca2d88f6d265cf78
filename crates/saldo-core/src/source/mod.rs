//! Source loading: turning a statement file into text lines.

mod text;
#[cfg(feature = "pdf")]
mod pdf;

pub use text::TextDecoder;
#[cfg(feature = "pdf")]
pub use pdf::PdfTextSource;

pub use crate::models::config::SourceMode;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::SourceError;
use crate::models::config::SourceConfig;

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Magic bytes at the start of every PDF file.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Which loader actually produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Raw bytes decoded with a single-byte encoding.
    Text,
    /// Text layer extracted from a PDF.
    Pdf,
}

/// A statement reduced to text lines.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub kind: SourceKind,
    pub lines: Vec<String>,
}

/// Trait for loaders that turn document bytes into text.
pub trait TextSource {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Extract the text of the loaded document.
    fn extract_text(&self) -> Result<String>;
}

/// Split text on line breaks, dropping a trailing `\r` from each line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Read a statement file and turn it into lines.
pub fn read_document(path: &Path, config: &SourceConfig) -> Result<SourceDocument> {
    let data = std::fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} bytes from {}", data.len(), path.display());
    load_document(&data, config)
}

/// Turn statement bytes into lines according to the configured mode.
pub fn load_document(data: &[u8], config: &SourceConfig) -> Result<SourceDocument> {
    let document = match config.mode {
        SourceMode::Text => decode_document(data, &config.encoding)?,
        SourceMode::Pdf => SourceDocument {
            kind: SourceKind::Pdf,
            lines: split_lines(&extract_pdf_text(data)?),
        },
        SourceMode::Auto if data.starts_with(PDF_MAGIC) => match extract_pdf_text(data) {
            Ok(text) if !text.trim().is_empty() => SourceDocument {
                kind: SourceKind::Pdf,
                lines: split_lines(&text),
            },
            Ok(_) => {
                warn!("PDF has no text layer, falling back to raw decoding");
                decode_document(data, &config.encoding)?
            }
            Err(e) => {
                warn!("PDF text extraction failed ({}), falling back to raw decoding", e);
                decode_document(data, &config.encoding)?
            }
        },
        SourceMode::Auto => decode_document(data, &config.encoding)?,
    };

    debug!("{:?} source produced {} lines", document.kind, document.lines.len());
    Ok(document)
}

fn decode_document(data: &[u8], encoding: &str) -> Result<SourceDocument> {
    let mut decoder = TextDecoder::for_label(encoding)?;
    decoder.load(data)?;
    Ok(SourceDocument {
        kind: SourceKind::Text,
        lines: split_lines(&decoder.extract_text()?),
    })
}

#[cfg(feature = "pdf")]
fn extract_pdf_text(data: &[u8]) -> Result<String> {
    let mut source = PdfTextSource::new();
    source.load(data)?;
    source.extract_text()
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf_text(_data: &[u8]) -> Result<String> {
    Err(SourceError::PdfUnsupported)
}
