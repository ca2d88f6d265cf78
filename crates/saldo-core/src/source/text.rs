//! Raw byte decoding with a single-byte encoding.

use encoding_rs::{Encoding, WINDOWS_1252};

use super::{Result, TextSource};
use crate::error::SourceError;

/// Decodes raw statement bytes into text.
///
/// Bytes the encoding cannot map are dropped instead of failing the load.
pub struct TextDecoder {
    encoding: &'static Encoding,
    text: String,
}

impl TextDecoder {
    /// Create a decoder for windows-1252 (what `latin1` resolves to).
    pub fn new() -> Self {
        Self::with_encoding(WINDOWS_1252)
    }

    pub fn with_encoding(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            text: String::new(),
        }
    }

    /// Create a decoder from a WHATWG encoding label such as "latin1".
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.as_bytes())
            .map(Self::with_encoding)
            .ok_or_else(|| SourceError::UnknownEncoding(label.to_string()))
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

impl Default for TextDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for TextDecoder {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let (decoded, had_errors) = self.encoding.decode_without_bom_handling(data);

        self.text = if had_errors {
            decoded.chars().filter(|&c| c != char::REPLACEMENT_CHARACTER).collect()
        } else {
            decoded.into_owned()
        };
        Ok(())
    }

    fn extract_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
