//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::SaldoError;

/// Default number of lines searched after an anchor, anchor line included.
pub const DEFAULT_WINDOW_SIZE: usize = 30;

/// Default text encoding for raw statement bytes.
pub const DEFAULT_ENCODING: &str = "windows-1252";

/// Main configuration for the saldo pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaldoConfig {
    /// Scanner configuration.
    pub scan: ScanConfig,

    /// Source loading configuration.
    pub source: SourceConfig,
}

/// Anchor scanning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Number of lines, starting at the anchor line, searched for the
    /// summary and balance lines.
    pub window_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// How the source file is turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Decode the raw bytes with a single-byte encoding.
    #[default]
    Text,
    /// Extract the text layer of a PDF.
    Pdf,
    /// Use PDF extraction for `%PDF-` files when it yields text, otherwise raw decoding.
    Auto,
}

/// Source loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Source mode.
    pub mode: SourceMode,

    /// Encoding label for raw decoding (any WHATWG label, e.g. "latin1").
    pub encoding: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Text,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl SaldoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Check values that would make the pipeline meaningless.
    pub fn validate(&self) -> crate::Result<()> {
        if self.scan.window_size == 0 {
            return Err(SaldoError::Config(
                "scan.window_size must be at least 1".to_string(),
            ));
        }
        if encoding_rs::Encoding::for_label(self.source.encoding.as_bytes()).is_none() {
            return Err(SaldoError::Config(format!(
                "source.encoding {:?} is not a known encoding label",
                self.source.encoding
            )));
        }
        Ok(())
    }
}
