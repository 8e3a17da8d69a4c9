pub mod docx;
pub mod synthetic;
pub mod text;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::schema::DocumentFormat;
use crate::document::Document;
use crate::error::ProcessError;

/// Where the extracted text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    Verbatim,
    Decoded,
    Synthetic,
}

#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub source: TextSource,
}

/// Best-effort structured extraction for one binary format.
///
/// Failures are never fatal: the extractor swaps in synthetic text.
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<String, ProcessError>;
}

pub struct Extractor {
    decoders: HashMap<DocumentFormat, Box<dyn DocumentDecoder>>,
}

impl Extractor {
    /// Default extractor: real DOCX decoding, synthetic text for PDF and PPTX.
    pub fn new() -> Self {
        Self::without_decoders().with_decoder(DocumentFormat::Docx, docx::DocxDecoder::new())
    }

    /// An extractor with no decoders at all; every binary format falls back
    /// to synthetic text.
    pub fn without_decoders() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registers (or replaces) the decoder for a binary format. Plain text is
    /// always read verbatim and ignores registered decoders.
    pub fn with_decoder(
        mut self,
        format: DocumentFormat,
        decoder: impl DocumentDecoder + 'static,
    ) -> Self {
        self.decoders.insert(format, Box::new(decoder));
        self
    }

    pub fn has_decoder(&self, format: DocumentFormat) -> bool {
        self.decoders.contains_key(&format)
    }

    pub fn extract(&self, document: &Document) -> Result<ExtractedText, ProcessError> {
        let format = document
            .format()
            .ok_or_else(|| ProcessError::UnsupportedFormat(document.extension.clone()))?;

        match format {
            DocumentFormat::Text => Ok(ExtractedText {
                text: text::decode(&document.name, &document.bytes)?,
                source: TextSource::Verbatim,
            }),
            DocumentFormat::Docx | DocumentFormat::Pdf | DocumentFormat::Pptx => {
                Ok(self.extract_binary(document, format))
            }
        }
    }

    fn extract_binary(&self, document: &Document, format: DocumentFormat) -> ExtractedText {
        if let Some(decoder) = self.decoders.get(&format) {
            match decoder.decode(&document.bytes) {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(format = %format, chars = text.len(), "Decoded document text");
                    return ExtractedText {
                        text,
                        source: TextSource::Decoded,
                    };
                }
                Ok(_) => {
                    warn!(
                        "{}",
                        ProcessError::EmptyDecode(crate::sanitize::redact_name(&document.name))
                    );
                }
                Err(e) => {
                    warn!("Decoder failed for {} document, using fallback: {}", format, e);
                }
            }
        }

        ExtractedText {
            text: synthetic::generate(&document.topic(), format),
            source: TextSource::Synthetic,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
