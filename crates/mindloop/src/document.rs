use std::path::Path;

use crate::config::schema::DocumentFormat;
use crate::error::ProcessError;

/// An uploaded document. Lives for one pipeline run.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub size: u64,
    /// Declared extension, lowercase, without the leading dot. Empty when the
    /// name has none.
    pub extension: String,
    /// MIME type guessed from the name (e.g., "application/pdf").
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Document {
    /// Creates a document whose extension is inferred from its name.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let extension = Self::infer_extension(&name).to_string();
        Self::with_extension(name, &extension, bytes)
    }

    /// Creates a document with an explicitly declared extension.
    pub fn with_extension(name: impl Into<String>, extension: &str, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = mime_guess::from_path(&name).first().map(|m| m.to_string());
        Self {
            size: bytes.len() as u64,
            extension: extension.trim_start_matches('.').to_lowercase(),
            mime_type,
            name,
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ProcessError> {
        let bytes = std::fs::read(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        Ok(Self::new(name, bytes))
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_extension(&self.extension)
    }

    /// The file name without its extension and with `-`/`_` turned into
    /// spaces. Seeds the synthetic text templates.
    pub fn topic(&self) -> String {
        let stem = match self.name.rfind('.') {
            Some(dot) if dot > 0 => &self.name[..dot],
            _ => self.name.as_str(),
        };
        stem.replace(['-', '_'], " ")
    }

    fn infer_extension(name: &str) -> &str {
        match name.rfind('.') {
            Some(dot) => &name[dot + 1..],
            None => "",
        }
    }
}
