use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MindloopError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Processing error: {0}")]
    Process(#[from] ProcessError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] crate::pipeline::PipelineError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Unsupported document format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode '{name}' as UTF-8 text: {source}")]
    TextDecode {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to process DOCX: {0}")]
    DocxProcessing(String),

    #[error("Decoder returned no text for '{0}'")]
    EmptyDecode(String),
}

impl ProcessError {
    /// Hard failures abort a pipeline run. Everything else is recovered by
    /// the synthetic fallback inside the extractor.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat(_) | Self::TextDecode { .. } | Self::ReadDocument { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read snapshot '{path}': {source}")]
    ReadSnapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write snapshot '{path}': {source}")]
    WriteSnapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize snapshot: {0}")]
    SerializeSnapshot(#[source] serde_json::Error),

    #[error("Snapshot '{path}' is not valid JSON: {source}")]
    ParseSnapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MindloopError>;
