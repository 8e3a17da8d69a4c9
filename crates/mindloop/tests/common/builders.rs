//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use mindloop::config::{AnalysisConfig, LoggingConfig};
use mindloop::{Document, EngineConfig};

/// Builder for `EngineConfig` instances.
pub struct ConfigBuilder {
    analysis: AnalysisConfig,
    logging: LoggingConfig,
    seed: Option<u64>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            logging: LoggingConfig::default(),
            seed: None,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_key_terms(mut self, max: usize) -> Self {
        self.analysis.max_key_terms = max;
        self
    }

    pub fn topic_probability(mut self, probability: f64) -> Self {
        self.analysis.topic_probability = probability;
        self
    }

    pub fn max_topics(mut self, max: usize) -> Self {
        self.analysis.max_topics = max;
        self
    }

    pub fn json_logs(mut self, json: bool) -> Self {
        self.logging.json = json;
        self
    }

    pub fn build(self) -> EngineConfig {
        EngineConfig {
            analysis: self.analysis,
            logging: self.logging,
            seed: self.seed,
            ..EngineConfig::default()
        }
    }

    /// The config as the JSON a user would put on disk.
    pub fn to_json(self) -> String {
        serde_json::to_string_pretty(&self.build()).expect("config serializes")
    }
}

/// Builder for `Document` instances.
pub struct DocumentBuilder {
    name: String,
    bytes: Vec<u8>,
    extension: Option<String>,
}

impl DocumentBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bytes: Vec::new(),
            extension: None,
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.bytes = text.as_bytes().to_vec();
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes = bytes.to_vec();
        self
    }

    /// Declares an extension that differs from the name's.
    pub fn declared_extension(mut self, extension: &str) -> Self {
        self.extension = Some(extension.to_string());
        self
    }

    pub fn build(self) -> Document {
        match self.extension {
            Some(ext) => Document::with_extension(self.name, &ext, self.bytes),
            None => Document::new(self.name, self.bytes),
        }
    }
}

/// A minimal DOCX archive whose body has one paragraph per entry.
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .expect("start docx entry");
    writer.write_all(xml.as_bytes()).expect("write docx entry");
    writer.finish().expect("finish docx").into_inner()
}

/// Plain prose of exactly `words` words.
pub fn prose(words: usize) -> String {
    const VOCAB: [&str; 8] = ["river", "stone", "water", "light", "green", "field", "cloud", "north"];
    (0..words)
        .map(|i| VOCAB[i % VOCAB.len()])
        .collect::<Vec<_>>()
        .join(" ")
}
