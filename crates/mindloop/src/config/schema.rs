use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub version: String,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Pins every random draw of a run when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            analysis: AnalysisConfig::default(),
            logging: LoggingConfig::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_max_key_terms")]
    pub max_key_terms: usize,
    /// Tokens shorter than this never become key terms.
    #[serde(default = "default_min_term_length")]
    pub min_term_length: usize,
    #[serde(default = "default_max_topics")]
    pub max_topics: usize,
    #[serde(default = "default_topic_probability")]
    pub topic_probability: f64,
    #[serde(default = "default_max_concepts")]
    pub max_concepts: usize,
    #[serde(default = "default_summary_sentences")]
    pub summary_sentences: usize,
}

fn default_max_key_terms() -> usize {
    15
}

fn default_min_term_length() -> usize {
    4
}

fn default_max_topics() -> usize {
    5
}

fn default_topic_probability() -> f64 {
    0.4
}

fn default_max_concepts() -> usize {
    10
}

fn default_summary_sentences() -> usize {
    3
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_key_terms: default_max_key_terms(),
            min_term_length: default_min_term_length(),
            max_topics: default_max_topics(),
            topic_probability: default_topic_probability(),
            max_concepts: default_max_concepts(),
            summary_sentences: default_summary_sentences(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".pdf", ".docx", ".txt", ".pptx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
    Pptx,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 4] = [Self::Pdf, Self::Docx, Self::Text, Self::Pptx];

    /// Accepts the extension with or without its leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Text),
            "pptx" => Some(Self::Pptx),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "txt",
            Self::Pptx => "pptx",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.extension())
    }
}
