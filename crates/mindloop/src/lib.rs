pub mod analysis;
pub mod broadcast;
pub mod config;
pub mod curriculum;
pub mod document;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod processor;
pub mod sanitize;
pub mod store;

pub use analysis::{AnalysisProfile, ContentAnalyzer, DifficultyBand, ReadingLevel};
pub use broadcast::{ProgressBroadcaster, ProgressEvent};
pub use config::{load_config, load_config_from_str, DocumentFormat, EngineConfig};
pub use curriculum::{Archetype, Level, LevelBand, Question, QuestionBody};
pub use document::Document;
pub use error::{ConfigError, MindloopError, ProcessError, Result, StoreError};
pub use logging::init_logging;
pub use pipeline::{Engine, PipelineError, PipelineResult, ProgressReporter, Stage};
pub use processor::{DocumentDecoder, ExtractedText, Extractor, TextSource};
pub use store::LibraryStore;
