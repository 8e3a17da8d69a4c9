//! Test harness for isolated test execution.
//!
//! The `TestHarness` owns a ready `Engine`, a temp directory for anything
//! that touches the filesystem, and a recording progress sink so tests can
//! assert on checkpoints.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use mindloop::pipeline::{Engine, PipelineError, PipelineResult, RecordingProgress};
use mindloop::processor::Extractor;
use mindloop::{Document, EngineConfig};

/// Seed used when a test doesn't pick its own.
pub const DEFAULT_SEED: u64 = 2024;

pub struct TestHarness {
    temp_dir: TempDir,
    engine: Engine,
    pub progress: RecordingProgress,
    rng: StdRng,
}

impl TestHarness {
    /// Ready engine with default config and the default seed.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::build(Engine::new(config), DEFAULT_SEED)
    }

    /// Engine whose extractor has no decoders registered.
    pub fn without_decoders() -> Self {
        Self::build(
            Engine::with_extractor(EngineConfig::default(), Extractor::without_decoders()),
            DEFAULT_SEED,
        )
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(Engine::new(EngineConfig::default()), seed)
    }

    fn build(engine: Engine, seed: u64) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        engine.load_resources();
        Self {
            temp_dir,
            engine,
            progress: RecordingProgress::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `content` into the temp dir and returns the full path.
    pub fn write_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn process(&mut self, document: &Document) -> Result<PipelineResult, PipelineError> {
        self.engine
            .process_with_rng(document, &self.progress, &mut self.rng)
    }

    /// Runs a fixture from `tests/fixtures/` through the engine.
    pub fn process_fixture(&mut self, name: &str) -> PipelineResult {
        let document = fixture_document(name);
        self.process(&document)
            .unwrap_or_else(|e| panic!("Fixture '{}' failed: {}", name, e))
    }
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_text(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Missing fixture '{}': {}", name, e))
}

pub fn fixture_document(name: &str) -> Document {
    Document::from_path(&fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Missing fixture '{}': {}", name, e))
}
