use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, info_span, warn};

use crate::analysis::{AnalysisProfile, ContentAnalyzer};
use crate::config::schema::EngineConfig;
use crate::curriculum::{self, Level, QuestionSynthesizer};
use crate::document::Document;
use crate::processor::{ExtractedText, Extractor};

use super::context::RunContext;
use super::error::PipelineError;
use super::progress::{ProgressReporter, Stage};
use super::result::{self, Capabilities, EngineStatus, PipelineResult, ResultMetadata};

/// Components that only exist once the engine has been loaded.
struct Resources {
    analyzer: ContentAnalyzer,
    synthesizer: QuestionSynthesizer,
}

/// Decrements the in-flight counter when a run ends, however it ends.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Turns documents into level ladders with generated questions.
///
/// An engine starts unloaded; [`Engine::load_resources`] flips it to ready
/// exactly once. Runs share no mutable state, so one engine can serve
/// concurrent callers.
pub struct Engine {
    config: EngineConfig,
    extractor: Extractor,
    resources: OnceLock<Resources>,
    initialized: AtomicBool,
    in_flight: AtomicUsize,
}

impl Engine {
    /// Production constructor, with the default extractor.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_extractor(config, Extractor::new())
    }

    /// Injects a specific extractor (custom decoders, or none at all).
    pub fn with_extractor(config: EngineConfig, extractor: Extractor) -> Self {
        Self {
            config,
            extractor,
            resources: OnceLock::new(),
            initialized: AtomicBool::new(false),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Prepares analysis resources and marks the engine ready. Calling it
    /// again is a no-op.
    pub fn load_resources(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            debug!("Resources already loaded");
            return;
        }

        let _span = info_span!("load_resources").entered();
        self.resources.get_or_init(|| Resources {
            analyzer: ContentAnalyzer::new(self.config.analysis.clone()),
            synthesizer: QuestionSynthesizer::new(),
        });

        info!(
            max_key_terms = self.config.analysis.max_key_terms,
            seeded = self.config.seed.is_some(),
            "Engine ready"
        );
    }

    pub fn is_ready(&self) -> bool {
        self.resources.get().is_some()
    }

    /// Polls readiness up to `attempts` times, sleeping `interval` between
    /// polls. Returns whether the engine became ready.
    pub fn wait_until_ready(&self, attempts: u32, interval: Duration) -> bool {
        for attempt in 0..attempts {
            if self.is_ready() {
                return true;
            }
            if attempt + 1 < attempts {
                std::thread::sleep(interval);
            }
        }
        self.is_ready()
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            initialized: self.initialized.load(Ordering::SeqCst),
            resources_loaded: self.is_ready(),
            runs_in_flight: self.in_flight.load(Ordering::SeqCst),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Runs the full pipeline for one document. Randomness comes from the
    /// configured seed when set, otherwise from entropy.
    pub fn process(
        &self,
        document: &Document,
        progress: &dyn ProgressReporter,
    ) -> Result<PipelineResult, PipelineError> {
        let mut rng = self.make_rng();
        self.process_with_rng(document, progress, &mut rng)
    }

    /// Same as [`Engine::process`] with caller-supplied randomness.
    pub fn process_with_rng<R: Rng + ?Sized>(
        &self,
        document: &Document,
        progress: &dyn ProgressReporter,
        rng: &mut R,
    ) -> Result<PipelineResult, PipelineError> {
        let resources = self.resources.get().ok_or(PipelineError::NotInitialized)?;
        let _guard = InFlightGuard::enter(&self.in_flight);

        let ctx = RunContext::new(document, rng);
        let _pipeline_span = info_span!("pipeline",
            run_id = %ctx.run_id,
            document = %ctx.file_name,
            size = document.size,
        )
        .entered();

        progress.started(&ctx.run_id, &ctx.file_name);
        let outcome = self.run_stages(resources, &ctx, document, progress, rng);

        match &outcome {
            Ok(result) => info!(
                levels = result.levels.len(),
                questions = result.total_questions,
                confidence = result.confidence,
                elapsed_ms = result.elapsed.as_millis() as u64,
                "Pipeline run complete"
            ),
            Err(e) => {
                warn!(error = %e, "Pipeline run failed");
                progress.failed(&e.to_string());
            }
        }

        outcome
    }

    /// Processes each document in order. One failure does not stop the rest.
    pub fn process_batch(
        &self,
        documents: &[Document],
        progress: &dyn ProgressReporter,
    ) -> Vec<Result<PipelineResult, PipelineError>> {
        let _span = info_span!("batch", documents = documents.len()).entered();
        let mut rng = self.make_rng();

        let results: Vec<_> = documents
            .iter()
            .map(|document| self.process_with_rng(document, progress, &mut rng))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            succeeded = results.len() - failed,
            failed = failed,
            "Batch complete"
        );

        results
    }

    fn make_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn run_stages<R: Rng + ?Sized>(
        &self,
        resources: &Resources,
        ctx: &RunContext,
        document: &Document,
        progress: &dyn ProgressReporter,
        rng: &mut R,
    ) -> Result<PipelineResult, PipelineError> {
        // Stage 1: Extraction
        let extracted = {
            let _step = info_span!("extraction").entered();
            progress.report(Stage::Extraction.into());
            self.step_extract(document)?
        };

        // Stage 2: Analysis
        let profile = {
            let _step = info_span!("analysis").entered();
            progress.report(Stage::Analysis.into());
            resources.analyzer.analyze(&extracted.text, rng)
        };

        // Stage 3: Curriculum
        let mut levels = {
            let _step = info_span!("curriculum").entered();
            progress.report(Stage::Curriculum.into());
            let levels = curriculum::build_levels(&profile, &ctx.run_id);
            debug!(levels = levels.len(), difficulty = %profile.difficulty, "Built level ladder");
            levels
        };

        // Stage 4: Questions
        {
            let _step = info_span!("questions").entered();
            progress.report(Stage::Questions.into());
            resources.synthesizer.populate(&mut levels, &profile, rng);
        }

        // Stage 5: Finalize
        let result = {
            let _step = info_span!("finalize").entered();
            progress.report(Stage::Finalize.into());
            self.step_finalize(ctx, document, extracted, profile, levels)
        };

        progress.report(Stage::Complete.into());
        Ok(result)
    }

    fn step_extract(&self, document: &Document) -> Result<ExtractedText, PipelineError> {
        let extracted = self
            .extractor
            .extract(document)
            .map_err(|source| PipelineError::Processing {
                stage: Stage::Extraction,
                source,
            })?;

        debug!(
            chars = extracted.text.len(),
            source = ?extracted.source,
            "Extracted text"
        );
        Ok(extracted)
    }

    fn step_finalize(
        &self,
        ctx: &RunContext,
        document: &Document,
        extracted: ExtractedText,
        profile: AnalysisProfile,
        levels: Vec<Level>,
    ) -> PipelineResult {
        let total_questions = levels.iter().map(|l| l.questions.len()).sum();
        let confidence = result::overall_confidence(&profile);
        let elapsed = ctx.elapsed();

        PipelineResult {
            success: true,
            file_name: document.name.clone(),
            file_size: document.size,
            mime_type: document.mime_type.clone(),
            processing_time: result::format_elapsed(elapsed),
            elapsed,
            confidence,
            levels,
            total_questions,
            key_terms: profile.key_terms,
            difficulty: profile.difficulty,
            summary: profile.summary,
            metadata: ResultMetadata {
                word_count: profile.word_count,
                reading_level: profile.reading_level,
                topics: profile.topics,
            },
            structure: profile.structure,
            concepts: profile.concepts,
            text_source: extracted.source,
            processed_at: Utc::now(),
        }
    }
}
