use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::broadcast::progress::{ProgressBroadcaster, RunTracker};

/// Pipeline checkpoints, in the order a run passes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Extraction,
    Analysis,
    Curriculum,
    Questions,
    Finalize,
    Complete,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Extraction,
        Stage::Analysis,
        Stage::Curriculum,
        Stage::Questions,
        Stage::Finalize,
        Stage::Complete,
    ];

    pub fn percent(&self) -> u8 {
        match self {
            Stage::Extraction => 10,
            Stage::Analysis => 30,
            Stage::Curriculum => 60,
            Stage::Questions => 80,
            Stage::Finalize => 95,
            Stage::Complete => 100,
        }
    }

    /// User-facing message for the checkpoint.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Extraction => "Extracting text content...",
            Stage::Analysis => "Analyzing document structure...",
            Stage::Curriculum => "Generating learning levels...",
            Stage::Questions => "Creating intelligent questions...",
            Stage::Finalize => "Finalizing AI processing...",
            Stage::Complete => "Complete!",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Extraction => write!(f, "extraction"),
            Stage::Analysis => write!(f, "analysis"),
            Stage::Curriculum => write!(f, "curriculum"),
            Stage::Questions => write!(f, "questions"),
            Stage::Finalize => write!(f, "finalize"),
            Stage::Complete => write!(f, "complete"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub stage: Stage,
    pub label: &'static str,
    pub percent: u8,
}

impl From<Stage> for ProgressUpdate {
    fn from(stage: Stage) -> Self {
        Self {
            stage,
            label: stage.label(),
            percent: stage.percent(),
        }
    }
}

/// Fire-and-forget progress sink. Called synchronously from the run; must
/// not block.
pub trait ProgressReporter: Send + Sync {
    /// Called once per run, before the first checkpoint, with the run id
    /// that also prefixes the run's level ids.
    fn started(&self, _run_id: &str, _file_name: &str) {}

    fn report(&self, update: ProgressUpdate);

    /// Called once when a run aborts. Most reporters ignore it.
    fn failed(&self, _error: &str) {}
}

/// No-op reporter for callers that don't care.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _update: ProgressUpdate) {}
}

/// `(label, percent)` callbacks.
impl<F> ProgressReporter for F
where
    F: Fn(&str, u8) + Send + Sync,
{
    fn report(&self, update: ProgressUpdate) {
        self(update.label, update.percent)
    }
}

/// Keeps every update it sees. Used by tests to assert checkpoint order.
#[derive(Default)]
pub struct RecordingProgress {
    updates: Mutex<Vec<ProgressUpdate>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<ProgressUpdate> {
        self.updates.lock().map(|g| g.clone()).unwrap_or_default()
    }

    pub fn percents(&self) -> Vec<u8> {
        self.updates().iter().map(|u| u.percent).collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl ProgressReporter for RecordingProgress {
    fn report(&self, update: ProgressUpdate) {
        if let Ok(mut guard) = self.updates.lock() {
            guard.push(update);
        }
    }

    fn failed(&self, error: &str) {
        if let Ok(mut guard) = self.failures.lock() {
            guard.push(error.to_string());
        }
    }
}

/// Bridges pipeline checkpoints onto a broadcast channel. Each run the
/// engine starts gets its own tracker, keyed by the engine's run id, so
/// events line up with the returned levels. Runs sharing one reporter are
/// expected to be sequential, as in a batch.
pub struct BroadcastProgress {
    broadcaster: ProgressBroadcaster,
    current: Mutex<Option<RunTracker>>,
}

impl BroadcastProgress {
    pub fn new(broadcaster: ProgressBroadcaster) -> Self {
        Self {
            broadcaster,
            current: Mutex::new(None),
        }
    }

    /// Id of the run currently (or most recently) reported.
    pub fn run_id(&self) -> Option<String> {
        self.current
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|t| t.run_id().to_string()))
    }
}

impl ProgressReporter for BroadcastProgress {
    fn started(&self, run_id: &str, file_name: &str) {
        if let Ok(mut guard) = self.current.lock() {
            *guard = Some(self.broadcaster.start_run(run_id, file_name));
        }
    }

    fn report(&self, update: ProgressUpdate) {
        if let Ok(guard) = self.current.lock() {
            if let Some(tracker) = guard.as_ref() {
                tracker.update(update.stage, update.label);
            }
        }
    }

    fn failed(&self, error: &str) {
        if let Ok(guard) = self.current.lock() {
            if let Some(tracker) = guard.as_ref() {
                tracker.failed(error);
            }
        }
    }
}
