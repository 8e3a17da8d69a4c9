//! Run progress broadcaster for real-time status streaming.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::pipeline::progress::Stage;

/// Status of a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Processing,
    Completed,
    Failed,
}

/// Progress event for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    /// Identifier shared by every event of one run.
    pub run_id: String,
    /// File name being processed, directories stripped.
    pub file_name: String,
    /// Last checkpoint reached. Absent on failure events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    pub status: RunStatus,
    pub message: String,
    pub percent: u8,
    pub timestamp: DateTime<Utc>,
    /// Error message (set on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProgressEvent {
    pub fn checkpoint(run_id: &str, file_name: &str, stage: Stage, message: &str) -> Self {
        let status = match stage {
            Stage::Complete => RunStatus::Completed,
            _ => RunStatus::Processing,
        };

        Self {
            run_id: run_id.to_string(),
            file_name: file_name.to_string(),
            stage: Some(stage),
            status,
            message: message.to_string(),
            percent: stage.percent(),
            timestamp: Utc::now(),
            error: None,
        }
    }

    pub fn failed(run_id: &str, file_name: &str, percent: u8, error: &str) -> Self {
        Self {
            run_id: run_id.to_string(),
            file_name: file_name.to_string(),
            stage: None,
            status: RunStatus::Failed,
            message: "Processing failed".to_string(),
            percent,
            timestamp: Utc::now(),
            error: Some(error.to_string()),
        }
    }
}

/// Fans progress events out to any number of subscribers.
#[derive(Clone)]
pub struct ProgressBroadcaster {
    sender: Arc<broadcast::Sender<ProgressEvent>>,
}

impl ProgressBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn send(&self, event: ProgressEvent) {
        // No active receivers is fine
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.sender.subscribe()
    }

    /// Starts tracking a run. Nothing is sent until the first checkpoint.
    pub fn start_run(&self, run_id: &str, file_name: &str) -> RunTracker {
        RunTracker {
            run_id: run_id.to_string(),
            file_name: crate::sanitize::redact_name(file_name),
            last_percent: AtomicU8::new(0),
            sender: Arc::clone(&self.sender),
        }
    }
}

impl Default for ProgressBroadcaster {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Tracks progress for a single run.
pub struct RunTracker {
    run_id: String,
    file_name: String,
    last_percent: AtomicU8,
    sender: Arc<broadcast::Sender<ProgressEvent>>,
}

impl RunTracker {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn update(&self, stage: Stage, message: &str) {
        self.last_percent.store(stage.percent(), Ordering::Relaxed);
        let event = ProgressEvent::checkpoint(&self.run_id, &self.file_name, stage, message);
        let _ = self.sender.send(event);
    }

    /// Terminal failure event, carrying the last percent reached.
    pub fn failed(&self, error: &str) {
        let percent = self.last_percent.load(Ordering::Relaxed);
        let event = ProgressEvent::failed(&self.run_id, &self.file_name, percent, error);
        let _ = self.sender.send(event);
    }
}
