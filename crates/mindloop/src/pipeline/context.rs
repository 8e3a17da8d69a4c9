use std::time::{Duration, Instant};

use rand::Rng;

use crate::document::Document;
use crate::sanitize;

/// Identity and timing of one pipeline run.
pub struct RunContext {
    /// Random hex id, derived from the run's generator so seeded runs repeat.
    pub run_id: String,
    /// Document name with any directory components removed.
    pub file_name: String,
    started: Instant,
}

impl RunContext {
    pub fn new<R: Rng + ?Sized>(document: &Document, rng: &mut R) -> Self {
        let run_id = uuid::Builder::from_random_bytes(rng.gen())
            .into_uuid()
            .simple()
            .to_string();

        Self {
            run_id,
            file_name: sanitize::redact_name(&document.name),
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
