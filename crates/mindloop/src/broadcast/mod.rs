//! Broadcasting for real-time progress streaming to UI subscribers.

pub mod progress;

pub use progress::{ProgressBroadcaster, ProgressEvent, RunStatus, RunTracker};
