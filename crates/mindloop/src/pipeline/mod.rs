pub mod context;
pub mod error;
pub mod progress;
pub mod result;
pub mod runner;

pub use context::RunContext;
pub use error::PipelineError;
pub use progress::{
    BroadcastProgress, NoopProgress, ProgressReporter, ProgressUpdate, RecordingProgress, Stage,
};
pub use result::{Capabilities, EngineStatus, PipelineResult, ResultMetadata};
pub use runner::Engine;
