use thiserror::Error;

use crate::error::ProcessError;

use super::progress::Stage;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Engine not initialized: call load_resources() before processing")]
    NotInitialized,

    #[error("Processing failed during {stage}: {source}")]
    Processing {
        stage: Stage,
        #[source]
        source: ProcessError,
    },
}

impl PipelineError {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::NotInitialized => None,
            Self::Processing { stage, .. } => Some(*stage),
        }
    }

    pub fn is_unsupported_format(&self) -> bool {
        matches!(
            self,
            Self::Processing {
                source: ProcessError::UnsupportedFormat(_),
                ..
            }
        )
    }
}
