use std::fmt::Debug;

use thiserror::Error;

/// Error from pipeline execution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError<E: Debug> {
    /// A step failed; later steps were not run.
    #[error("step '{step}' failed")]
    StepFailed {
        /// Name of the step that failed.
        step: String,
        /// The error that caused the step to fail.
        #[source]
        source: E,
    },
}

impl<E: Debug> PipelineError<E> {
    /// Name of the step that aborted the pipeline.
    #[must_use]
    pub fn step(&self) -> &str {
        match self {
            Self::StepFailed { step, .. } => step,
        }
    }

    #[must_use]
    pub fn into_source(self) -> E {
        match self {
            Self::StepFailed { source, .. } => source,
        }
    }
}
