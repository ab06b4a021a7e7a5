//! Linear pipelines of typed steps.
//!
//! Each step's output becomes the next step's input. Steps run strictly in
//! the order they were added. The first failing step aborts the pipeline;
//! steps that already ran are not undone.

mod audit;
mod builder;
mod erased;
mod error;
mod pipeline;
mod step;

pub use audit::{PipelineAuditLog, StepRecord, StepStatus};
pub use builder::PipelineBuilder;
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use step::PipelineStep;
