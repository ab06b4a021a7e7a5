//! The nightly release: check out, version, test and publish the library
//! and CLI, then retract the previous nightly.
//!
//! Steps run strictly in order and a failing step aborts the run. Nothing
//! that already happened is rolled back, so an aborted run can leave
//! manifests version-bumped without a matching publish.

mod context;
mod data;
mod steps;

use coho_pipeline::{Pipeline, PipelineAuditLog, PipelineBuilder};
use tracing::info;

pub use context::NightlyContext;
pub use data::NightlyOutput;
use steps::{
    CloneReposStep, InstallDependenciesStep, LinkPackagesStep, PublishNightlyStep,
    QueryPreviousNightlyStep, ResetReposStep, RunTestsStep, UnpublishPreviousNightlyStep,
    UpdateManifestsStep, UpdateReposStep,
};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{CommandExecutor, GitProvider, ManifestStore};

type NightlyPipeline<E, G, M> =
    Pipeline<NightlyOutput, NightlyOutput, NightlyContext<E, G, M>, OperationError>;

pub struct NightlyOperation<E, G, M> {
    context: NightlyContext<E, G, M>,
    pipeline: NightlyPipeline<E, G, M>,
}

impl<E, G, M> NightlyOperation<E, G, M>
where
    E: CommandExecutor + 'static,
    G: GitProvider + 'static,
    M: ManifestStore + 'static,
{
    pub fn new(context: NightlyContext<E, G, M>) -> Self {
        let pipeline = PipelineBuilder::new()
            .first_step(QueryPreviousNightlyStep::new())
            .then(CloneReposStep::new())
            .then(UpdateReposStep::new())
            .then(ResetReposStep::new())
            .then(UpdateManifestsStep::new())
            .then(LinkPackagesStep::new())
            .then(InstallDependenciesStep::new())
            .then(RunTestsStep::new())
            .then(PublishNightlyStep::new())
            .then(UnpublishPreviousNightlyStep::new())
            .build();
        Self { context, pipeline }
    }

    /// Step names in execution order.
    #[must_use]
    pub fn step_names(&self) -> Vec<&'static str> {
        self.pipeline.step_names()
    }

    /// # Errors
    ///
    /// Returns [`OperationError::NightlyAborted`] naming the first step that
    /// failed.
    pub fn execute(&self) -> Result<NightlyOutput> {
        self.execute_with_audit().0
    }

    /// Runs the pipeline, also returning a per-step record of what ran.
    pub fn execute_with_audit(&self) -> (Result<NightlyOutput>, PipelineAuditLog) {
        let options = self.context.options();
        info!(
            pretend = options.pretend,
            ignore_test_failures = options.ignore_test_failures,
            suffix = %self.context.suffix(),
            "starting nightly release"
        );
        let (result, audit) = self
            .pipeline
            .execute_with_audit(&self.context, NightlyOutput::default());
        (result.map_err(OperationError::from), audit)
    }
}
