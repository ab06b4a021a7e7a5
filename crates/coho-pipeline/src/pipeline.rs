use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::{debug, info};

use crate::audit::PipelineAuditLog;
use crate::erased::{AnyValue, ErasedStep};
use crate::error::PipelineError;

/// A built pipeline ready for execution.
pub struct Pipeline<Input, Output, Ctx, Err> {
    steps: Vec<Box<dyn ErasedStep<Ctx, Err>>>,
    _phantom: PhantomData<(Input, Output)>,
}

impl<Input, Output, Ctx, Err> Pipeline<Input, Output, Ctx, Err>
where
    Input: Send + 'static,
    Output: Send + 'static,
    Err: Debug,
{
    pub(crate) fn from_steps(steps: Vec<Box<dyn ErasedStep<Ctx, Err>>>) -> Self {
        Self {
            steps,
            _phantom: PhantomData,
        }
    }

    /// Step names in execution order.
    #[must_use]
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// # Errors
    ///
    /// Returns `PipelineError::StepFailed` for the first step that fails.
    pub fn execute(&self, ctx: &Ctx, input: Input) -> Result<Output, PipelineError<Err>> {
        let (result, _audit_log) = self.execute_with_audit(ctx, input);
        result
    }

    /// Execute the pipeline and return both the result and an audit log.
    pub fn execute_with_audit(
        &self,
        ctx: &Ctx,
        input: Input,
    ) -> (Result<Output, PipelineError<Err>>, PipelineAuditLog) {
        let mut audit_log = PipelineAuditLog::new();
        let mut current: AnyValue = Box::new(input);
        let total = self.steps.len();

        for (index, step) in self.steps.iter().enumerate() {
            info!(step = step.name(), "[{}/{total}] {}", index + 1, step.name());
            audit_log.record_start(step.name());

            match step.execute_erased(ctx, current) {
                Ok(output) => {
                    audit_log.record_success();
                    current = output;
                }
                Err(error) => {
                    audit_log.record_failure();
                    debug!(step = step.name(), ?error, "step failed, aborting pipeline");
                    return (
                        Err(PipelineError::StepFailed {
                            step: step.name().to_string(),
                            source: error,
                        }),
                        audit_log,
                    );
                }
            }
        }

        let output = current
            .downcast::<Output>()
            .expect("type-state builder guarantees final output type");
        (Ok(*output), audit_log)
    }
}
