/// A unit of work in a pipeline.
///
/// # Type Parameters
///
/// - `Input`: Data received from the previous step (or pipeline entry point)
/// - `Output`: Data produced for the next step
/// - `Context`: Shared dependencies (injected, not passed between steps)
/// - `Error`: The error type for step failures
pub trait PipelineStep: Send + Sync {
    /// Data received from the previous step or pipeline entry point.
    type Input: Send + 'static;

    /// Data produced for the next step.
    type Output: Send + 'static;

    /// Shared context providing dependencies.
    type Context;

    /// Error type for step failures.
    type Error;

    /// Human-readable name for logging and error messages.
    fn name(&self) -> &'static str;

    /// Execute the step, transforming input into output.
    ///
    /// # Errors
    ///
    /// Returns an error if the step fails; the pipeline stops there.
    fn execute(&self, ctx: &Self::Context, input: Self::Input)
    -> Result<Self::Output, Self::Error>;
}
