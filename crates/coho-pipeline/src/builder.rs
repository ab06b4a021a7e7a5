use std::fmt::Debug;
use std::marker::PhantomData;

use crate::erased::{ErasedStep, StepWrapper};
use crate::pipeline::Pipeline;
use crate::step::PipelineStep;

/// Marker type for a builder with no steps.
pub struct Empty;

/// Marker type for a builder with at least one step.
pub struct HasSteps<LastOutput>(PhantomData<LastOutput>);

/// Type-state builder for pipelines.
///
/// Each step's input type must match the previous step's output type, and a
/// pipeline cannot be built without at least one step:
///
/// ```compile_fail
/// use coho_pipeline::{PipelineBuilder, PipelineStep};
///
/// struct Render;
/// impl PipelineStep for Render {
///     type Input = u32;
///     type Output = String;
///     type Context = ();
///     type Error = ();
///     fn name(&self) -> &'static str { "render" }
///     fn execute(&self, _: &(), input: u32) -> Result<String, ()> {
///         Ok(input.to_string())
///     }
/// }
///
/// struct Double;
/// impl PipelineStep for Double {
///     type Input = u32;
///     type Output = u32;
///     type Context = ();
///     type Error = ();
///     fn name(&self) -> &'static str { "double" }
///     fn execute(&self, _: &(), input: u32) -> Result<u32, ()> {
///         Ok(input * 2)
///     }
/// }
///
/// // Double expects u32 but Render outputs String
/// let pipeline = PipelineBuilder::new()
///     .first_step(Render)
///     .then(Double)
///     .build();
/// ```
///
/// ```compile_fail
/// use coho_pipeline::PipelineBuilder;
///
/// let pipeline = PipelineBuilder::<(), (), (), ()>::new().build();
/// ```
pub struct PipelineBuilder<Input, Output, Ctx, Err, State> {
    steps: Vec<Box<dyn ErasedStep<Ctx, Err>>>,
    _phantom: PhantomData<(Input, Output, State)>,
}

impl<Ctx, Err> PipelineBuilder<(), (), Ctx, Err, Empty> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Add the first step, fixing the pipeline's input type.
    #[must_use]
    pub fn first_step<S>(
        self,
        step: S,
    ) -> PipelineBuilder<S::Input, S::Output, Ctx, Err, HasSteps<S::Output>>
    where
        S: PipelineStep<Context = Ctx, Error = Err> + 'static,
    {
        let mut steps = self.steps;
        steps.push(Box::new(StepWrapper::new(step)));
        PipelineBuilder {
            steps,
            _phantom: PhantomData,
        }
    }
}

impl<Ctx, Err> Default for PipelineBuilder<(), (), Ctx, Err, Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Input, CurrentOutput, Ctx, Err>
    PipelineBuilder<Input, CurrentOutput, Ctx, Err, HasSteps<CurrentOutput>>
{
    /// Add another step. Its input type must match the current output type.
    #[must_use]
    pub fn then<S>(
        self,
        step: S,
    ) -> PipelineBuilder<Input, S::Output, Ctx, Err, HasSteps<S::Output>>
    where
        S: PipelineStep<Input = CurrentOutput, Context = Ctx, Error = Err> + 'static,
    {
        let mut steps = self.steps;
        steps.push(Box::new(StepWrapper::new(step)));
        PipelineBuilder {
            steps,
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn build(self) -> Pipeline<Input, CurrentOutput, Ctx, Err>
    where
        Input: Send + 'static,
        CurrentOutput: Send + 'static,
        Err: Debug,
    {
        Pipeline::from_steps(self.steps)
    }
}
