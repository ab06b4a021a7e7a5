use std::any::Any;

use crate::step::PipelineStep;

pub(crate) type AnyValue = Box<dyn Any + Send>;

pub(crate) trait ErasedStep<Ctx, Err> {
    fn name(&self) -> &'static str;

    fn execute_erased(&self, ctx: &Ctx, input: AnyValue) -> Result<AnyValue, Err>;
}

pub(crate) struct StepWrapper<S> {
    step: S,
}

impl<S> StepWrapper<S> {
    pub(crate) fn new(step: S) -> Self {
        Self { step }
    }
}

impl<S> ErasedStep<S::Context, S::Error> for StepWrapper<S>
where
    S: PipelineStep,
{
    fn name(&self) -> &'static str {
        self.step.name()
    }

    fn execute_erased(&self, ctx: &S::Context, input: AnyValue) -> Result<AnyValue, S::Error> {
        let typed_input = input
            .downcast::<S::Input>()
            .expect("type-state builder guarantees correct input type");
        let output = self.step.execute(ctx, *typed_input)?;
        Ok(Box::new(output))
    }
}
