//! Integration tests for typed data flow between pipeline steps.

use std::cell::RefCell;

use coho_pipeline::{PipelineBuilder, PipelineStep, StepStatus};

struct TestContext {
    execution_log: RefCell<Vec<String>>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            execution_log: RefCell::new(Vec::new()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct TestError(String);

struct ParseVersion;

impl PipelineStep for ParseVersion {
    type Input = String;
    type Output = (u64, u64, u64);
    type Context = TestContext;
    type Error = TestError;

    fn name(&self) -> &'static str {
        "parse_version"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        ctx.execution_log
            .borrow_mut()
            .push(format!("parse_version: '{input}'"));
        let parts: Vec<u64> = input
            .split('.')
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|e| TestError(format!("bad version '{input}': {e}")))?;
        match parts.as_slice() {
            [major, minor, patch] => Ok((*major, *minor, *patch)),
            _ => Err(TestError(format!("bad version '{input}'"))),
        }
    }
}

struct BumpMinor;

impl PipelineStep for BumpMinor {
    type Input = (u64, u64, u64);
    type Output = (u64, u64, u64);
    type Context = TestContext;
    type Error = TestError;

    fn name(&self) -> &'static str {
        "bump_minor"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        (major, minor, _): Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        ctx.execution_log.borrow_mut().push("bump_minor".to_string());
        Ok((major, minor + 1, 0))
    }
}

struct Render {
    suffix: &'static str,
}

impl PipelineStep for Render {
    type Input = (u64, u64, u64);
    type Output = String;
    type Context = TestContext;
    type Error = TestError;

    fn name(&self) -> &'static str {
        "render"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        (major, minor, patch): Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        ctx.execution_log.borrow_mut().push("render".to_string());
        Ok(format!("{major}.{minor}.{patch}{}", self.suffix))
    }
}

#[test]
fn output_of_each_step_feeds_the_next() -> anyhow::Result<()> {
    let ctx = TestContext::new();
    let pipeline = PipelineBuilder::new()
        .first_step(ParseVersion)
        .then(BumpMinor)
        .then(Render {
            suffix: "-nightly.2016.05.11",
        })
        .build();

    let result = pipeline.execute(&ctx, "6.1.0".to_string())?;

    assert_eq!(result, "6.2.0-nightly.2016.05.11");
    assert_eq!(
        *ctx.execution_log.borrow(),
        vec!["parse_version: '6.1.0'", "bump_minor", "render"]
    );
    Ok(())
}

#[test]
fn failing_first_step_runs_nothing_else() {
    let ctx = TestContext::new();
    let pipeline = PipelineBuilder::new()
        .first_step(ParseVersion)
        .then(BumpMinor)
        .then(Render { suffix: "" })
        .build();

    let (result, audit) = pipeline.execute_with_audit(&ctx, "six".to_string());

    let err = result.expect_err("invalid input must abort");
    assert_eq!(err.step(), "parse_version");
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(ctx.execution_log.borrow().len(), 1);
    assert_eq!(audit.records().len(), 1);
    assert_eq!(audit.records()[0].status, StepStatus::Failed);
}

#[test]
fn successful_run_records_every_step() -> anyhow::Result<()> {
    let ctx = TestContext::new();
    let pipeline = PipelineBuilder::new()
        .first_step(ParseVersion)
        .then(BumpMinor)
        .then(Render { suffix: "" })
        .build();

    let (result, audit) = pipeline.execute_with_audit(&ctx, "1.0.3".to_string());

    assert_eq!(result?, "1.1.0");
    let names: Vec<&str> = audit.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["parse_version", "bump_minor", "render"]);
    assert!(
        audit
            .records()
            .iter()
            .all(|r| r.status == StepStatus::Executed)
    );
    Ok(())
}
