use coho_core::{RepoId, RepoRegistry};
use tracing::{info, warn};

use crate::Result;
use crate::error::OperationError;
use crate::npm;
use crate::traits::CommandExecutor;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestReport {
    pub passed: Vec<RepoId>,
    /// Repositories whose tests failed while failures were ignored.
    pub skipped_failures: Vec<RepoId>,
}

pub struct TestRunner<'a, E> {
    executor: &'a E,
    registry: &'a RepoRegistry,
}

impl<'a, E> TestRunner<'a, E>
where
    E: CommandExecutor,
{
    pub fn new(executor: &'a E, registry: &'a RepoRegistry) -> Self {
        Self { executor, registry }
    }

    /// Runs each repository's test suite in order, streaming its output.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::TestsFailed`] for the first failing suite
    /// unless `ignore_failures` is set. Repositories after it are not tested.
    pub fn execute(&self, repos: &[RepoId], ignore_failures: bool) -> Result<TestReport> {
        let mut report = TestReport::default();

        for id in repos {
            info!(repo = %id, "running tests");
            match self.executor.run(&npm::test(&self.registry.dir(*id))) {
                Ok(_) => report.passed.push(*id),
                Err(err) if ignore_failures => {
                    warn!(
                        repo = %id,
                        error = %err,
                        "Skipping failing tests due to \"ignore-test-failures\" flag"
                    );
                    report.skipped_failures.push(*id);
                }
                Err(err) => {
                    return Err(OperationError::TestsFailed {
                        repo: *id,
                        source: Box::new(err),
                    });
                }
            }
        }

        Ok(report)
    }
}
