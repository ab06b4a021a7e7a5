use coho_core::{RepoId, RepoRegistry, UnpublishOptions};
use tracing::{info, warn};

use crate::Result;
use crate::error::OperationError;
use crate::npm;
use crate::traits::CommandExecutor;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpublishOutput {
    /// `<repo-id>@<version>` specs, in the order they were issued.
    pub unpublished: Vec<String>,
    /// Requested repositories with no version to remove.
    pub skipped: Vec<RepoId>,
}

/// Retracts previously published versions from the registry.
pub struct UnpublishOperation<'a, E> {
    executor: &'a E,
    registry: &'a RepoRegistry,
}

impl<'a, E> UnpublishOperation<'a, E>
where
    E: CommandExecutor,
{
    pub fn new(executor: &'a E, registry: &'a RepoRegistry) -> Self {
        Self { executor, registry }
    }

    /// Accepts the version map either still serialized or already parsed;
    /// both forms issue the same commands.
    ///
    /// # Errors
    ///
    /// Returns an error if a serialized version map cannot be parsed, or
    /// [`OperationError::UnpublishFailed`] for the first failing unpublish.
    pub fn execute(&self, options: UnpublishOptions) -> Result<UnpublishOutput> {
        let versions = options.version.into_map()?;
        let mut output = UnpublishOutput::default();

        for id in &options.repos {
            let Some(version) = versions.get(*id) else {
                warn!(repo = %id, "no version to unpublish, skipping");
                output.skipped.push(*id);
                continue;
            };

            let spec = format!("{id}@{version}");
            info!(%spec, pretend = options.pretend, "unpublishing");
            let command = npm::unpublish(&self.registry.dir(*id), &spec).pretend(options.pretend);
            self.executor
                .run(&command)
                .map_err(|source| OperationError::UnpublishFailed {
                    spec: spec.clone(),
                    source: Box::new(source),
                })?;
            output.unpublished.push(spec);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use coho_core::{VersionArg, VersionMap};

    use super::*;
    use crate::mocks::MockCommandExecutor;

    const RAW: &str =
        r#"{ "cli": "6.2.0-nightly.2016.5.11+123345", "lib": "6.2.0-nightly.2016.5.11+234456" }"#;

    fn parsed() -> VersionMap {
        let mut map = VersionMap::new();
        map.insert(RepoId::Cli, "6.2.0-nightly.2016.5.11+123345");
        map.insert(RepoId::Lib, "6.2.0-nightly.2016.5.11+234456");
        map
    }

    fn run(version: VersionArg) -> anyhow::Result<Vec<String>> {
        let executor = MockCommandExecutor::new();
        let registry = RepoRegistry::new("/work");
        UnpublishOperation::new(&executor, &registry).execute(UnpublishOptions {
            repos: vec![RepoId::Cli, RepoId::Lib],
            version,
            pretend: true,
        })?;
        Ok(executor.command_lines())
    }

    #[test]
    fn raw_and_parsed_versions_issue_identical_commands() -> anyhow::Result<()> {
        let from_raw = run(VersionArg::Raw(RAW.to_string()))?;
        let from_parsed = run(VersionArg::Parsed(parsed()))?;

        assert_eq!(from_raw, from_parsed);
        assert_eq!(
            from_raw,
            [
                "npm unpublish cli@6.2.0-nightly.2016.5.11+123345",
                "npm unpublish lib@6.2.0-nightly.2016.5.11+234456",
            ]
        );
        Ok(())
    }

    #[test]
    fn repository_without_version_is_skipped() -> anyhow::Result<()> {
        let executor = MockCommandExecutor::new();
        let registry = RepoRegistry::new("/work");
        let mut versions = VersionMap::new();
        versions.insert(RepoId::Lib, "6.2.0-nightly.2016.05.10");

        let output = UnpublishOperation::new(&executor, &registry).execute(
            UnpublishOptions::from_map(vec![RepoId::Lib, RepoId::Cli], versions, false),
        )?;

        assert_eq!(output.unpublished, ["lib@6.2.0-nightly.2016.05.10"]);
        assert_eq!(output.skipped, vec![RepoId::Cli]);
        assert_eq!(executor.executed().len(), 1);
        Ok(())
    }

    #[test]
    fn malformed_raw_version_runs_nothing() {
        let executor = MockCommandExecutor::new();
        let registry = RepoRegistry::new("/work");

        let result = UnpublishOperation::new(&executor, &registry).execute(UnpublishOptions {
            repos: vec![RepoId::Cli],
            version: VersionArg::Raw("6.2.0".to_string()),
            pretend: false,
        });

        assert!(matches!(result, Err(OperationError::Core(_))));
        assert!(executor.commands().is_empty());
    }

    #[test]
    fn failure_names_the_package_version() {
        let registry = RepoRegistry::new("/work");
        let executor = MockCommandExecutor::new().with_failure(
            "npm unpublish lib@6.2.0-nightly.2016.05.10",
            registry.dir(RepoId::Lib),
        );
        let mut versions = VersionMap::new();
        versions.insert(RepoId::Lib, "6.2.0-nightly.2016.05.10");

        let result = UnpublishOperation::new(&executor, &registry)
            .execute(UnpublishOptions::from_map(vec![RepoId::Lib], versions, false));

        assert!(matches!(
            result,
            Err(OperationError::UnpublishFailed { spec, .. }) if spec == "lib@6.2.0-nightly.2016.05.10"
        ));
    }
}
