use std::marker::PhantomData;

use coho_core::{PublishOptions, RepoId, UnpublishOptions};
use coho_pipeline::PipelineStep;
use tracing::{debug, info};

use super::context::NightlyContext;
use super::data::NightlyOutput;
use crate::OperationError;
use crate::operations::{
    CheckoutOperation, DistTagQuery, LinkOperation, ManifestUpdateOperation, PublishOperation,
    TestRunner, UnpublishOperation,
};
use crate::traits::{CommandExecutor, GitProvider, ManifestStore};

/// Test suites run CLI first.
const TEST_ORDER: [RepoId; 2] = [RepoId::Cli, RepoId::Lib];

macro_rules! nightly_step {
    ($(#[$meta:meta])* $step:ident) => {
        $(#[$meta])*
        pub struct $step<E, G, M> {
            _marker: PhantomData<(E, G, M)>,
        }

        impl<E, G, M> $step<E, G, M> {
            #[must_use]
            pub fn new() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }
        }

        impl<E, G, M> Default for $step<E, G, M> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

nightly_step!(
    /// Remembers what the registry currently tags as nightly.
    QueryPreviousNightlyStep
);
nightly_step!(CloneReposStep);
nightly_step!(UpdateReposStep);
nightly_step!(
    /// Drops local changes and syncs every checkout with the remote branch.
    ResetReposStep
);
nightly_step!(UpdateManifestsStep);
nightly_step!(LinkPackagesStep);
nightly_step!(InstallDependenciesStep);
nightly_step!(RunTestsStep);
nightly_step!(PublishNightlyStep);
nightly_step!(UnpublishPreviousNightlyStep);

impl<E, G, M> PipelineStep for QueryPreviousNightlyStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "query_previous_nightly"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        input.previous_nightly = DistTagQuery::new(ctx.executor(), ctx.registry())
            .execute(&RepoId::NIGHTLY, &ctx.settings().tag)?;
        Ok(input)
    }
}

impl<E, G, M> PipelineStep for CloneReposStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "clone_repos"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        input.cloned =
            CheckoutOperation::new(ctx.git(), ctx.registry()).clone_missing(&RepoId::NIGHTLY)?;
        Ok(input)
    }
}

impl<E, G, M> PipelineStep for UpdateReposStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "update_repos"
    }

    fn execute(&self, ctx: &Self::Context, input: Self::Input) -> Result<Self::Output, Self::Error> {
        CheckoutOperation::new(ctx.git(), ctx.registry())
            .update(&RepoId::NIGHTLY, &ctx.settings().remote)?;
        Ok(input)
    }
}

impl<E, G, M> PipelineStep for ResetReposStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "reset_repos"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        let settings = ctx.settings();
        input.resets = CheckoutOperation::new(ctx.git(), ctx.registry()).reset(
            &RepoId::NIGHTLY,
            &settings.remote,
            &settings.branch,
        )?;
        Ok(input)
    }
}

impl<E, G, M> PipelineStep for UpdateManifestsStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "update_manifests"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        debug!(suffix = %ctx.suffix(), "computed nightly suffix");
        let output = ManifestUpdateOperation::new(ctx.manifest_store(), ctx.registry())
            .execute(ctx.suffix())?;
        info!(version = %output.library_version, "nightly version");
        input.manifest_updates = output.updates;
        input.nightly_version = Some(output.library_version);
        Ok(input)
    }
}

impl<E, G, M> PipelineStep for LinkPackagesStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "link_packages"
    }

    fn execute(&self, ctx: &Self::Context, input: Self::Input) -> Result<Self::Output, Self::Error> {
        LinkOperation::new(ctx.executor(), ctx.registry()).link()?;
        Ok(input)
    }
}

impl<E, G, M> PipelineStep for InstallDependenciesStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "install_dependencies"
    }

    fn execute(&self, ctx: &Self::Context, input: Self::Input) -> Result<Self::Output, Self::Error> {
        LinkOperation::new(ctx.executor(), ctx.registry()).install()?;
        Ok(input)
    }
}

impl<E, G, M> PipelineStep for RunTestsStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "run_tests"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        input.test_report = TestRunner::new(ctx.executor(), ctx.registry())
            .execute(&TEST_ORDER, ctx.options().ignore_test_failures)?;
        Ok(input)
    }
}

impl<E, G, M> PipelineStep for PublishNightlyStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "publish_nightly"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        let options = PublishOptions {
            tag: ctx.settings().tag.clone(),
            repos: RepoId::NIGHTLY.to_vec(),
            pretend: ctx.options().pretend,
        };
        input.published = PublishOperation::new(ctx.executor(), ctx.registry())
            .execute(&options)?
            .published;
        Ok(input)
    }
}

impl<E, G, M> PipelineStep for UnpublishPreviousNightlyStep<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    type Input = NightlyOutput;
    type Output = NightlyOutput;
    type Context = NightlyContext<E, G, M>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "unpublish_previous_nightly"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        let options = UnpublishOptions::from_map(
            RepoId::NIGHTLY.to_vec(),
            input.previous_nightly.clone(),
            ctx.options().pretend,
        );
        input.unpublished = UnpublishOperation::new(ctx.executor(), ctx.registry())
            .execute(options)?
            .unpublished;
        Ok(input)
    }
}
