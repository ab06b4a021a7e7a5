use std::sync::Arc;

use clap::Args;
use coho_core::{NightlyOptions, RepoRegistry};
use coho_operations::operations::{NightlyContext, NightlyOperation, NightlyOutput};
use coho_operations::providers::{
    FileSystemManifestStore, Git2Provider, SystemCommandExecutor,
};

use crate::config::CohoConfig;
use crate::error::Result;

#[derive(Args)]
pub(crate) struct NightlyArgs {
    /// Don't actually publish to npm, just print what would be run
    #[arg(long)]
    pretend: bool,

    /// Run the tests for cli and lib but don't fail the build if they fail
    #[arg(long = "ignore-test-failures", alias = "ignoreTestFailures")]
    ignore_test_failures: bool,
}

pub(crate) fn run(args: NightlyArgs, registry: RepoRegistry, config: &CohoConfig) -> Result<()> {
    let options = NightlyOptions {
        pretend: args.pretend,
        ignore_test_failures: args.ignore_test_failures,
    };
    let context = NightlyContext::new(
        Arc::new(SystemCommandExecutor::new()),
        Arc::new(Git2Provider::new()),
        Arc::new(FileSystemManifestStore::new()),
        registry,
        options,
    )
    .with_settings(config.nightly_settings());

    let (result, audit) = NightlyOperation::new(context).execute_with_audit();

    println!("{}", audit.summary());
    let output = result?;
    print_output(&output, args.pretend);
    Ok(())
}

fn print_output(output: &NightlyOutput, pretend: bool) {
    println!();
    if let Some(version) = &output.nightly_version {
        println!("Nightly version: {version}");
    }
    for skipped in &output.test_report.skipped_failures {
        println!("Tests failed for {skipped} (ignored)");
    }
    let verb = if pretend { "Would publish" } else { "Published" };
    for repo in &output.published {
        println!("{verb}: {repo}");
    }
    let verb = if pretend { "Would unpublish" } else { "Unpublished" };
    for spec in &output.unpublished {
        println!("{verb}: {spec}");
    }
}
