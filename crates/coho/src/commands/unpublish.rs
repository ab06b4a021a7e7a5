use clap::Args;
use coho_core::{RepoId, RepoRegistry, UnpublishOptions, VersionArg};
use coho_operations::operations::UnpublishOperation;
use coho_operations::providers::SystemCommandExecutor;

use crate::error::Result;

#[derive(Args)]
pub(crate) struct UnpublishArgs {
    /// Which repo(s) to unpublish
    #[arg(short = 'r', long = "repos", required = true, value_enum)]
    repos: Vec<RepoId>,

    /// Which version to unpublish, as JSON mapping repo id to version,
    /// e.g. '{"cli": "6.2.0-nightly.2016.05.11", "lib": "6.2.0-nightly.2016.05.11"}'
    #[arg(long, required = true)]
    version: VersionArg,

    /// Don't actually run commands, just print what would be run
    #[arg(long)]
    pretend: bool,
}

pub(crate) fn run(args: UnpublishArgs, registry: &RepoRegistry) -> Result<()> {
    let executor = SystemCommandExecutor::new();
    let options = UnpublishOptions {
        repos: args.repos,
        version: args.version,
        pretend: args.pretend,
    };

    let output = UnpublishOperation::new(&executor, registry).execute(options)?;

    if !args.pretend {
        for spec in &output.unpublished {
            println!("Unpublished {spec}");
        }
    }
    for repo in &output.skipped {
        println!("Skipped {repo}: no version given");
    }
    Ok(())
}
