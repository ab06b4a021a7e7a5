use clap::Args;
use coho_core::{PublishOptions, RepoId, RepoRegistry};
use coho_operations::operations::PublishOperation;
use coho_operations::providers::SystemCommandExecutor;

use crate::error::Result;

#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Which npm tag to publish to
    #[arg(long, required = true)]
    tag: String,

    /// Which repo(s) to publish
    #[arg(short = 'r', long = "repos", required = true, value_enum)]
    repos: Vec<RepoId>,

    /// Don't actually run commands, just print what would be run
    #[arg(long)]
    pretend: bool,
}

pub(crate) fn run(args: PublishArgs, registry: &RepoRegistry) -> Result<()> {
    let executor = SystemCommandExecutor::new();
    let options = PublishOptions {
        tag: args.tag,
        repos: args.repos,
        pretend: args.pretend,
    };

    let output = PublishOperation::new(&executor, registry).execute(&options)?;

    if !output.pretend {
        for repo in &output.published {
            println!("Published {repo} under '{}'", output.tag);
        }
    }
    Ok(())
}
