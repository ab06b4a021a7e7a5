mod nightly;
mod publish;
mod unpublish;

use std::path::Path;

use clap::Subcommand;

pub(crate) use nightly::NightlyArgs;
pub(crate) use publish::PublishArgs;
pub(crate) use unpublish::UnpublishArgs;

use crate::config::CohoConfig;
use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Publish the CLI and library to npm under the nightly tag
    Nightly(NightlyArgs),
    /// Publish the current version of repositories under an npm tag
    #[command(name = "npm-publish")]
    NpmPublish(PublishArgs),
    /// Unpublish a nightly version of repositories from npm
    #[command(name = "npm-unpublish-nightly")]
    NpmUnpublishNightly(UnpublishArgs),
}

impl Commands {
    pub(crate) fn execute(self, root: &Path, config: &CohoConfig) -> Result<()> {
        let registry = config.registry(root);
        match self {
            Self::Nightly(args) => nightly::run(args, registry, config),
            Self::NpmPublish(args) => publish::run(args, &registry),
            Self::NpmUnpublishNightly(args) => unpublish::run(args, &registry),
        }
    }
}
