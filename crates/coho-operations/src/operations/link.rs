use coho_core::{RepoId, RepoRegistry};
use tracing::info;

use crate::Result;
use crate::npm;
use crate::traits::CommandExecutor;

/// Wires the CLI checkout to the library checkout and installs the
/// remaining CLI dependencies.
pub struct LinkOperation<'a, E> {
    executor: &'a E,
    registry: &'a RepoRegistry,
}

impl<'a, E> LinkOperation<'a, E>
where
    E: CommandExecutor,
{
    pub fn new(executor: &'a E, registry: &'a RepoRegistry) -> Self {
        Self { executor, registry }
    }

    /// # Errors
    ///
    /// Returns an error if either `npm link` invocation fails.
    pub fn link(&self) -> Result<()> {
        let lib = self.registry.get(RepoId::Lib);
        info!(package = %lib.package_name, "linking library into cli");
        self.executor
            .run(&npm::link(&self.registry.dir(RepoId::Lib)))?;
        self.executor.run(&npm::link_package(
            &self.registry.dir(RepoId::Cli),
            &lib.package_name,
        ))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `npm install` fails.
    pub fn install(&self) -> Result<()> {
        info!("installing cli dependencies");
        self.executor
            .run(&npm::install(&self.registry.dir(RepoId::Cli)))?;
        Ok(())
    }
}
