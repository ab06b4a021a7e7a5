use coho_core::{RepoId, RepoRegistry, VersionMap};
use tracing::{debug, info};

use crate::Result;
use crate::npm;
use crate::traits::CommandExecutor;

/// Looks up which version each repository's package currently carries under
/// a registry tag.
pub struct DistTagQuery<'a, E> {
    executor: &'a E,
    registry: &'a RepoRegistry,
}

impl<'a, E> DistTagQuery<'a, E>
where
    E: CommandExecutor,
{
    pub fn new(executor: &'a E, registry: &'a RepoRegistry) -> Self {
        Self { executor, registry }
    }

    /// Repositories whose package has never been published under `tag` are
    /// left out of the returned map.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry query cannot be run.
    pub fn execute(&self, repos: &[RepoId], tag: &str) -> Result<VersionMap> {
        let mut versions = VersionMap::new();

        for repo in self.registry.select(repos) {
            let command = npm::view_dist_tag(&repo.package_name, tag);
            let output = self.executor.run(&command)?;
            let version = output.trim();

            if version.is_empty() {
                debug!(repo = %repo.id, package = %repo.package_name, tag, "tag not published");
                continue;
            }

            info!(repo = %repo.id, version, tag, "found published version");
            versions.insert(repo.id, version);
        }

        Ok(versions)
    }
}
