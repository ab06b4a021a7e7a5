use coho_core::{RepoId, RepoRegistry};
use tracing::{debug, info};

use crate::Result;
use crate::traits::GitProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetResult {
    pub repo: RepoId,
    pub removed_files: usize,
    pub head: String,
}

/// Brings local checkouts in line with their remote branch.
pub struct CheckoutOperation<'a, G> {
    git: &'a G,
    registry: &'a RepoRegistry,
}

impl<'a, G> CheckoutOperation<'a, G>
where
    G: GitProvider,
{
    pub fn new(git: &'a G, registry: &'a RepoRegistry) -> Self {
        Self { git, registry }
    }

    /// Clones repositories that have no checkout yet and returns their ids.
    ///
    /// # Errors
    ///
    /// Returns an error if a clone fails.
    pub fn clone_missing(&self, repos: &[RepoId]) -> Result<Vec<RepoId>> {
        let mut cloned = Vec::new();
        for repo in self.registry.select(repos) {
            let dest = self.registry.dir(repo.id);
            if dest.exists() {
                debug!(repo = %repo.id, dir = %dest.display(), "already cloned");
                continue;
            }
            info!(repo = %repo.id, url = %repo.url, "cloning");
            self.git.clone_repo(&repo.url, &dest)?;
            cloned.push(repo.id);
        }
        Ok(cloned)
    }

    /// # Errors
    ///
    /// Returns an error if a fetch fails.
    pub fn update(&self, repos: &[RepoId], remote: &str) -> Result<()> {
        for id in repos {
            debug!(repo = %id, remote, "fetching");
            self.git.fetch(&self.registry.dir(*id), remote)?;
        }
        Ok(())
    }

    /// Drops untracked files and local commits in every checkout.
    ///
    /// # Errors
    ///
    /// Returns an error if cleaning or resetting a checkout fails.
    pub fn reset(&self, repos: &[RepoId], remote: &str, branch: &str) -> Result<Vec<ResetResult>> {
        let mut results = Vec::with_capacity(repos.len());
        for id in repos {
            let dir = self.registry.dir(*id);
            let removed = self.git.clean(&dir)?;
            let head = self.git.reset_to_remote(&dir, remote, branch)?;
            info!(
                repo = %id,
                removed = removed.len(),
                %head,
                "reset to {remote}/{branch}"
            );
            results.push(ResetResult {
                repo: *id,
                removed_files: removed.len(),
                head,
            });
        }
        Ok(results)
    }
}
