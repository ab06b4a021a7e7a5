use std::path::{Path, PathBuf};

use coho_git::Repository;

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        Repository::clone_remote(url, dest)?;
        Ok(())
    }

    fn fetch(&self, repo_dir: &Path, remote: &str) -> Result<()> {
        let repo = Repository::open(repo_dir)?;
        Ok(repo.fetch(remote)?)
    }

    fn clean(&self, repo_dir: &Path) -> Result<Vec<PathBuf>> {
        let repo = Repository::open(repo_dir)?;
        Ok(repo.clean()?)
    }

    fn reset_to_remote(&self, repo_dir: &Path, remote: &str, branch: &str) -> Result<String> {
        let repo = Repository::open(repo_dir)?;
        Ok(repo.reset_to_remote(remote, branch)?)
    }
}
