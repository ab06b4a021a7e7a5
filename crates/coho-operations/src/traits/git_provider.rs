use std::path::{Path, PathBuf};

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the clone fails.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the fetch fails.
    fn fetch(&self, repo_dir: &Path, remote: &str) -> Result<()>;

    /// Removes untracked files, keeping ignored ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or a file cannot be
    /// removed.
    fn clean(&self, repo_dir: &Path) -> Result<Vec<PathBuf>>;

    /// Hard-resets the checkout to `<remote>/<branch>` and returns the new
    /// HEAD commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote branch is unknown or the reset fails.
    fn reset_to_remote(&self, repo_dir: &Path, remote: &str, branch: &str) -> Result<String>;
}
