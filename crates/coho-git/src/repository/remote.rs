use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Fetches the remote's configured refspecs, updating its tracking branches.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RemoteNotFound`] if `remote` is not configured, or
    /// a git error if the fetch fails.
    pub fn fetch(&self, remote: &str) -> Result<()> {
        let mut handle = self.inner.find_remote(remote).map_err(|e| match e.code() {
            git2::ErrorCode::NotFound => GitError::RemoteNotFound(remote.to_string()),
            _ => e.into(),
        })?;
        handle.fetch::<&str>(&[], None, None)?;
        Ok(())
    }
}
