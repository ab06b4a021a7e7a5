use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Hard-resets HEAD, index and work tree to `<remote>/<branch>`.
    ///
    /// Returns the sha HEAD now points at.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the tracking branch does not
    /// exist, or a git error if the reset fails.
    pub fn reset_to_remote(&self, remote: &str, branch: &str) -> Result<String> {
        let refspec = format!("refs/remotes/{remote}/{branch}");
        let commit = match self.inner.find_reference(&refspec) {
            Ok(reference) => reference.peel_to_commit()?,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                return Err(GitError::RefNotFound { refspec });
            }
            Err(e) => return Err(e.into()),
        };

        self.inner
            .reset(commit.as_object(), git2::ResetType::Hard, None)?;

        Ok(commit.id().to_string())
    }
}
