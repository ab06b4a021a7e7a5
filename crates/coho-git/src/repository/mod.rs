mod clean;
mod remote;
mod reset;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if `path` is not the work tree of a
    /// git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::open(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;
        Self::from_inner(inner, path)
    }

    /// # Errors
    ///
    /// Returns [`GitError::Clone`] if the clone fails.
    pub fn clone_remote(url: &str, dest: &Path) -> Result<Self> {
        let inner = git2::Repository::clone(url, dest).map_err(|source| GitError::Clone {
            url: url.to_string(),
            path: dest.to_path_buf(),
            source,
        })?;
        Self::from_inner(inner, dest)
    }

    fn from_inner(inner: git2::Repository, path: &Path) -> Result<Self> {
        let root = inner
            .workdir()
            .ok_or_else(|| GitError::NotARepository {
                path: path.to_path_buf(),
            })?
            .to_path_buf();
        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
