use std::path::PathBuf;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Removes untracked files and directories from the work tree.
    ///
    /// Ignored files (e.g. installed dependencies) are kept. Returns the
    /// removed paths.
    ///
    /// # Errors
    ///
    /// Returns an error if status cannot be read or a path cannot be removed.
    pub fn clean(&self) -> Result<Vec<PathBuf>> {
        let statuses = self.inner.statuses(Some(
            git2::StatusOptions::new()
                .include_untracked(true)
                .include_ignored(false)
                .recurse_untracked_dirs(false),
        ))?;

        let mut removed = Vec::new();
        for entry in statuses.iter() {
            if !entry.status().contains(git2::Status::WT_NEW) {
                continue;
            }
            let Some(relative) = entry.path() else {
                continue;
            };
            let path = self.root().join(relative.trim_end_matches('/'));
            let result = if path.is_dir() {
                std::fs::remove_dir_all(&path)
            } else {
                std::fs::remove_file(&path)
            };
            result.map_err(|source| GitError::Remove {
                path: path.clone(),
                source,
            })?;
            removed.push(path);
        }

        Ok(removed)
    }
}
