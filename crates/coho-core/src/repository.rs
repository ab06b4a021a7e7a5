use std::path::{Path, PathBuf};

use crate::types::RepoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: RepoId,
    /// Directory name of the checkout below the registry root.
    pub dir_name: String,
    /// Name the package is published under.
    pub package_name: String,
    pub url: String,
}

impl Repository {
    #[must_use]
    pub fn known(id: RepoId) -> Self {
        let (dir_name, package_name) = match id {
            RepoId::Lib => ("cordova-lib", "cordova-lib"),
            RepoId::Cli => ("cordova-cli", "cordova"),
        };
        Self {
            id,
            dir_name: dir_name.to_string(),
            package_name: package_name.to_string(),
            url: format!("https://github.com/apache/{dir_name}.git"),
        }
    }
}

/// The fixed set of repositories, rooted at the directory holding their
/// checkouts.
#[derive(Debug, Clone)]
pub struct RepoRegistry {
    root: PathBuf,
    repos: Vec<Repository>,
}

impl RepoRegistry {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            repos: RepoId::NIGHTLY.into_iter().map(Repository::known).collect(),
        }
    }

    #[must_use]
    pub fn with_url(mut self, id: RepoId, url: impl Into<String>) -> Self {
        let url = url.into();
        for repo in &mut self.repos {
            if repo.id == id {
                repo.url.clone_from(&url);
            }
        }
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every id is registered at construction, so lookup cannot fail.
    #[must_use]
    pub fn get(&self, id: RepoId) -> &Repository {
        self.repos
            .iter()
            .find(|repo| repo.id == id)
            .unwrap_or_else(|| unreachable!("repository '{id}' is always registered"))
    }

    #[must_use]
    pub fn dir(&self, id: RepoId) -> PathBuf {
        self.root.join(&self.get(id).dir_name)
    }

    #[must_use]
    pub fn manifest_path(&self, id: RepoId) -> PathBuf {
        self.dir(id).join("package.json")
    }

    /// Resolves ids to descriptors, keeping the caller's order.
    #[must_use]
    pub fn select(&self, ids: &[RepoId]) -> Vec<&Repository> {
        ids.iter().map(|id| self.get(*id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_repositories_have_package_names() {
        assert_eq!(Repository::known(RepoId::Lib).package_name, "cordova-lib");
        assert_eq!(Repository::known(RepoId::Cli).package_name, "cordova");
    }

    #[test]
    fn dir_is_below_root() {
        let registry = RepoRegistry::new("/work");

        assert_eq!(registry.dir(RepoId::Cli), PathBuf::from("/work/cordova-cli"));
        assert_eq!(
            registry.manifest_path(RepoId::Lib),
            PathBuf::from("/work/cordova-lib/package.json")
        );
    }

    #[test]
    fn select_preserves_requested_order() {
        let registry = RepoRegistry::new("/work");

        let ids: Vec<RepoId> = registry
            .select(&[RepoId::Cli, RepoId::Lib])
            .iter()
            .map(|repo| repo.id)
            .collect();

        assert_eq!(ids, vec![RepoId::Cli, RepoId::Lib]);
    }

    #[test]
    fn with_url_overrides_only_target() {
        let registry = RepoRegistry::new("/work").with_url(RepoId::Lib, "file:///mirror/lib");

        assert_eq!(registry.get(RepoId::Lib).url, "file:///mirror/lib");
        assert_eq!(
            registry.get(RepoId::Cli).url,
            "https://github.com/apache/cordova-cli.git"
        );
    }
}
