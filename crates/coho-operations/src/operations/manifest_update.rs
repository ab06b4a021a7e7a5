use std::path::PathBuf;

use coho_core::{RepoId, RepoRegistry};
use coho_version::{NightlySuffix, nightly_version};
use tracing::{debug, error};

use crate::Result;
use crate::traits::ManifestStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUpdate {
    pub repo: RepoId,
    pub manifest_path: PathBuf,
    pub old_version: String,
    pub new_version: String,
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUpdateOutput {
    pub updates: Vec<ManifestUpdate>,
    /// Nightly version given to the library; the CLI depends on exactly this.
    pub library_version: String,
}

/// Stamps the nightly version into the library and CLI manifests.
pub struct ManifestUpdateOperation<'a, M> {
    store: &'a M,
    registry: &'a RepoRegistry,
}

impl<'a, M> ManifestUpdateOperation<'a, M>
where
    M: ManifestStore,
{
    pub fn new(store: &'a M, registry: &'a RepoRegistry) -> Self {
        Self { store, registry }
    }

    /// The library manifest is always processed first, so the CLI's
    /// dependency on it can point at the library's new version.
    ///
    /// A manifest that cannot be written is logged and reported with
    /// `written: false`; the remaining manifests are still processed.
    ///
    /// # Errors
    ///
    /// Returns an error if a manifest cannot be read, its version is not
    /// valid semver, or the CLI manifest has no `dependencies` object.
    pub fn execute(&self, suffix: NightlySuffix) -> Result<ManifestUpdateOutput> {
        let library = self.registry.get(RepoId::Lib);
        let mut library_version = String::new();
        let mut updates = Vec::with_capacity(RepoId::NIGHTLY.len());

        for id in RepoId::NIGHTLY {
            let path = self.registry.manifest_path(id);
            let mut manifest = self.store.read(&path)?;
            let old_version = manifest.version()?.to_string();
            let new_version = nightly_version(&old_version, suffix)?;

            manifest.set_version(&new_version);
            match id {
                RepoId::Lib => library_version.clone_from(&new_version),
                RepoId::Cli => manifest.set_dependency(&library.package_name, &library_version)?,
            }

            let written = match self.store.write(&manifest) {
                Ok(()) => true,
                Err(err) => {
                    error!(
                        repo = %id,
                        path = %path.display(),
                        error = %err,
                        "failed to write manifest"
                    );
                    false
                }
            };

            debug!(
                repo = %id,
                old = %old_version,
                new = %new_version,
                written,
                "updated manifest version"
            );
            updates.push(ManifestUpdate {
                repo: id,
                manifest_path: path,
                old_version,
                new_version,
                written,
            });
        }

        Ok(ManifestUpdateOutput {
            updates,
            library_version,
        })
    }
}
