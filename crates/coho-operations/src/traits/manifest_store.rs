use std::path::Path;

use coho_manifest::PackageManifest;

use crate::Result;

pub trait ManifestStore: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    fn read(&self, path: &Path) -> Result<PackageManifest>;

    /// Persists `manifest` at its own path.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be serialized or written.
    fn write(&self, manifest: &PackageManifest) -> Result<()>;
}
