use std::path::Path;

use coho_manifest::{PackageManifest, read_manifest, write_manifest};

use crate::Result;
use crate::traits::ManifestStore;

/// Reads and writes `package.json` files on disk.
pub struct FileSystemManifestStore;

impl FileSystemManifestStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemManifestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestStore for FileSystemManifestStore {
    fn read(&self, path: &Path) -> Result<PackageManifest> {
        Ok(read_manifest(path)?)
    }

    fn write(&self, manifest: &PackageManifest) -> Result<()> {
        Ok(write_manifest(manifest)?)
    }
}
