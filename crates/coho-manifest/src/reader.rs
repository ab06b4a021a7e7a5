use std::path::Path;

use serde_json::Value;

use crate::error::ManifestError;
use crate::manifest::PackageManifest;

/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read,
/// `ManifestError::Parse` if the JSON is malformed, or
/// `ManifestError::NotAnObject` if the top-level value is not an object.
pub fn read_manifest(path: &Path) -> Result<PackageManifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    PackageManifest::from_value(path, value)
}
