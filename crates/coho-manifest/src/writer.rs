use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::ManifestError;
use crate::manifest::PackageManifest;

const INDENT: &[u8] = b"    ";

/// Renders the manifest as JSON indented with four spaces.
///
/// # Errors
///
/// Returns `ManifestError::Serialize` if serialization fails.
pub fn to_pretty_json(manifest: &PackageManifest) -> Result<String, ManifestError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));

    manifest
        .fields()
        .serialize(&mut serializer)
        .map_err(|source| ManifestError::Serialize {
            path: manifest.path().to_path_buf(),
            source,
        })?;

    String::from_utf8(buf).map_err(|source| ManifestError::Encoding {
        path: manifest.path().to_path_buf(),
        source,
    })
}

/// Overwrites the file the manifest was read from.
///
/// # Errors
///
/// Returns an error if the manifest cannot be serialized or written.
pub fn write_manifest(manifest: &PackageManifest) -> Result<(), ManifestError> {
    let content = to_pretty_json(manifest)?;

    std::fs::write(manifest.path(), content).map_err(|source| ManifestError::Write {
        path: manifest.path().to_path_buf(),
        source,
    })
}
