mod error;
mod manifest;
mod reader;
mod writer;

pub use error::ManifestError;
pub use manifest::PackageManifest;
pub use reader::read_manifest;
pub use writer::{to_pretty_json, write_manifest};
