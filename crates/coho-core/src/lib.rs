pub mod error;
mod repository;
pub mod types;
mod version_map;

pub use error::*;
pub use repository::{RepoRegistry, Repository};
pub use types::*;
pub use version_map::{VersionArg, VersionMap};
