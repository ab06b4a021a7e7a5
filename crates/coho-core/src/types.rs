use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::version_map::{VersionArg, VersionMap};

/// Logical id of a repository known to the release tooling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RepoId {
    Lib,
    Cli,
}

impl RepoId {
    /// Repositories taking part in a nightly release, in manifest-update order.
    pub const NIGHTLY: [Self; 2] = [Self::Lib, Self::Cli];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lib => "lib",
            Self::Cli => "cli",
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NightlyOptions {
    pub pretend: bool,
    pub ignore_test_failures: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    pub tag: String,
    pub repos: Vec<RepoId>,
    pub pretend: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpublishOptions {
    pub repos: Vec<RepoId>,
    pub version: VersionArg,
    pub pretend: bool,
}

impl UnpublishOptions {
    #[must_use]
    pub fn from_map(repos: Vec<RepoId>, version: VersionMap, pretend: bool) -> Self {
        Self {
            repos,
            version: VersionArg::Parsed(version),
            pretend,
        }
    }
}
