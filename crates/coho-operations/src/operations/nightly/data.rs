use coho_core::{RepoId, VersionMap};

use crate::operations::{ManifestUpdate, ResetResult, TestReport};

/// State threaded through the nightly pipeline. Each step fills in its part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NightlyOutput {
    /// Versions tagged nightly before this run, to be retracted at the end.
    pub previous_nightly: VersionMap,
    pub cloned: Vec<RepoId>,
    pub resets: Vec<ResetResult>,
    pub manifest_updates: Vec<ManifestUpdate>,
    /// Version stamped into the library; the CLI is pinned to it.
    pub nightly_version: Option<String>,
    pub test_report: TestReport,
    pub published: Vec<RepoId>,
    pub unpublished: Vec<String>,
}
