use std::path::{Path, PathBuf};

use coho_core::RepoId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Core(#[from] coho_core::CoreError),

    #[error(transparent)]
    Git(#[from] coho_git::GitError),

    #[error(transparent)]
    Manifest(#[from] coho_manifest::ManifestError),

    #[error("version calculation failed")]
    Version(#[from] coho_version::VersionError),

    #[error("failed to start '{command}'{}", format_dir(.dir.as_deref()))]
    CommandSpawn {
        command: String,
        dir: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed{} ({status}){}", format_dir(.dir.as_deref()), format_stderr(.stderr))]
    CommandFailed {
        command: String,
        dir: Option<PathBuf>,
        status: String,
        stderr: String,
    },

    #[error("tests failed for '{repo}'")]
    TestsFailed {
        repo: RepoId,
        #[source]
        source: Box<OperationError>,
    },

    #[error("failed to publish '{repo}' under tag '{tag}'")]
    PublishFailed {
        repo: RepoId,
        tag: String,
        #[source]
        source: Box<OperationError>,
    },

    #[error("failed to unpublish '{spec}'")]
    UnpublishFailed {
        spec: String,
        #[source]
        source: Box<OperationError>,
    },

    #[error("nightly release aborted at step '{step}'")]
    NightlyAborted {
        step: String,
        #[source]
        source: Box<OperationError>,
    },
}

fn format_dir(dir: Option<&Path>) -> String {
    dir.map(|dir| format!(" in '{}'", dir.display()))
        .unwrap_or_default()
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

impl From<coho_pipeline::PipelineError<OperationError>> for OperationError {
    fn from(err: coho_pipeline::PipelineError<OperationError>) -> Self {
        let step = err.step().to_string();
        Self::NightlyAborted {
            step,
            source: Box::new(err.into_source()),
        }
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
