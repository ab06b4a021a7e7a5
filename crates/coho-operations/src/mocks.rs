use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use coho_manifest::PackageManifest;
use serde_json::Value;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{CommandExecutor, GitProvider, ManifestStore};
use crate::types::Command;

/// Records every command and answers from canned responses.
///
/// Pretend commands are recorded but never fail, mirroring the system
/// executor.
pub struct MockCommandExecutor {
    commands: Mutex<Vec<Command>>,
    responses: HashMap<String, String>,
    failures: HashSet<(String, Option<PathBuf>)>,
}

impl MockCommandExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Mutex::new(Vec::new()),
            responses: HashMap::new(),
            failures: HashSet::new(),
        }
    }

    /// Answer `command_line` (e.g. `npm view cordova dist-tags.nightly`) with
    /// `stdout`.
    #[must_use]
    pub fn with_response(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), stdout.to_string());
        self
    }

    /// Make `command_line` exit unsuccessfully when run in `dir`.
    #[must_use]
    pub fn with_failure(mut self, command_line: &str, dir: impl Into<PathBuf>) -> Self {
        self.failures
            .insert((command_line.to_string(), Some(dir.into())));
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().expect("lock poisoned").clone()
    }

    /// Command lines in the order they were run.
    #[must_use]
    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn executed(&self) -> Vec<Command> {
        self.commands()
            .into_iter()
            .filter(|command| !command.is_pretend())
            .collect()
    }

    #[must_use]
    pub fn ran(&self, command_line: &str) -> bool {
        self.command_lines().iter().any(|line| line == command_line)
    }
}

impl Default for MockCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for MockCommandExecutor {
    fn run(&self, command: &Command) -> Result<String> {
        self.commands
            .lock()
            .expect("lock poisoned")
            .push(command.clone());

        if command.is_pretend() {
            return Ok(String::new());
        }

        let line = command.to_string();
        if self
            .failures
            .contains(&(line.clone(), command.dir().map(Path::to_path_buf)))
        {
            return Err(OperationError::CommandFailed {
                command: line,
                dir: command.dir().map(Path::to_path_buf),
                status: "exit status: 1".to_string(),
                stderr: String::new(),
            });
        }

        Ok(self.responses.get(&line).cloned().unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Clone { url: String, dest: PathBuf },
    Fetch { dir: PathBuf, remote: String },
    Clean { dir: PathBuf },
    Reset { dir: PathBuf, target: String },
}

pub struct MockGitProvider {
    calls: Mutex<Vec<GitCall>>,
    fail_fetch: bool,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_fetch: false,
        }
    }

    #[must_use]
    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn record(&self, call: GitCall) {
        self.calls.lock().expect("lock poisoned").push(call);
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        self.record(GitCall::Clone {
            url: url.to_string(),
            dest: dest.to_path_buf(),
        });
        Ok(())
    }

    fn fetch(&self, repo_dir: &Path, remote: &str) -> Result<()> {
        self.record(GitCall::Fetch {
            dir: repo_dir.to_path_buf(),
            remote: remote.to_string(),
        });
        if self.fail_fetch {
            return Err(coho_git::GitError::RemoteNotFound(remote.to_string()).into());
        }
        Ok(())
    }

    fn clean(&self, repo_dir: &Path) -> Result<Vec<PathBuf>> {
        self.record(GitCall::Clean {
            dir: repo_dir.to_path_buf(),
        });
        Ok(Vec::new())
    }

    fn reset_to_remote(&self, repo_dir: &Path, remote: &str, branch: &str) -> Result<String> {
        self.record(GitCall::Reset {
            dir: repo_dir.to_path_buf(),
            target: format!("{remote}/{branch}"),
        });
        Ok("0000000000000000000000000000000000000000".to_string())
    }
}

/// In-memory manifests keyed by path.
pub struct MockManifestStore {
    manifests: Mutex<HashMap<PathBuf, PackageManifest>>,
    writes: Mutex<Vec<PathBuf>>,
    failing_writes: HashSet<PathBuf>,
}

impl MockManifestStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            manifests: Mutex::new(HashMap::new()),
            writes: Mutex::new(Vec::new()),
            failing_writes: HashSet::new(),
        }
    }

    /// # Panics
    ///
    /// Panics if `value` is not a JSON object.
    #[must_use]
    pub fn with_manifest(self, path: impl Into<PathBuf>, value: Value) -> Self {
        let path = path.into();
        let manifest =
            PackageManifest::from_value(path.clone(), value).expect("manifest must be an object");
        self.manifests
            .lock()
            .expect("lock poisoned")
            .insert(path, manifest);
        self
    }

    #[must_use]
    pub fn with_failing_write(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_writes.insert(path.into());
        self
    }

    /// Paths in the order they were successfully written.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn manifest(&self, path: &Path) -> Option<PackageManifest> {
        self.manifests
            .lock()
            .expect("lock poisoned")
            .get(path)
            .cloned()
    }
}

impl Default for MockManifestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestStore for MockManifestStore {
    fn read(&self, path: &Path) -> Result<PackageManifest> {
        self.manifests
            .lock()
            .expect("lock poisoned")
            .get(path)
            .cloned()
            .ok_or_else(|| {
                coho_manifest::ManifestError::Read {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }
                .into()
            })
    }

    fn write(&self, manifest: &PackageManifest) -> Result<()> {
        if self.failing_writes.contains(manifest.path()) {
            return Err(coho_manifest::ManifestError::Write {
                path: manifest.path().to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .into());
        }
        self.manifests
            .lock()
            .expect("lock poisoned")
            .insert(manifest.path().to_path_buf(), manifest.clone());
        self.writes
            .lock()
            .expect("lock poisoned")
            .push(manifest.path().to_path_buf());
        Ok(())
    }
}
