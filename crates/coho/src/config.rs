use std::path::{Path, PathBuf};

use coho_core::{RepoId, RepoRegistry};
use coho_operations::NightlySettings;
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

pub(crate) const CONFIG_FILE: &str = "coho.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Optional settings read from `coho.toml` in the checkout root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CohoConfig {
    git: GitConfig,
    nightly: NightlyConfig,
    repos: IndexMap<RepoId, RepoConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GitConfig {
    remote: String,
    branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        let settings = NightlySettings::default();
        Self {
            remote: settings.remote,
            branch: settings.branch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct NightlyConfig {
    tag: String,
}

impl Default for NightlyConfig {
    fn default() -> Self {
        Self {
            tag: NightlySettings::default().tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct RepoConfig {
    url: Option<String>,
}

impl CohoConfig {
    /// A missing file yields the defaults.
    pub(crate) fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub(crate) fn registry(&self, root: &Path) -> RepoRegistry {
        self.repos
            .iter()
            .fold(RepoRegistry::new(root), |registry, (id, repo)| {
                match &repo.url {
                    Some(url) => registry.with_url(*id, url.clone()),
                    None => registry,
                }
            })
    }

    pub(crate) fn nightly_settings(&self) -> NightlySettings {
        NightlySettings {
            tag: self.nightly.tag.clone(),
            remote: self.git.remote.clone(),
            branch: self.git.branch.clone(),
        }
    }
}
