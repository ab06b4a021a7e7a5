use std::convert::Infallible;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::types::RepoId;

/// Published version per repository.
///
/// Used both for "what is currently tagged" answers from the registry and for
/// "what to unpublish" requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionMap(IndexMap<RepoId, String>);

impl VersionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: RepoId, version: impl Into<String>) {
        self.0.insert(id, version.into());
    }

    #[must_use]
    pub fn get(&self, id: RepoId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(RepoId, String)> for VersionMap {
    fn from_iter<T: IntoIterator<Item = (RepoId, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A version map as it reaches the unpublish controller: either still in its
/// serialized JSON form (command line) or already parsed (nightly pipeline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionArg {
    Raw(String),
    Parsed(VersionMap),
}

impl VersionArg {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidVersionMap`] if a raw value is not a JSON
    /// object mapping known repo ids to version strings.
    pub fn into_map(self) -> Result<VersionMap> {
        match self {
            Self::Parsed(map) => Ok(map),
            Self::Raw(input) => {
                serde_json::from_str(&input).map_err(|source| CoreError::InvalidVersionMap {
                    input,
                    source,
                })
            }
        }
    }
}

impl FromStr for VersionArg {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::Raw(s.to_string()))
    }
}

impl From<VersionMap> for VersionArg {
    fn from(map: VersionMap) -> Self {
        Self::Parsed(map)
    }
}
