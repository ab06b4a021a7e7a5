use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::ManifestError;

/// A parsed `package.json`.
///
/// Field order and every field the tooling does not touch are kept as read.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// # Errors
    ///
    /// Returns [`ManifestError::NotAnObject`] if `value` is not a JSON object.
    pub fn from_value(path: impl Into<PathBuf>, value: Value) -> Result<Self, ManifestError> {
        let path = path.into();
        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            _ => Err(ManifestError::NotAnObject(path)),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// # Errors
    ///
    /// Returns [`ManifestError::MissingField`] if there is no string `version`.
    pub fn version(&self) -> Result<&str, ManifestError> {
        self.fields
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| self.missing("version"))
    }

    pub fn set_version(&mut self, version: &str) {
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    #[must_use]
    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.fields
            .get("dependencies")
            .and_then(|deps| deps.get(name))
            .and_then(Value::as_str)
    }

    /// Points dependency `name` at `version`, adding the entry if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MissingField`] if the manifest has no
    /// `dependencies` object.
    pub fn set_dependency(&mut self, name: &str, version: &str) -> Result<(), ManifestError> {
        let missing = self.missing("dependencies");
        let deps = self
            .fields
            .get_mut("dependencies")
            .and_then(Value::as_object_mut)
            .ok_or(missing)?;
        deps.insert(name.to_string(), Value::String(version.to_string()));
        Ok(())
    }

    fn missing(&self, field: &str) -> ManifestError {
        ManifestError::MissingField {
            path: self.path.clone(),
            field: field.to_string(),
        }
    }
}
