//! Extension manifest (`package.json`).
//!
//! The manifest is kept as a JSON object so that fields this crate does not
//! know about survive a bump untouched and keep their original order.

use crate::{BundleError, BundleResult, Version};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A script contributed by the extension (`contributes.scripts[]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptContribution {
    /// Path of the script, relative to the manifest's directory.
    pub path: String,
}

/// Loaded extension manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl Manifest {
    /// Load the manifest from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> BundleResult<Self> {
        let path = path.as_ref();

        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BundleError::ManifestNotFound(path.to_path_buf()),
            _ => BundleError::Io(e),
        })?;

        tracing::debug!(path = %path.display(), "loaded manifest");
        Self::from_json(path, &json)
    }

    /// Parse a manifest from JSON, remembering where it should be stored.
    pub fn from_json<P: Into<PathBuf>>(path: P, json: &str) -> BundleResult<Self> {
        let value: Value = serde_json::from_str(json)?;

        let Value::Object(document) = value else {
            return Err(BundleError::InvalidManifest(
                "top level must be a JSON object".to_string(),
            ));
        };

        Ok(Self {
            path: path.into(),
            document,
        })
    }

    /// Path the manifest was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Archive entry name for the manifest.
    pub fn file_name(&self) -> BundleResult<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                BundleError::InvalidManifest(format!(
                    "Invalid manifest path: {}",
                    self.path.display()
                ))
            })
    }

    /// Directory that relative script paths are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// The raw `version` string.
    pub fn version(&self) -> BundleResult<&str> {
        match self.document.get("version") {
            Some(Value::String(version)) => Ok(version),
            Some(_) => Err(BundleError::InvalidManifest(
                "version must be a string".to_string(),
            )),
            None => Err(BundleError::InvalidManifest(
                "version is required".to_string(),
            )),
        }
    }

    /// Replace the `version` field.
    pub fn set_version(&mut self, version: &Version) {
        self.document
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    /// The extension `name`, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    /// Scripts declared under `contributes.scripts`, in declaration order.
    pub fn scripts(&self) -> BundleResult<Vec<ScriptContribution>> {
        let Some(scripts) = self
            .document
            .get("contributes")
            .and_then(|contributes| contributes.get("scripts"))
        else {
            return Ok(Vec::new());
        };

        serde_json::from_value(scripts.clone()).map_err(|e| {
            BundleError::InvalidManifest(format!("contributes.scripts is malformed: {e}"))
        })
    }

    /// Serialize the manifest with four-space indentation.
    pub fn to_json(&self) -> BundleResult<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.document.serialize(&mut serializer)?;
        buffer.push(b'\n');

        String::from_utf8(buffer).map_err(|e| {
            BundleError::InvalidManifest(format!("manifest is not valid UTF-8: {e}"))
        })
    }

    /// Write the manifest back to the path it was loaded from.
    pub fn store(&self) -> BundleResult<()> {
        fs::write(&self.path, self.to_json()?)?;
        tracing::debug!(path = %self.path.display(), "stored manifest");
        Ok(())
    }
}
