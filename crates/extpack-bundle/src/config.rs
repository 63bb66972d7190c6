//! Project configuration (`extpack.toml`).
//!
//! Every field is optional; a project without a config file packages
//! `package.json` plus every `.lua` file in the working directory into
//! `publish/<name>.aseprite-extension` using deflate at level 5.
//!
//! ```toml
//! output = "../publish/aselapse.aseprite-extension"
//!
//! [selection]
//! mode = "directory-scan"
//! extension = "lua"
//! shared_script = "../shared/json.lua"
//!
//! [compression]
//! method = "lzma"
//! level = 5
//! ```

use crate::builder::DEFAULT_COMPRESSION_LEVEL;
use crate::{
    ARCHIVE_EXTENSION, BundleError, BundleResult, CompressionMethod, CompressionOptions,
    DirectoryScan, FileSelection, MANIFEST_FILE, Manifest, ManifestScripts, OUTPUT_DIR,
    SCRIPT_EXTENSION,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Top-level project configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Manifest path, relative to the project root.
    pub manifest: PathBuf,

    /// Explicit archive path. Overrides `output_dir` and `archive_extension`.
    pub output: Option<PathBuf>,

    /// Directory the archive is written into.
    pub output_dir: PathBuf,

    /// Archive file extension, without the leading dot.
    pub archive_extension: String,

    /// Which files accompany the manifest.
    pub selection: SelectionConfig,

    /// Compression applied to every entry.
    pub compression: CompressionConfig,
}

/// File selection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    pub mode: SelectionMode,

    /// Script extension matched in directory-scan mode.
    pub extension: String,

    /// Extra script outside the project root (directory-scan mode only).
    pub shared_script: Option<PathBuf>,
}

/// How the packaged scripts are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Every matching script in the project root.
    #[default]
    DirectoryScan,
    /// The scripts listed under `contributes.scripts` in the manifest.
    Manifest,
}

/// Compression settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompressionConfig {
    pub method: CompressionMethod,
    pub level: i64,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(MANIFEST_FILE),
            output: None,
            output_dir: PathBuf::from(OUTPUT_DIR),
            archive_extension: ARCHIVE_EXTENSION.to_string(),
            selection: SelectionConfig::default(),
            compression: CompressionConfig::default(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::default(),
            extension: SCRIPT_EXTENSION.to_string(),
            shared_script: None,
        }
    }
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            method: CompressionMethod::default(),
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl ProjectConfig {
    /// Parse configuration from TOML.
    pub fn from_toml(content: &str) -> BundleResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| BundleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> BundleResult<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loaded project config");
                Self::from_toml(&content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no project config, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(BundleError::Io(e)),
        }
    }

    /// Validate settings that serde cannot check on its own.
    pub fn validate(&self) -> BundleResult<()> {
        if self.selection.extension.trim_start_matches('.').is_empty() {
            return Err(BundleError::Config(
                "selection.extension cannot be empty".to_string(),
            ));
        }

        if self.selection.mode == SelectionMode::Manifest && self.selection.shared_script.is_some()
        {
            return Err(BundleError::Config(
                "selection.shared_script only applies to directory-scan mode".to_string(),
            ));
        }

        if self.compression.method != CompressionMethod::Stored
            && !(0..=9).contains(&self.compression.level)
        {
            return Err(BundleError::Config(format!(
                "compression.level must be between 0 and 9, got {}",
                self.compression.level
            )));
        }

        if self.output.is_none() && self.archive_extension.trim_start_matches('.').is_empty() {
            return Err(BundleError::Config(
                "archive_extension cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Manifest path resolved against the project root.
    #[must_use]
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    /// Build the configured file selection strategy.
    #[must_use]
    pub fn file_selection(&self, root: &Path) -> Box<dyn FileSelection> {
        match self.selection.mode {
            SelectionMode::DirectoryScan => {
                let scan = DirectoryScan::new(root, &self.selection.extension);
                match &self.selection.shared_script {
                    Some(shared) => Box::new(scan.with_shared_script(root.join(shared))),
                    None => Box::new(scan),
                }
            }
            SelectionMode::Manifest => Box::new(ManifestScripts::new()),
        }
    }

    /// Compression options for the archive builder.
    #[must_use]
    pub fn compression_options(&self) -> CompressionOptions {
        CompressionOptions {
            method: self.compression.method,
            level: Some(self.compression.level),
        }
    }

    /// Archive path resolved against the project root.
    ///
    /// Without an explicit `output`, the archive is named after the manifest's
    /// `name` field, or after the project directory if the manifest has none.
    pub fn output_path(&self, root: &Path, manifest: &Manifest) -> BundleResult<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(root.join(output));
        }

        let name = match manifest.name() {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => project_dir_name(root)?,
        };

        let extension = self.archive_extension.trim_start_matches('.');
        Ok(root
            .join(&self.output_dir)
            .join(format!("{name}.{extension}")))
    }
}

fn project_dir_name(root: &Path) -> BundleResult<String> {
    let root = fs::canonicalize(root)?;

    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            BundleError::InvalidManifest(
                "name is required when the project root has no directory name".to_string(),
            )
        })
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
