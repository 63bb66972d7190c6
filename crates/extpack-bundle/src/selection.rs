//! Strategies that decide which files go into the archive.
//!
//! The manifest itself is always packaged; a [`FileSelection`] only chooses the
//! files that accompany it.

use crate::{BundleError, BundleResult, Manifest};
use std::fs;
use std::path::{Path, PathBuf};

/// Chooses the files packaged alongside the manifest.
pub trait FileSelection {
    /// Return the files to package, in archive order.
    fn select(&self, manifest: &Manifest) -> BundleResult<Vec<PathBuf>>;
}

/// Include every script in a directory, plus an optional shared script.
#[derive(Debug, Clone)]
pub struct DirectoryScan {
    dir: PathBuf,
    extension: String,
    shared_script: Option<PathBuf>,
}

impl DirectoryScan {
    /// Scan `dir` for files ending in `.<extension>`.
    pub fn new<P: Into<PathBuf>>(dir: P, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
            shared_script: None,
        }
    }

    /// Also include a script that lives outside the scanned directory.
    pub fn with_shared_script<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.shared_script = Some(path.into());
        self
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(&format!(".{}", self.extension)))
            .unwrap_or(false)
    }
}

impl FileSelection for DirectoryScan {
    fn select(&self, _manifest: &Manifest) -> BundleResult<Vec<PathBuf>> {
        let mut scripts = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            // Follows symlinks, so linked-in scripts are picked up
            if path.is_file() && self.matches(&path) {
                scripts.push(path);
            }
        }

        // read_dir order is platform dependent
        scripts.sort();

        if let Some(shared) = &self.shared_script {
            if !shared.is_file() {
                return Err(BundleError::FileNotFound(shared.clone()));
            }
            scripts.push(shared.clone());
        }

        tracing::debug!(
            dir = %self.dir.display(),
            extension = %self.extension,
            count = scripts.len(),
            "scanned for scripts"
        );
        Ok(scripts)
    }
}

/// Include exactly the scripts the manifest declares under `contributes.scripts`.
#[derive(Debug, Clone, Default)]
pub struct ManifestScripts {
    base_dir: Option<PathBuf>,
}

impl ManifestScripts {
    /// Resolve script paths against the manifest's own directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve script paths against `base_dir` instead.
    pub fn with_base_dir<P: Into<PathBuf>>(mut self, base_dir: P) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }
}

impl FileSelection for ManifestScripts {
    fn select(&self, manifest: &Manifest) -> BundleResult<Vec<PathBuf>> {
        let base_dir = self
            .base_dir
            .as_deref()
            .unwrap_or_else(|| manifest.base_dir());

        let scripts = manifest
            .scripts()?
            .into_iter()
            .map(|script| base_dir.join(script.path))
            .collect::<Vec<_>>();

        tracing::debug!(count = scripts.len(), "collected declared scripts");
        Ok(scripts)
    }
}
