//! Error types for bundle operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while bumping or packaging an extension.
#[derive(Debug, Error)]
pub enum BundleError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Project configuration could not be parsed.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Manifest structure is not what packaging needs.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// Version string could not be parsed or bumped.
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// Selector keyword is not one of the known keywords.
    #[error("Unknown selector '{0}', expected one of: major, minor, patch, increment")]
    UnknownSelector(String),

    /// Manifest file does not exist.
    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// A file selected for the archive does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Two selected files flatten to the same archive entry name.
    #[error("Duplicate archive entry: {0}")]
    DuplicateEntry(String),
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn BundleError___io___displays_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BundleError = io_err.into();

        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn BundleError___invalid_manifest___displays_message() {
        let err = BundleError::InvalidManifest("missing version".to_string());

        assert_eq!(err.to_string(), "Invalid manifest: missing version");
    }

    #[test]
    fn BundleError___invalid_version___displays_all_fields() {
        let err = BundleError::InvalidVersion {
            version: "1.x".to_string(),
            reason: "component 'x' is not a number".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("1.x"));
        assert!(msg.contains("not a number"));
    }

    #[test]
    fn BundleError___unknown_selector___lists_keywords() {
        let err = BundleError::UnknownSelector("huge".to_string());

        let msg = err.to_string();
        assert!(msg.contains("huge"));
        for keyword in ["major", "minor", "patch", "increment"] {
            assert!(msg.contains(keyword));
        }
    }

    #[test]
    fn BundleError___file_not_found___displays_path() {
        let err = BundleError::FileNotFound(PathBuf::from("scripts/missing.lua"));

        assert_eq!(err.to_string(), "File not found: scripts/missing.lua");
    }

    #[test]
    fn BundleError___from_io_error___converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let bundle_err: BundleError = io_err.into();

        assert!(matches!(bundle_err, BundleError::Io(_)));
    }
}
