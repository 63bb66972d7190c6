//! Archive creation utilities.
//!
//! The [`ArchiveBuilder`] provides a fluent API for creating flat extension
//! archives.

use crate::{BundleError, BundleResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Default compression level, mid-range for both deflate and LZMA.
pub const DEFAULT_COMPRESSION_LEVEL: i64 = 5;

/// Compression codec applied to every archive entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMethod {
    /// Deflate, readable by every ZIP tool.
    #[default]
    Deflate,
    /// LZMA.
    Lzma,
    /// No compression.
    Stored,
}

impl CompressionMethod {
    fn as_zip(self) -> zip::CompressionMethod {
        match self {
            Self::Deflate => zip::CompressionMethod::Deflated,
            Self::Lzma => zip::CompressionMethod::Lzma,
            Self::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// Method and level shared by all entries of an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionOptions {
    pub method: CompressionMethod,
    pub level: Option<i64>,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            method: CompressionMethod::Deflate,
            level: Some(DEFAULT_COMPRESSION_LEVEL),
        }
    }
}

impl CompressionOptions {
    fn file_options(&self) -> SimpleFileOptions {
        // Stored entries reject any level
        let level = match self.method {
            CompressionMethod::Stored => None,
            _ => self.level,
        };

        SimpleFileOptions::default()
            .compression_method(self.method.as_zip())
            .compression_level(level)
    }
}

/// Builder for creating extension archives.
///
/// # Example
///
/// ```no_run
/// use extpack_bundle::{ArchiveBuilder, CompressionOptions};
///
/// let builder = ArchiveBuilder::new(CompressionOptions::default())
///     .add_bytes("package.json", br#"{"version": "1.0.0"}"#.to_vec())?
///     .add_file("main.lua")?
///     .add_file("../shared/json.lua")?;
///
/// builder.write("publish/my-extension.aseprite-extension")?;
/// # Ok::<(), extpack_bundle::BundleError>(())
/// ```
pub struct ArchiveBuilder {
    compression: CompressionOptions,
    files: Vec<ArchiveFile>,
}

/// A file to include in the archive.
struct ArchiveFile {
    /// Entry name at the archive root.
    name: String,
    /// File contents.
    contents: Vec<u8>,
}

impl ArchiveBuilder {
    /// Create an empty archive builder.
    #[must_use]
    pub fn new(compression: CompressionOptions) -> Self {
        Self {
            compression,
            files: Vec::new(),
        }
    }

    /// Add a file from disk, stored under its base name.
    ///
    /// The file is read immediately, so a missing file fails here rather than
    /// halfway through writing the archive.
    pub fn add_file<P: AsRef<Path>>(self, source_path: P) -> BundleResult<Self> {
        let source_path = source_path.as_ref();

        let contents = fs::read(source_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BundleError::FileNotFound(source_path.to_path_buf()),
            _ => BundleError::Io(e),
        })?;

        let name = source_path
            .file_name()
            .ok_or_else(|| {
                BundleError::InvalidManifest(format!(
                    "Invalid script path: {}",
                    source_path.display()
                ))
            })?
            .to_string_lossy()
            .into_owned();

        self.add_bytes(&name, contents)
    }

    /// Add raw bytes as an entry in the archive.
    pub fn add_bytes(mut self, name: &str, contents: Vec<u8>) -> BundleResult<Self> {
        if self.files.iter().any(|file| file.name == name) {
            return Err(BundleError::DuplicateEntry(name.to_string()));
        }

        self.files.push(ArchiveFile {
            name: name.to_string(),
            contents,
        });
        Ok(self)
    }

    /// Entry names in the order they will be written.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|file| file.name.as_str())
    }

    /// Write the archive, replacing any file already at `output_path`.
    ///
    /// Returns the SHA256 checksum of the written archive.
    pub fn write<P: AsRef<Path>>(self, output_path: P) -> BundleResult<String> {
        let output_path = output_path.as_ref();

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if output_path.is_file() {
            fs::remove_file(output_path)?;
            tracing::debug!(path = %output_path.display(), "removed previous archive");
        }

        let file = File::create(output_path)?;
        let mut zip = ZipWriter::new(file);
        let options = self.compression.file_options();

        for archive_file in &self.files {
            zip.start_file(archive_file.name.as_str(), options)?;
            zip.write_all(&archive_file.contents)?;
        }

        zip.finish()?;

        let checksum = compute_sha256(&fs::read(output_path)?);
        tracing::info!(
            path = %output_path.display(),
            entries = self.files.len(),
            sha256 = %checksum,
            "wrote archive"
        );

        Ok(checksum)
    }
}

/// Compute SHA256 hash of data and return as hex string.
pub fn compute_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}
