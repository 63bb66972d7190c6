//! Packaging a manifest and its scripts into an archive.

use crate::{ArchiveBuilder, BundleResult, CompressionOptions, FileSelection, Manifest};
use std::path::{Path, PathBuf};

/// Outcome of a successful [`package`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    /// Where the archive was written.
    pub path: PathBuf,
    /// Entry names, manifest first.
    pub entries: Vec<String>,
    /// SHA256 checksum of the archive file.
    pub sha256: String,
}

/// Package the manifest and the selected files into `output_path`.
///
/// The manifest entry is serialized from `manifest` itself, so it matches what
/// [`Manifest::store`] writes. Every input is read before the previous archive
/// is removed. `on_entry` is called with each entry name as it is staged.
pub fn package<P, F>(
    manifest: &Manifest,
    output_path: P,
    selection: &dyn FileSelection,
    compression: CompressionOptions,
    mut on_entry: F,
) -> BundleResult<PackageReport>
where
    P: AsRef<Path>,
    F: FnMut(&str),
{
    let output_path = output_path.as_ref();

    let manifest_name = manifest.file_name()?;
    on_entry(&manifest_name);
    let mut builder = ArchiveBuilder::new(compression)
        .add_bytes(&manifest_name, manifest.to_json()?.into_bytes())?;

    for path in selection.select(manifest)? {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        on_entry(&name);
        builder = builder.add_file(&path)?;
    }

    let entries = builder.entry_names().map(str::to_string).collect();
    let sha256 = builder.write(output_path)?;

    Ok(PackageReport {
        path: output_path.to_path_buf(),
        entries,
        sha256,
    })
}
