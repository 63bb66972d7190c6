//! Bump-and-publish command.
//!
//! Loads the manifest once, bumps it in memory, stores it once, then packages
//! the stored manifest with its scripts.

use anyhow::{Context, Result};
use extpack_bundle::{CONFIG_FILE, Manifest, ProjectConfig, Selector, bump, package};
use std::path::Path;

/// Run the publish pipeline for the project rooted at `root`.
///
/// The manifest is stored before packaging starts. If packaging then fails the
/// manifest keeps the bumped version; nothing is rolled back.
pub fn run(root: &Path, selector: Selector) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);
    let config = ProjectConfig::load(&config_path)
        .with_context(|| format!("Failed to load config: {}", display_path(&config_path)))?;

    let manifest_path = config.manifest_path(root);
    let mut manifest = Manifest::load(&manifest_path)
        .with_context(|| format!("Failed to load manifest: {}", display_path(&manifest_path)))?;

    let output_path = config
        .output_path(root, &manifest)
        .context("Failed to resolve archive path")?;

    let change = bump(&mut manifest, selector)
        .with_context(|| format!("Failed to bump {selector} version"))?;

    println!();
    println!("Bump version from {} to {}", change.old, change.new);

    manifest
        .store()
        .with_context(|| format!("Failed to write manifest: {}", display_path(&manifest_path)))?;

    let selection = config.file_selection(root);

    println!();
    let report = package(
        &manifest,
        &output_path,
        selection.as_ref(),
        config.compression_options(),
        |entry| println!("Adding {entry} to extension"),
    )
    .inspect_err(|_| {
        tracing::warn!(
            version = %change.new,
            manifest = %display_path(&manifest_path),
            "packaging failed after the manifest was updated; the bumped version is kept"
        );
    })
    .with_context(|| format!("Failed to write archive: {}", display_path(&output_path)))?;

    println!();
    println!("Published extension at '{}'!", display_path(&report.path));
    tracing::info!(sha256 = %report.sha256, entries = report.entries.len(), "published");

    Ok(())
}

/// Render a path relative to the working directory without a leading `./`.
fn display_path(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .display()
        .to_string()
}
