//! Manifest version bumping.

use crate::{BundleResult, Manifest, Selector, Version};

/// The version change applied by [`bump`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBump {
    /// Version string exactly as it appeared in the manifest.
    pub old: String,
    /// Normalized bumped version.
    pub new: String,
}

/// Bump the manifest's version in memory.
///
/// The manifest on disk is not touched; call [`Manifest::store`] to persist it.
pub fn bump(manifest: &mut Manifest, selector: Selector) -> BundleResult<VersionBump> {
    let old = manifest.version()?.to_string();
    let next = Version::parse(&old)?.bump(selector)?;

    manifest.set_version(&next);
    tracing::info!(%selector, from = %old, to = %next, "bumped manifest version");

    Ok(VersionBump {
        old,
        new: next.to_string(),
    })
}
