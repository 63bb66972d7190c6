//! Release packaging for script-based editor extensions
//!
//! This crate bumps the semantic version recorded in an extension's
//! `package.json` and bundles the manifest together with its scripts into a
//! single ZIP archive (by default an `.aseprite-extension` file).
//!
//! # Archive Structure
//!
//! Every entry sits at the archive root, regardless of where the source file
//! lived on disk:
//!
//! ```text
//! publish/my-extension.aseprite-extension
//! ├── package.json
//! ├── main.lua
//! ├── timelapse.lua
//! └── json.lua          # shared script pulled in from ../shared/
//! ```
//!
//! # Example
//!
//! ```no_run
//! use extpack_bundle::{CompressionOptions, DirectoryScan, Manifest, Selector, bump, package};
//!
//! let mut manifest = Manifest::load("package.json")?;
//! let change = bump(&mut manifest, Selector::Minor)?;
//! manifest.store()?;
//!
//! let selection = DirectoryScan::new(".", "lua");
//! let report = package(
//!     &manifest,
//!     "publish/my-extension.aseprite-extension",
//!     &selection,
//!     CompressionOptions::default(),
//!     |entry| println!("Adding {entry} to extension"),
//! )?;
//! println!("{} -> {} at {}", change.old, change.new, report.path.display());
//! # Ok::<(), extpack_bundle::BundleError>(())
//! ```

mod error;
mod selector;
mod version;

pub mod builder;
pub mod bump;
pub mod config;
pub mod manifest;
pub mod package;
pub mod selection;

pub use builder::{ArchiveBuilder, CompressionMethod, CompressionOptions, compute_sha256};
pub use bump::{VersionBump, bump};
pub use config::{CompressionConfig, ProjectConfig, SelectionConfig, SelectionMode};
pub use error::BundleError;
pub use manifest::{Manifest, ScriptContribution};
pub use package::{PackageReport, package};
pub use selection::{DirectoryScan, FileSelection, ManifestScripts};
pub use selector::Selector;
pub use version::Version;

/// Result type for bundle operations.
pub type BundleResult<T> = Result<T, BundleError>;

/// Default manifest file name, relative to the working directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Default project configuration file name.
pub const CONFIG_FILE: &str = "extpack.toml";

/// Default archive file extension.
pub const ARCHIVE_EXTENSION: &str = "aseprite-extension";

/// Default directory the archive is written into.
pub const OUTPUT_DIR: &str = "publish";

/// Default script file extension for directory scans.
pub const SCRIPT_EXTENSION: &str = "lua";
