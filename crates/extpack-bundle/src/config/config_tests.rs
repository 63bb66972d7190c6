#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;
use test_case::test_case;

fn manifest(json: &str) -> Manifest {
    Manifest::from_json("package.json", json).unwrap()
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn ProjectConfig___from_toml___empty_uses_defaults() {
    let config = ProjectConfig::from_toml("").unwrap();

    assert_eq!(config, ProjectConfig::default());
    assert_eq!(config.manifest, PathBuf::from("package.json"));
    assert_eq!(config.selection.mode, SelectionMode::DirectoryScan);
    assert_eq!(config.selection.extension, "lua");
    assert_eq!(config.compression.method, CompressionMethod::Deflate);
    assert_eq!(config.compression.level, 5);
}

#[test]
fn ProjectConfig___from_toml___parses_full_config() {
    let toml = r#"
manifest = "ext/package.json"
output = "../publish/aselapse.aseprite-extension"

[selection]
mode = "directory-scan"
extension = "lua"
shared_script = "../shared/json.lua"

[compression]
method = "lzma"
level = 6
"#;

    let config = ProjectConfig::from_toml(toml).unwrap();

    assert_eq!(config.manifest, PathBuf::from("ext/package.json"));
    assert_eq!(
        config.output,
        Some(PathBuf::from("../publish/aselapse.aseprite-extension"))
    );
    assert_eq!(
        config.selection.shared_script,
        Some(PathBuf::from("../shared/json.lua"))
    );
    assert_eq!(config.compression.method, CompressionMethod::Lzma);
    assert_eq!(config.compression.level, 6);
}

#[test_case(r#"[selection]
mode = "manifest""#, SelectionMode::Manifest)]
#[test_case(r#"[selection]
mode = "directory-scan""#, SelectionMode::DirectoryScan)]
fn ProjectConfig___selection_mode___parses(toml: &str, expected: SelectionMode) {
    let config = ProjectConfig::from_toml(toml).unwrap();

    assert_eq!(config.selection.mode, expected);
}

#[test_case("deflate", CompressionMethod::Deflate)]
#[test_case("lzma", CompressionMethod::Lzma)]
#[test_case("stored", CompressionMethod::Stored)]
fn ProjectConfig___compression_method___parses(method: &str, expected: CompressionMethod) {
    let toml = format!("[compression]\nmethod = \"{method}\"");

    let config = ProjectConfig::from_toml(&toml).unwrap();

    assert_eq!(config.compression.method, expected);
}

// ============================================================================
// Rejection
// ============================================================================

#[test_case("unknown_key = 1"; "unknown top-level key")]
#[test_case("[selection]\nmode = \"glob\""; "unknown mode")]
#[test_case("[compression]\nmethod = \"brotli\""; "unknown method")]
#[test_case("[compression]\nlevel = 12"; "level out of range")]
#[test_case("[selection]\nextension = \"\""; "empty extension")]
#[test_case("[selection]\nmode = \"manifest\"\nshared_script = \"../x.lua\""; "shared script in manifest mode")]
#[test_case("manifest = "; "malformed toml")]
fn ProjectConfig___from_toml___rejects_invalid(toml: &str) {
    let err = ProjectConfig::from_toml(toml).unwrap_err();

    assert!(matches!(err, BundleError::Config(_)));
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn ProjectConfig___load___missing_file___returns_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = ProjectConfig::load(temp_dir.path().join("extpack.toml")).unwrap();

    assert_eq!(config, ProjectConfig::default());
}

#[test]
fn ProjectConfig___load___reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("extpack.toml");
    fs::write(&path, "archive_extension = \"zip\"\n").unwrap();

    let config = ProjectConfig::load(&path).unwrap();

    assert_eq!(config.archive_extension, "zip");
}

// ============================================================================
// Derived paths and options
// ============================================================================

#[test]
fn ProjectConfig___output_path___uses_manifest_name() {
    let config = ProjectConfig::default();

    let path = config
        .output_path(Path::new("project"), &manifest(r#"{"name": "aselapse", "version": "1.0.0"}"#))
        .unwrap();

    assert_eq!(
        path,
        PathBuf::from("project/publish/aselapse.aseprite-extension")
    );
}

#[test]
fn ProjectConfig___output_path___explicit_output_wins() {
    let config = ProjectConfig::from_toml(r#"output = "../publish/custom.zip""#).unwrap();

    let path = config
        .output_path(Path::new("project"), &manifest(r#"{"name": "aselapse", "version": "1.0.0"}"#))
        .unwrap();

    assert_eq!(path, PathBuf::from("project/../publish/custom.zip"));
}

#[test]
fn ProjectConfig___output_path___falls_back_to_directory_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("my-extension");
    fs::create_dir_all(&root).unwrap();
    let config = ProjectConfig::default();

    let path = config
        .output_path(&root, &manifest(r#"{"version": "1.0.0"}"#))
        .unwrap();

    assert_eq!(
        path,
        root.join("publish").join("my-extension.aseprite-extension")
    );
}

#[test]
fn ProjectConfig___compression_options___carries_method_and_level() {
    let config = ProjectConfig::from_toml("[compression]\nmethod = \"lzma\"\nlevel = 7").unwrap();

    let options = config.compression_options();

    assert_eq!(options.method, CompressionMethod::Lzma);
    assert_eq!(options.level, Some(7));
}

#[test]
fn ProjectConfig___file_selection___directory_scan_includes_shared_script() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(temp_dir.path().join("shared")).unwrap();
    fs::write(root.join("main.lua"), b"-- main").unwrap();
    fs::write(temp_dir.path().join("shared").join("json.lua"), b"-- json").unwrap();
    let config =
        ProjectConfig::from_toml("[selection]\nshared_script = \"../shared/json.lua\"").unwrap();

    let files = config
        .file_selection(&root)
        .select(&manifest(r#"{"version": "1.0.0"}"#))
        .unwrap();

    assert_eq!(
        files,
        vec![root.join("main.lua"), root.join("../shared/json.lua")]
    );
}
