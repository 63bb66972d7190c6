//! extpack CLI - Bump an extension's version and publish it
//!
//! Usage: `extpack <major|minor|patch|increment>`
//!
//! Run from the extension's directory. The version in `package.json` is bumped
//! and written back, then the manifest and scripts are packaged into
//! `publish/<name>.aseprite-extension` (see `extpack.toml` for overrides).

use clap::Parser;
use extpack_bundle::{BundleError, Selector};
use std::path::Path;

mod exit_codes;
mod logging;
mod publish;

#[derive(Parser)]
#[command(name = "extpack")]
#[command(about = "Bump an extension's version and package it for release", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Version component to bump (major, minor, patch, increment)
    #[arg(value_parser = parse_selector)]
    selector: Selector,
}

fn parse_selector(s: &str) -> Result<Selector, String> {
    s.parse().map_err(|e: BundleError| e.to_string())
}

fn usage_error(detail: &str) -> ! {
    eprintln!("{detail}");
    eprintln!(
        "Expected exactly one argument, one of: {}",
        Selector::keywords()
    );
    std::process::exit(exit_codes::USAGE_ERROR);
}

fn main() {
    // Counted before clap so `--` cannot smuggle in a second argument
    let argc = std::env::args_os().len();
    if argc != 2 {
        usage_error(&format!(
            "Invalid command line argument count: {}",
            argc.saturating_sub(1)
        ));
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => usage_error(&e.to_string()),
    };

    logging::init();

    if let Err(e) = publish::run(Path::new("."), cli.selector) {
        eprintln!("Error: {e:?}");
        std::process::exit(exit_codes::FAILURE);
    }
}
