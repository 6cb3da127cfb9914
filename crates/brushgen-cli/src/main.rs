//! `brushgen` - generates the built-in theming resource dictionaries.
//!
//! Reads `ThemeBrushes.json` from the working directory and writes
//! `MaterialDesignTheme.Light.xaml` and `MaterialDesignTheme.Dark.xaml`
//! under the repository's `MaterialDesignThemes.Wpf/Themes` directory.

mod generate;
mod repo;

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use crate::generate::{generate, INPUT_FILE};
use crate::repo::GitRepoRoot;

/// Generate the built-in theming resource dictionaries from the brush
/// catalogue. Takes no arguments; run it from anywhere inside the checkout.
#[derive(Debug, Parser)]
#[command(name = "brushgen", version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let cwd = env::current_dir().context("failed to resolve the working directory")?;
    let summary = generate(&cwd.join(INPUT_FILE), &cwd, &GitRepoRoot)?;

    println!(
        "generated {} dictionaries from {} brushes in {} groups",
        summary.written.len(),
        summary.brushes,
        summary.groups
    );
    for path in &summary.written {
        println!("  {}", relative_to(path, &cwd).display());
    }

    Ok(())
}

/// Renders `path` relative to `base` when possible, for friendlier output.
fn relative_to<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}
