//! The generation pass.
//!
//! Reads the brush catalogue, sorts it, and writes one resource dictionary
//! per theme under the repository's `MaterialDesignThemes.Wpf/Themes`
//! directory. Both documents are emitted fully in memory before the first
//! write, so a failing run never leaves a partial dictionary behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use brushgen::{build_tree, dictionary_file_name, emit_dictionary, parse_document, Theme};

use crate::repo::RepoRoot;

/// Input catalogue file, resolved against the working directory.
pub const INPUT_FILE: &str = "ThemeBrushes.json";

/// Output directory for the generated dictionaries, relative to the
/// repository root.
pub const THEMES_DIR: &str = "MaterialDesignThemes.Wpf/Themes";

/// Counts reported after a successful pass.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    /// Number of brush definitions in the catalogue.
    pub brushes: usize,
    /// Number of top-level container groups.
    pub groups: usize,
    /// The dictionary files written.
    pub written: Vec<PathBuf>,
}

/// Runs the generation pass.
///
/// `input` is the catalogue document path, `start` the directory the root
/// search begins from. Fails without writing anything if the catalogue is
/// malformed or no repository root is found above `start`.
pub fn generate(input: &Path, start: &Path, locator: &dyn RepoRoot) -> Result<Summary> {
    let document = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let mut brushes = parse_document(&document)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    brushes.sort_by(|a, b| a.name().cmp(b.name()));

    let tree = build_tree(&brushes);

    let root = locator.locate(start).ok_or_else(|| {
        anyhow!(
            "repository root not found: no .git directory in {} or any parent",
            start.display()
        )
    })?;

    // Emit everything before touching the filesystem.
    let themes_dir = root.join(THEMES_DIR);
    let documents: Vec<(PathBuf, String)> = Theme::ALL
        .into_iter()
        .map(|theme| {
            (
                themes_dir.join(dictionary_file_name(theme)),
                emit_dictionary(theme, &brushes),
            )
        })
        .collect();

    fs::create_dir_all(&themes_dir)
        .with_context(|| format!("failed to create {}", themes_dir.display()))?;
    let mut written = Vec::new();
    for (path, document) in documents {
        fs::write(&path, document)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(Summary {
        brushes: tree.iter().count(),
        groups: tree.children().len(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::GitRepoRoot;
    use std::fs;
    use tempfile::TempDir;

    const CATALOGUE: &str = r##"[
        {
            "name": "MaterialDesign.Brush.Button.Background",
            "themeValues": { "light": "#FF6200EE", "dark": "#FFBB86FC" }
        },
        {
            "name": "MaterialDesign.Brush.Foreground",
            "themeValues": { "light": "#DD000000", "dark": "#DDFFFFFF" }
        }
    ]"##;

    fn staged_repo(catalogue: &str) -> (TempDir, PathBuf) {
        let repo = TempDir::new().unwrap();
        fs::create_dir(repo.path().join(".git")).unwrap();
        let input = repo.path().join(INPUT_FILE);
        fs::write(&input, catalogue).unwrap();
        (repo, input)
    }

    #[test]
    fn test_generate_writes_both_dictionaries() {
        let (repo, input) = staged_repo(CATALOGUE);

        let summary = generate(&input, repo.path(), &GitRepoRoot).unwrap();

        assert_eq!(summary.brushes, 2);
        assert_eq!(summary.groups, 1);
        assert_eq!(summary.written.len(), 2);

        let light = fs::read_to_string(
            repo.path().join(THEMES_DIR).join("MaterialDesignTheme.Light.xaml"),
        )
        .unwrap();
        let dark = fs::read_to_string(
            repo.path().join(THEMES_DIR).join("MaterialDesignTheme.Dark.xaml"),
        )
        .unwrap();

        assert!(light.contains(">#FF6200EE</Color>"));
        assert!(dark.contains(">#FFBB86FC</Color>"));
        assert!(light.starts_with("<ResourceDictionary"));
        assert!(dark.ends_with("</ResourceDictionary>\n"));
    }

    #[test]
    fn test_generate_is_order_independent() {
        let (repo, input) = staged_repo(CATALOGUE);
        generate(&input, repo.path(), &GitRepoRoot).unwrap();
        let first = fs::read_to_string(
            repo.path().join(THEMES_DIR).join("MaterialDesignTheme.Light.xaml"),
        )
        .unwrap();

        let reversed = r##"[
            {
                "name": "MaterialDesign.Brush.Foreground",
                "themeValues": { "light": "#DD000000", "dark": "#DDFFFFFF" }
            },
            {
                "name": "MaterialDesign.Brush.Button.Background",
                "themeValues": { "light": "#FF6200EE", "dark": "#FFBB86FC" }
            }
        ]"##;
        let (repo2, input2) = staged_repo(reversed);
        generate(&input2, repo2.path(), &GitRepoRoot).unwrap();
        let second = fs::read_to_string(
            repo2.path().join(THEMES_DIR).join("MaterialDesignTheme.Light.xaml"),
        )
        .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_invalid_catalogue_writes_nothing() {
        let (repo, input) = staged_repo(r#"{ "not": "a sequence" }"#);

        let result = generate(&input, repo.path(), &GitRepoRoot);

        assert!(result.is_err());
        assert!(!repo.path().join(THEMES_DIR).exists());
    }

    #[test]
    fn test_generate_missing_theme_value_aborts() {
        let (repo, input) = staged_repo(
            r##"[
                {
                    "name": "MaterialDesign.Brush.Foreground",
                    "themeValues": { "light": "#DD000000" }
                }
            ]"##,
        );

        let result = generate(&input, repo.path(), &GitRepoRoot);

        assert!(result.is_err());
        assert!(!repo.path().join(THEMES_DIR).exists());
    }

    #[test]
    fn test_generate_without_root_fails_before_writing() {
        struct NoRoot;
        impl RepoRoot for NoRoot {
            fn locate(&self, _start: &Path) -> Option<PathBuf> {
                None
            }
        }

        let dir = TempDir::new().unwrap();
        let input = dir.path().join(INPUT_FILE);
        fs::write(&input, CATALOGUE).unwrap();

        let err = generate(&input, dir.path(), &NoRoot).unwrap_err();
        assert!(err.to_string().contains("repository root not found"));
        assert!(!dir.path().join(THEMES_DIR).exists());
    }
}
