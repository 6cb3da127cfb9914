//! Repository root location.
//!
//! The generation pass writes its output relative to the repository root.
//! Root location is behind the [`RepoRoot`] trait so the pass itself can be
//! tested against a staged directory instead of a real checkout.

use std::path::{Path, PathBuf};

/// Locates the canonical repository root for a given starting directory.
pub trait RepoRoot {
    /// Returns the root directory, or `None` if no root marker is found in
    /// `start` or any of its ancestors.
    fn locate(&self, start: &Path) -> Option<PathBuf>;
}

/// Locates the repository root by walking parent directories until one
/// contains a `.git` entry.
#[derive(Debug, Default)]
pub struct GitRepoRoot;

impl RepoRoot for GitRepoRoot {
    fn locate(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(".git").exists())
            .map(Path::to_path_buf)
    }
}
