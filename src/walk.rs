//! Filesystem walking (spec.md §1's "directory traversal" — an external
//! collaborator, but the binary needs some way to turn a path argument
//! into a list of files). Grounded on the teacher's `ignore`-based
//! `WalkBuilder` usage, stripped of everything specific to the teacher's
//! per-language detection and test-file exclusion, since this spec's
//! lexer contract doesn't distinguish source languages.
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::CoreError;

/// Recursively list every regular file under `root`, respecting
/// `.gitignore` and skipping hidden files and directories (including
/// `.git`, per `ignore::WalkBuilder`'s default). If `root` is itself a
/// file, returns just that file. Order is deterministic (sorted by path)
/// so repeated runs over the same tree ingest files in the same order.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, CoreError> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).follow_links(false).build() {
        let entry = entry.map_err(|err| {
            CoreError::resource(format!("walking {}: {err}", root.display()))
        })?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
