//! Recursive file enumeration for the blame loop.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Enumerate every regular file under `root`, skipping anything inside a
/// `.git` directory.
///
/// Deliberately blames everything else: no extension filter, no gitignore
/// semantics, hidden files included. Whether a file is actually tracked is
/// git's call to make, and an untracked file surfaces as a fatal blame
/// error. Results are sorted by path so runs are deterministic.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .hidden(false)
        .parents(false)
        .follow_links(false)
        .filter_entry(|entry| entry.file_name().to_str() != Some(".git"));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
