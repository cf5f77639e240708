// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 packflow contributors

//! Descriptor discovery
//!
//! Finds the integration/script YAML files documentation is generated for.

use std::path::{Path, PathBuf};

use crate::errors::PackflowError;

/// Every `*.yml` file under `root`, recursively, in path order
///
/// Files whose name starts with `_` are skipped, and so is anything reached
/// through a symlinked directory below `root`. A `root` that is not a
/// directory yields nothing.
pub fn find_descriptors(root: &Path) -> Result<Vec<PathBuf>, PackflowError> {
    if !root.is_dir() {
        return Ok(vec![]);
    }

    let base = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/**/*.yml", base.trim_end_matches('/'));

    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .filter(|p| !through_symlinked_dir(root, p))
        .filter(|p| {
            p.file_name()
                .map(|n| !n.to_string_lossy().starts_with('_'))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Whether any directory between `root` and `path` is a symlink
fn through_symlinked_dir(root: &Path, path: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    let Some(parent) = relative.parent() else {
        return false;
    };

    let mut current = root.to_path_buf();
    for component in parent.components() {
        current.push(component);
        let is_link = std::fs::symlink_metadata(&current)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        if is_link {
            return true;
        }
    }
    false
}
