//!
//! Perflog discovery in an output tree.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::perflog::error::Error;

///
/// Finds files with the `extension` below `root`.
///
/// Hidden directories are skipped. If `test` is set, only files whose parent
/// directory name matches that shell-style pattern are returned.
///
pub fn find(root: &Path, test: Option<&str>, extension: &str) -> Result<Vec<PathBuf>, Error> {
    let test_pattern = test
        .map(|pattern| {
            glob::Pattern::new(pattern).map_err(|error| Error::Pattern {
                error,
                pattern: pattern.to_owned(),
            })
        })
        .transpose()?;

    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(root.to_string_lossy().as_ref()),
        extension.trim_start_matches('.')
    );
    let mut paths: Vec<PathBuf> = glob::glob(pattern.as_str())
        .map_err(|error| Error::Pattern {
            error,
            pattern: pattern.clone(),
        })?
        .filter_map(Result::ok)
        .filter(|path| !is_hidden(root, path))
        .filter(|path| match (test_pattern.as_ref(), path.parent()) {
            (None, _) => true,
            (Some(pattern), Some(parent)) => parent
                .file_name()
                .map(|name| pattern.matches(name.to_string_lossy().as_ref()))
                .unwrap_or_default(),
            (Some(_), None) => false,
        })
        .collect();
    paths.sort();
    Ok(paths)
}

///
/// Expands a glob `pattern` relative to `root`.
///
pub fn expand(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, Error> {
    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(root.to_string_lossy().as_ref()),
        pattern
    );
    let mut paths: Vec<PathBuf> = glob::glob(full_pattern.as_str())
        .map_err(|error| Error::Pattern {
            error,
            pattern: full_pattern.clone(),
        })?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

///
/// Whether any directory between `root` and `path` is hidden.
///
fn is_hidden(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut directories = relative.components().rev().skip(1);
    directories.any(|component| component.as_os_str().to_string_lossy().starts_with('.'))
}
