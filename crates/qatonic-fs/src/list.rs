//! Directory enumeration with entry-kind filtering
//!
//! Returns bare child names, sorted lexicographically so that every caller
//! that merges file contents in listing order gets a deterministic,
//! platform-independent result.

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Which entry kinds a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter {
    /// Regular files (and anything that is not a directory).
    FilesOnly,
    /// Directories only.
    DirsOnly,
    /// Both files and directories.
    Any,
}

impl EntryFilter {
    fn matches(self, is_dir: bool) -> bool {
        match self {
            Self::FilesOnly => !is_dir,
            Self::DirsOnly => is_dir,
            Self::Any => true,
        }
    }
}

/// List the immediate children of `path` whose kind matches `filter`.
///
/// Each child's kind comes from an independent `symlink_metadata` probe; a
/// failed probe fails the whole call, never a partial listing. Results are
/// sorted by name.
///
/// # Errors
///
/// - [`Error::InvalidPath`] when `path` is empty or the bare current dir
/// - [`Error::NotFound`] when the directory does not exist
/// - [`Error::Io`] for any other read or probe failure
pub fn list(path: &NormalizedPath, filter: EntryFilter) -> Result<Vec<String>> {
    if path.as_str().is_empty() || path.as_str() == "." {
        return Err(Error::InvalidPath {
            path: path.as_str().to_string(),
        });
    }

    tracing::trace!(path = %path, ?filter, "listing directory");

    let native = path.to_native();
    let entries = fs::read_dir(&native).map_err(|e| Error::from_io(native.as_path(), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::from_io(native.as_path(), e))?;
        let child = entry.path();
        let meta =
            fs::symlink_metadata(&child).map_err(|e| Error::from_io(child.as_path(), e))?;
        if filter.matches(meta.is_dir()) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}

/// List regular-file children of `path`, sorted by name.
pub fn list_files(path: &NormalizedPath) -> Result<Vec<String>> {
    list(path, EntryFilter::FilesOnly)
}

/// List directory children of `path`, sorted by name.
pub fn list_dirs(path: &NormalizedPath) -> Result<Vec<String>> {
    list(path, EntryFilter::DirsOnly)
}

/// List all children of `path`, sorted by name.
pub fn list_entries(path: &NormalizedPath) -> Result<Vec<String>> {
    list(path, EntryFilter::Any)
}
