//! Raw file reading

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read the whole file at `path` as UTF-8 text.
///
/// Never returns partial content: the file either decodes completely or the
/// call fails. A missing file maps to [`Error::NotFound`]; any other failure,
/// including invalid UTF-8, maps to [`Error::Io`].
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| Error::from_io(native.as_path(), e))
}
