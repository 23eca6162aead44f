//! Filesystem primitives for the qatonic artifact tree
//!
//! Provides normalized path handling, directory enumeration with kind
//! filtering, and raw UTF-8 file reading. Nothing in this crate knows the
//! artifact directory convention; that lives in `qatonic-core`.

pub mod error;
pub mod io;
pub mod list;
pub mod path;

pub use error::{Error, Result};
pub use list::EntryFilter;
pub use path::NormalizedPath;
