//! File-backed artifact repository for qatonic
//!
//! A qatonic project is a directory tree used as an implicit database:
//!
//! ```text
//! <project>/
//!   qatonic.json                       # { runners: [...], ignore?: [...] }
//!   commands/<group>/<name>.json       # command descriptors
//!   commands/<group>/properties.json   # group-layer plugin properties
//!   runners/<group>/<name>.json        # runner descriptors
//!   envs/<env>/properties.json         # environment-layer plugin properties
//!   envs/<env>/vars/<any>.json         # variable files, merged into one context
//! ```
//!
//! [`FileRepository`] is the only entry point: it composes the enumeration
//! and reading primitives from `qatonic-fs` into discovery, artifact load,
//! the two-layer properties cascade, and context aggregation. It holds no
//! state beyond its two constructor inputs (project root, active
//! environment) and never caches filesystem contents, so concurrent calls
//! from independent sites need no coordination.

pub mod error;
pub mod layout;
mod merge;
pub mod repository;

pub use error::{Error, Result};
pub use layout::TreePath;
pub use repository::{Context, FileRepository, PropertySet};
