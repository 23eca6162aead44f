//! Error types for qatonic-core

use std::path::PathBuf;

/// Result type for qatonic-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in qatonic-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A listed file is not a descriptor file
    #[error("`{file}` is not a json file")]
    UnsupportedFileType { file: String },

    /// Descriptor content is not valid JSON
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Descriptor is valid JSON but not an object
    #[error("Descriptor at {path} must be a JSON object")]
    NotAnObject { path: PathBuf },

    /// Runner descriptor's `steps` field is missing or not an array
    #[error("steps in {runner} need to be an array")]
    StepsNotArray { runner: String },

    /// Properties lookup called with an empty plugin name
    #[error("Plugin name is required")]
    PluginNameRequired,

    /// An environment-scoped operation was called on a repository built
    /// without an environment
    #[error("No environment selected; {operation} requires one")]
    EnvironmentNotSet { operation: &'static str },

    /// Environment-layer properties file failed to load for a reason other
    /// than absence
    #[error("Environment properties: {message}")]
    EnvProperties { message: String },

    /// Group-layer properties file failed to load for a reason other than
    /// absence
    #[error("Group properties: {message}")]
    GroupProperties { message: String },

    /// A variable file broke the context aggregation
    #[error("Failed to load context from `{file}`: {message}")]
    ContextLoad { file: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from qatonic-fs
    #[error(transparent)]
    Fs(#[from] qatonic_fs::Error),

    /// Domain error from qatonic-domain
    #[error(transparent)]
    Domain(#[from] qatonic_domain::Error),
}

impl Error {
    /// Whether this error is, at bottom, a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fs(e) if e.is_not_found())
    }
}
