//! Constants for the artifact tree layout.

use std::path::Path;

/// The group-layer and environment-layer plugin properties file name.
pub const PROPERTIES_FILE: &str = "properties.json";

/// Descriptor file extension, with the dot.
pub const DESCRIPTOR_EXT: &str = ".json";

/// Default root configuration name (`qatonic.json`).
pub const DEFAULT_CONFIG_NAME: &str = "qatonic";

/// Fixed directory names of the artifact tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreePath {
    /// The `commands/` namespace
    Commands,
    /// The `runners/` namespace
    Runners,
    /// The `envs/` root of environment subtrees
    Envs,
    /// The `vars/` directory inside one environment
    Vars,
}

impl TreePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commands => "commands",
            Self::Runners => "runners",
            Self::Envs => "envs",
            Self::Vars => "vars",
        }
    }
}

impl AsRef<Path> for TreePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for TreePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
