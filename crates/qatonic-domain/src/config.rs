//! Project root configuration

use serde::{Deserialize, Serialize};

use crate::Qualifier;

/// The parsed `<name>.json` at the project root.
///
/// `runners` is the execution list; `ignore` excludes entries from it and
/// defaults to empty when the file does not carry the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Runner qualifiers to execute, in file order.
    pub runners: Vec<Qualifier>,

    /// Runner qualifiers to skip.
    #[serde(default)]
    pub ignore: Vec<Qualifier>,
}

impl ProjectConfig {
    /// Whether `qualifier` is on the ignore list.
    pub fn is_ignored(&self, qualifier: &Qualifier) -> bool {
        self.ignore.contains(qualifier)
    }

    /// The runners to execute, with ignored ones filtered out.
    pub fn active_runners(&self) -> impl Iterator<Item = &Qualifier> {
        self.runners.iter().filter(|q| !self.is_ignored(q))
    }
}
