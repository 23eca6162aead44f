//! Qualifiers address one artifact as a (group, name) pair
//!
//! The string form is `<group>.<name>`: the first dot splits the two parts,
//! so the name itself may contain dots. Neither part may be empty or carry a
//! path separator — the pair maps directly onto a directory and a file name.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Identifies one command or runner within its namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    group: String,
    name: String,
}

impl Qualifier {
    /// Build a qualifier from its two parts, validating both.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidQualifier`] when either part is empty or contains a
    /// path separator.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let name = name.into();
        validate_part(&group, &name, "group", &group)?;
        validate_part(&group, &name, "name", &name)?;
        Ok(Self { group, name })
    }

    /// The namespace segment (one subdirectory).
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The artifact name within its group (one descriptor file).
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_part(group: &str, name: &str, which: &str, part: &str) -> Result<()> {
    let input = format!("{group}.{name}");
    if part.is_empty() {
        return Err(Error::InvalidQualifier {
            input,
            message: format!("{which} must not be empty"),
        });
    }
    if part.contains('/') || part.contains('\\') {
        return Err(Error::InvalidQualifier {
            input,
            message: format!("{which} must not contain a path separator"),
        });
    }
    Ok(())
}

impl FromStr for Qualifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((group, name)) = s.split_once('.') else {
            return Err(Error::InvalidQualifier {
                input: s.to_string(),
                message: "expected `<group>.<name>`".to_string(),
            });
        };
        Self::new(group, name)
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

impl Serialize for Qualifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Qualifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
