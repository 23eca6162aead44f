//! Command descriptors
//!
//! A command descriptor is a duck-typed JSON object: three load-bearing
//! string fields (`group`, `name`, `plugin`) and an open remainder that is
//! handed to the plugin untouched. Step-execution semantics live outside
//! this workspace.

use serde_json::{Map, Value};

use crate::{Error, Qualifier, Result};

/// One loaded command: which plugin runs it, and the plugin's parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    qualifier: Qualifier,
    plugin: String,
    params: Map<String, Value>,
}

impl Command {
    /// Parse a decoded descriptor into a command.
    ///
    /// Expects the repository layer to have injected `group` and `name`
    /// already; `plugin` comes from the file itself. Everything else in the
    /// object becomes [`params`](Command::params).
    pub fn parse(value: Value) -> Result<Self> {
        let Value::Object(mut doc) = value else {
            return Err(Error::CommandNotAnObject);
        };

        let group = take_string(&mut doc, "group")?;
        let name = take_string(&mut doc, "name")?;
        let plugin = take_string(&mut doc, "plugin")?;

        Ok(Self {
            qualifier: Qualifier::new(group, name)?,
            plugin,
            params: doc,
        })
    }

    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }

    /// The plugin responsible for executing this command.
    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    /// All descriptor fields other than `group`, `name` and `plugin`.
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }
}

fn take_string(doc: &mut Map<String, Value>, field: &'static str) -> Result<String> {
    match doc.remove(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(Error::FieldNotAString { field }),
        None => Err(Error::MissingField { field }),
    }
}
