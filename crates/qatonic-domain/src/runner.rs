//! Runner descriptors

use std::fmt;

use serde_json::Value;

use crate::Qualifier;

/// One loaded runner: an ordered list of opaque steps.
///
/// Steps are kept exactly as found in the descriptor file, in file order;
/// interpreting them is the execution engine's business.
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    qualifier: Qualifier,
    steps: Vec<Value>,
}

impl Runner {
    /// A runner with no steps yet.
    pub fn new(qualifier: Qualifier) -> Self {
        Self {
            qualifier,
            steps: Vec::new(),
        }
    }

    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }

    /// Append one step, preserving insertion order.
    pub fn push_step(&mut self, step: Value) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Value] {
        &self.steps
    }
}

impl fmt::Display for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualifier)
    }
}
