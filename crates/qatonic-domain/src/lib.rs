//! Domain value types for qatonic
//!
//! The repository layer (`qatonic-core`) discovers and loads descriptor
//! files; the types here are what those loads produce: a [`Qualifier`]
//! addressing one artifact, the [`Command`] and [`Runner`] artifacts
//! themselves, and the [`ProjectConfig`] root configuration.

pub mod command;
pub mod config;
pub mod error;
pub mod qualifier;
pub mod runner;

pub use command::Command;
pub use config::ProjectConfig;
pub use error::{Error, Result};
pub use qualifier::Qualifier;
pub use runner::Runner;
