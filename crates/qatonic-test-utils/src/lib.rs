//! Shared test fixtures for the qatonic workspace.
//!
//! This crate provides the [`TestProject`] builder used by crate test
//! suites and the integration tests. Dev-only — never published.

pub mod project;

pub use project::TestProject;
