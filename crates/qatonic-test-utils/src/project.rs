//! [`TestProject`] builder for qatonic artifact trees.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

/// A temporary qatonic project tree with helpers for laying out descriptor
/// files exactly where the repository convention expects them.
///
/// # Example
///
/// ```rust,no_run
/// use qatonic_test_utils::TestProject;
/// use serde_json::json;
///
/// let project = TestProject::new();
/// project.write_command("http", "login", &json!({"plugin": "http-client"}));
/// project.write_vars("dev", "api", &json!({"host": "localhost"}));
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The project root path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `commands/<group>/<name>.json`.
    pub fn write_command(&self, group: &str, name: &str, body: &Value) {
        self.write_json(&format!("commands/{group}/{name}.json"), body);
    }

    /// Write `runners/<group>/<name>.json`.
    pub fn write_runner(&self, group: &str, name: &str, body: &Value) {
        self.write_json(&format!("runners/{group}/{name}.json"), body);
    }

    /// Write `commands/<group>/properties.json` (the group cascade layer).
    pub fn write_group_properties(&self, group: &str, body: &Value) {
        self.write_json(&format!("commands/{group}/properties.json"), body);
    }

    /// Write `envs/<env>/properties.json` (the environment cascade layer).
    pub fn write_env_properties(&self, env: &str, body: &Value) {
        self.write_json(&format!("envs/{env}/properties.json"), body);
    }

    /// Write `envs/<env>/vars/<name>.json`.
    pub fn write_vars(&self, env: &str, name: &str, body: &Value) {
        self.write_json(&format!("envs/{env}/vars/{name}.json"), body);
    }

    /// Write `<name>.json` at the project root.
    pub fn write_config(&self, name: &str, body: &Value) {
        self.write_json(&format!("{name}.json"), body);
    }

    /// Write arbitrary (possibly invalid) content at a path relative to the
    /// project root, creating parent directories as needed.
    pub fn write_raw(&self, rel_path: &str, content: &str) {
        let full = self.root().join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
    }

    /// Create a directory (and parents) relative to the project root.
    pub fn mkdir(&self, rel_path: &str) {
        fs::create_dir_all(self.root().join(rel_path)).unwrap();
    }

    fn write_json(&self, rel_path: &str, body: &Value) {
        self.write_raw(rel_path, &serde_json::to_string_pretty(body).unwrap());
    }
}
