//! The file-backed artifact repository
//!
//! `FileRepository` encodes the directory convention and composes the
//! `qatonic-fs` primitives to answer four kinds of queries: discovery
//! (which groups and names exist), artifact load (one parsed command or
//! runner), the two-layer properties cascade, and context aggregation.
//! Every operation fully succeeds or fails as a whole; the only swallowed
//! failure is a missing *optional* properties layer, which contributes
//! nothing instead of failing.

use serde_json::{Map, Value};

use qatonic_domain::{Command, ProjectConfig, Qualifier, Runner};
use qatonic_fs::{NormalizedPath, io, list};

use crate::layout::{DEFAULT_CONFIG_NAME, DESCRIPTOR_EXT, PROPERTIES_FILE, TreePath};
use crate::merge::merge_into;
use crate::{Error, Result};

/// One plugin's merged configuration after the cascade.
pub type PropertySet = Map<String, Value>;

/// The merged variable namespace for one environment.
pub type Context = Map<String, Value>;

/// Resolves artifacts and configuration from a qatonic project tree.
///
/// Holds exactly two immutable values — the project root and the optional
/// active environment — and reads the filesystem fresh on every call.
///
/// # Example
///
/// ```ignore
/// use qatonic_core::FileRepository;
///
/// let repo = FileRepository::with_env("/path/to/project", "dev");
/// let groups = repo.command_groups()?;
/// let context = repo.context()?;
/// ```
#[derive(Debug, Clone)]
pub struct FileRepository {
    root: NormalizedPath,
    env: Option<String>,
}

impl FileRepository {
    /// A repository without an active environment.
    ///
    /// Environment-scoped operations ([`properties`](Self::properties),
    /// [`context`](Self::context)) will fail fast with
    /// [`Error::EnvironmentNotSet`].
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            env: None,
        }
    }

    /// A repository bound to one environment under `envs/`.
    pub fn with_env(root: impl Into<NormalizedPath>, env: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            env: Some(env.into()),
        }
    }

    /// The project root this repository reads from.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// The active environment name, if one was supplied.
    pub fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }

    // ---- Discovery -------------------------------------------------------

    /// Group names under `commands/`, sorted.
    pub fn command_groups(&self) -> Result<Vec<String>> {
        Ok(list::list_dirs(&self.root.join(TreePath::Commands.as_str()))?)
    }

    /// Group names under `runners/`, sorted.
    pub fn runner_groups(&self) -> Result<Vec<String>> {
        Ok(list::list_dirs(&self.root.join(TreePath::Runners.as_str()))?)
    }

    /// Command names in one group, `.json` suffix stripped, sorted.
    ///
    /// The reserved name `properties` is excluded: the group's
    /// `properties.json` is a cascade layer, not a command descriptor.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedFileType`] if any file in the group directory is
    /// not a `.json` file — one foreign file poisons the whole listing.
    pub fn commands(&self, group: &str) -> Result<Vec<String>> {
        let dir = self.root.join(TreePath::Commands.as_str()).join(group);
        let mut names = descriptor_names(&dir)?;
        names.retain(|name| name != "properties");
        Ok(names)
    }

    /// Runner names in one group, `.json` suffix stripped, sorted.
    ///
    /// Same strict extension policy as [`commands`](Self::commands).
    pub fn runners(&self, group: &str) -> Result<Vec<String>> {
        let dir = self.root.join(TreePath::Runners.as_str()).join(group);
        descriptor_names(&dir)
    }

    // ---- Artifact load ---------------------------------------------------

    /// Load and parse one command descriptor.
    ///
    /// Injects `group` and `name` from the qualifier into the decoded
    /// document, overwriting any same-named fields the file carried, then
    /// hands the result to [`Command::parse`].
    pub fn load_command(&self, qualifier: &Qualifier) -> Result<Command> {
        let file = self
            .root
            .join(TreePath::Commands.as_str())
            .join(qualifier.group())
            .join(&format!("{}{}", qualifier.name(), DESCRIPTOR_EXT));
        tracing::debug!(path = %file, "loading command descriptor");

        let mut doc = read_object(&file)?;
        doc.insert("group".to_string(), Value::String(qualifier.group().into()));
        doc.insert("name".to_string(), Value::String(qualifier.name().into()));

        Ok(Command::parse(Value::Object(doc))?)
    }

    /// Load one runner descriptor.
    ///
    /// The descriptor must carry a `steps` field that is specifically an
    /// array; each element becomes one step, in file order.
    ///
    /// # Errors
    ///
    /// [`Error::StepsNotArray`] when `steps` is missing or has any other
    /// shape.
    pub fn load_runner(&self, qualifier: &Qualifier) -> Result<Runner> {
        let file = self
            .root
            .join(TreePath::Runners.as_str())
            .join(qualifier.group())
            .join(&format!("{}{}", qualifier.name(), DESCRIPTOR_EXT));
        tracing::debug!(path = %file, "loading runner descriptor");

        let doc = read_object(&file)?;
        let Some(Value::Array(steps)) = doc.get("steps") else {
            return Err(Error::StepsNotArray {
                runner: qualifier.to_string(),
            });
        };

        let mut runner = Runner::new(qualifier.clone());
        for step in steps {
            runner.push_step(step.clone());
        }
        Ok(runner)
    }

    // ---- Properties cascade ----------------------------------------------

    /// Resolve one plugin's properties through the two-layer cascade.
    ///
    /// Layer 1 is the environment's `properties.json`, from which the
    /// sub-object keyed by `plugin` is taken (an absent key contributes
    /// nothing). Layer 2, consulted only when `command_group` is given, is
    /// the group's `properties.json`, whose whole document is merged over
    /// layer 1 — every layer-2 key wins, keys unique to either layer
    /// survive. A missing file at either layer contributes nothing; any
    /// other failure is fatal.
    pub fn properties(&self, plugin: &str, command_group: Option<&str>) -> Result<PropertySet> {
        if plugin.is_empty() {
            return Err(Error::PluginNameRequired);
        }

        let mut props = PropertySet::new();

        // Layer 1: envs/<env>/properties.json
        let env_file = self.env_path("properties")?.join(PROPERTIES_FILE);
        tracing::debug!(path = %env_file, "checking environment properties (layer 1)");
        match io::read_text(&env_file) {
            Ok(text) => {
                let doc = parse_object(&env_file, &text)
                    .map_err(|e| Error::EnvProperties { message: e.to_string() })?;
                match doc.get(plugin) {
                    Some(Value::Object(sub)) => props = sub.clone(),
                    Some(other) => {
                        return Err(Error::EnvProperties {
                            message: format!("properties for plugin `{plugin}` must be an object, got {other}"),
                        });
                    }
                    None => tracing::debug!(plugin, "no environment properties for plugin"),
                }
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!("no environment properties file, keep looking");
            }
            Err(e) => {
                return Err(Error::EnvProperties {
                    message: e.to_string(),
                });
            }
        }

        // Layer 2: commands/<group>/properties.json
        if let Some(group) = command_group {
            let group_file = self
                .root
                .join(TreePath::Commands.as_str())
                .join(group)
                .join(PROPERTIES_FILE);
            tracing::debug!(path = %group_file, "checking group properties (layer 2)");
            match io::read_text(&group_file) {
                Ok(text) => {
                    let doc = parse_object(&group_file, &text)
                        .map_err(|e| Error::GroupProperties { message: e.to_string() })?;
                    merge_into(&mut props, doc);
                }
                Err(e) if e.is_not_found() => {
                    tracing::debug!("no group properties either");
                }
                Err(e) => {
                    return Err(Error::GroupProperties {
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(props)
    }

    // ---- Context aggregation ---------------------------------------------

    /// Merge every variable file under `envs/<env>/vars/` into one flat
    /// namespace.
    ///
    /// Files are processed in sorted listing order; a key defined by a later
    /// file overwrites the same key from an earlier one, deterministically.
    /// Any unreadable or unparsable file aborts the whole aggregation.
    pub fn context(&self) -> Result<Context> {
        let vars_dir = self.env_path("context")?.join(TreePath::Vars.as_str());
        let names = descriptor_names(&vars_dir)?;
        tracing::debug!(count = names.len(), dir = %vars_dir, "aggregating context");

        let mut context = Context::new();
        for name in names {
            let file = vars_dir.join(&format!("{name}{DESCRIPTOR_EXT}"));
            let doc = io::read_text(&file)
                .map_err(Error::from)
                .and_then(|text| parse_object(&file, &text))
                .map_err(|e| Error::ContextLoad {
                    file: format!("{name}{DESCRIPTOR_EXT}"),
                    message: e.to_string(),
                })?;
            merge_into(&mut context, doc);
        }
        Ok(context)
    }

    // ---- Root configuration ----------------------------------------------

    /// Load `qatonic.json` at the project root.
    pub fn load_config(&self) -> Result<ProjectConfig> {
        self.load_named_config(DEFAULT_CONFIG_NAME)
    }

    /// Load `<name>.json` at the project root.
    ///
    /// A file without an `ignore` field parses with an empty ignore list.
    pub fn load_named_config(&self, name: &str) -> Result<ProjectConfig> {
        let file = self.root.join(&format!("{name}{DESCRIPTOR_EXT}"));
        tracing::debug!(path = %file, "loading project configuration");

        let text = io::read_text(&file)?;
        serde_json::from_str(&text).map_err(|e| Error::Parse {
            path: file.to_native(),
            message: e.to_string(),
        })
    }

    // ---- Helpers ---------------------------------------------------------

    /// `envs/<env>`, or fail fast when no environment was supplied.
    fn env_path(&self, operation: &'static str) -> Result<NormalizedPath> {
        let env = self
            .env
            .as_deref()
            .ok_or(Error::EnvironmentNotSet { operation })?;
        Ok(self.root.join(TreePath::Envs.as_str()).join(env))
    }
}

/// List a directory's files and strip the `.json` suffix from each.
///
/// Strict policy: one file without the suffix fails the whole listing.
fn descriptor_names(dir: &NormalizedPath) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for file in list::list_files(dir)? {
        match file.strip_suffix(DESCRIPTOR_EXT) {
            Some(stem) if !stem.is_empty() => names.push(stem.to_string()),
            _ => return Err(Error::UnsupportedFileType { file }),
        }
    }
    Ok(names)
}

/// Read `path` and decode it as a JSON object.
fn read_object(path: &NormalizedPath) -> Result<Map<String, Value>> {
    let text = io::read_text(path)?;
    parse_object(path, &text)
}

fn parse_object(path: &NormalizedPath, text: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(text).map_err(|e| Error::Parse {
        path: path.to_native(),
        message: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject {
            path: path.to_native(),
        }),
    }
}
