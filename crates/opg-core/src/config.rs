use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::normalize::CollisionPolicy;

/// Marker prefix that turns the generated client into an abstract class.
pub const ABSTRACT_PREFIX: &str = "Abstract";

/// Top-level project configuration loaded from `.opg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpgConfig {
    pub input: String,
    pub output: String,
    /// What to do when a synthesized component name collides with an
    /// existing entry.
    pub on_name_collision: CollisionPolicy,
    pub generator: GeneratorConfig,
}

impl Default for OpgConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: "generated".to_string(),
            on_name_collision: CollisionPolicy::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Options recognized by the PHP client renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub client_class_name: String,
    pub namespace: String,
    pub help_url: Option<String>,
    pub copyright_text: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            client_class_name: "Client".to_string(),
            namespace: "Opg\\Client".to_string(),
            help_url: None,
            copyright_text: None,
        }
    }
}

impl GeneratorConfig {
    /// The `abstract` qualifier flag derived from the client class name.
    pub fn client_class_qualifier(&self) -> Option<&'static str> {
        self.client_class_name
            .starts_with(ABSTRACT_PREFIX)
            .then_some("abstract")
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".opg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OpgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: OpgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# opg configuration
input: openapi.yaml
output: generated

# fail | overwrite — what to do when a synthesized schema name collides
# with an existing components entry.
on_name_collision: fail

generator:
  client_class_name: Client   # an Abstract* name emits an abstract class
  # help_url: https://example.com/docs
  # copyright_text: (c) Example Inc.
"#
}
