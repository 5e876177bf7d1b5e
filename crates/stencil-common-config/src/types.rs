//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use stencil_common_log::{LogFormat, LogLevel};

/// Name of the resource directory plugins ship templates under.
pub const DEFAULT_ROOT_NAME: &str = "fileTemplates";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StencilConfig {
    /// Template loading configuration.
    pub templates: TemplatesConfig,
    /// Plugins contributing bundled templates, in load order.
    pub plugins: Vec<PluginConfig>,
    /// Logging defaults.
    pub log: LogSettings,
}

/// Template loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory holding user overrides, one sub-directory per category.
    /// Relative paths resolve against the project directory.
    pub config_dir: PathBuf,
    /// Resource directory name searched in every plugin root.
    pub root_name: String,
    /// Locale override for descriptions (e.g. `en_US`).
    pub locale: Option<String>,
    /// Multi-dot extensions the file type registry recognizes.
    pub compound_extensions: Vec<String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(".stencil/fileTemplates"),
            root_name: DEFAULT_ROOT_NAME.to_string(),
            locale: None,
            compound_extensions: Vec::new(),
        }
    }
}

/// One plugin contributing template resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Unique plugin identifier.
    pub id: String,
    /// Disabled plugins are ignored by the loader.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Resource roots searched for the template directory.
    #[serde(default)]
    pub roots: Vec<PathBuf>,
}

fn default_true() -> bool {
    true
}

/// Logging defaults, overridden by environment and flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}
