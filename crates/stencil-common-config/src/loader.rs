//! Configuration file loading and parsing.

use crate::types::StencilConfig;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use stencil_common_i18n::Locale;
use thiserror::Error;

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Relative location of the config file inside a project.
pub const CONFIG_FILE: &str = ".stencil/config.yaml";

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Project directory relative paths are resolved against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Load configuration from `.stencil/config.yaml`.
    ///
    /// A missing file yields the defaults.
    pub fn load(&self) -> Result<StencilConfig, ConfigError> {
        let config_path = self.base_path.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(self.resolve(StencilConfig::default()));
        }

        self.load_file(&config_path)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(&self, path: &Path) -> Result<StencilConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let expanded = self.expand_env_vars(&contents)?;

        let config: StencilConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&config)?;
        Ok(self.resolve(config))
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("env var pattern is valid")
        });

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let default = cap.get(2).map(|m| m.as_str());

            let value = match std::env::var(var_name) {
                Ok(v) => v,
                Err(_) => match default {
                    Some(d) => d.to_string(),
                    None => {
                        return Err(ConfigError::EnvVarNotFound {
                            var: var_name.to_string(),
                        })
                    }
                },
            };

            result = result.replace(&cap[0], &value);
        }

        Ok(result)
    }

    /// Validate configuration values.
    fn validate(&self, config: &StencilConfig) -> Result<(), ConfigError> {
        let root_name = &config.templates.root_name;
        if root_name.is_empty() || root_name.contains('/') || root_name.contains('\\') {
            return Err(ConfigError::ValidationError {
                message: "templates.root_name must be a single non-empty path segment".to_string(),
            });
        }

        if let Some(locale) = &config.templates.locale {
            if Locale::parse(locale).is_none() {
                return Err(ConfigError::ValidationError {
                    message: format!("templates.locale `{locale}` is not a valid locale"),
                });
            }
        }

        for ext in &config.templates.compound_extensions {
            if ext.is_empty() || ext.starts_with('.') || ext.ends_with('.') {
                return Err(ConfigError::ValidationError {
                    message: format!("templates.compound_extensions entry `{ext}` is malformed"),
                });
            }
        }

        let mut seen = HashSet::new();
        for plugin in &config.plugins {
            if plugin.id.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "plugins[].id must not be empty".to_string(),
                });
            }
            if !seen.insert(plugin.id.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("plugins[].id `{}` is declared twice", plugin.id),
                });
            }
        }

        Ok(())
    }

    /// Make relative directories absolute against the project directory.
    fn resolve(&self, mut config: StencilConfig) -> StencilConfig {
        if config.templates.config_dir.is_relative() {
            config.templates.config_dir = self.base_path.join(&config.templates.config_dir);
        }
        for plugin in &mut config.plugins {
            for root in &mut plugin.roots {
                if root.is_relative() {
                    *root = self.base_path.join(&*root);
                }
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PluginConfig;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) {
        let stencil_dir = dir.join(".stencil");
        fs::create_dir_all(&stencil_dir).unwrap();
        fs::write(stencil_dir.join("config.yaml"), content).unwrap();
    }

    #[test]
    fn test_load_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path());
        let config = loader.load().unwrap();
        assert_eq!(config.templates.root_name, "fileTemplates");
        assert_eq!(
            config.templates.config_dir,
            dir.path().join(".stencil/fileTemplates")
        );
    }

    #[test]
    fn test_load_config_from_yaml_file() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
templates:
  config_dir: /opt/stencil/templates
  locale: fr_FR
  compound_extensions: [html.twig]
plugins:
  - id: core
    roots: [core]
  - id: legacy
    enabled: false
    roots: [/abs/legacy]
log:
  level: debug
  format: json
"#,
        );

        let config = ConfigLoader::new(dir.path()).load().unwrap();

        assert_eq!(config.templates.config_dir, PathBuf::from("/opt/stencil/templates"));
        assert_eq!(config.templates.locale.as_deref(), Some("fr_FR"));
        assert_eq!(config.templates.compound_extensions, vec!["html.twig".to_string()]);
        assert_eq!(config.plugins[0].roots, vec![dir.path().join("core")]);
        assert!(!config.plugins[1].enabled);
        assert_eq!(config.plugins[1].roots, vec![PathBuf::from("/abs/legacy")]);
        assert_eq!(config.log.level, stencil_common_log::LogLevel::Debug);
        assert_eq!(config.log.format, stencil_common_log::LogFormat::Json);
    }

    #[test]
    fn test_env_var_expansion() {
        std::env::set_var("STENCIL_TEST_CFG_VAR", "test_value");
        let loader = ConfigLoader::new(".");
        let result = loader.expand_env_vars("key: ${STENCIL_TEST_CFG_VAR}").unwrap();
        assert_eq!(result, "key: test_value");
        std::env::remove_var("STENCIL_TEST_CFG_VAR");
    }

    #[test]
    fn test_env_var_default() {
        let loader = ConfigLoader::new(".");
        let result = loader
            .expand_env_vars("key: ${STENCIL_NONEXISTENT_VAR:-default}")
            .unwrap();
        assert_eq!(result, "key: default");
    }

    #[test]
    fn test_env_var_missing_error() {
        let loader = ConfigLoader::new(".");
        let result = loader.expand_env_vars("key: ${STENCIL_MISSING_VAR}");
        match result.unwrap_err() {
            ConfigError::EnvVarNotFound { var } => assert_eq!(var, "STENCIL_MISSING_VAR"),
            other => panic!("Expected EnvVarNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_errors() {
        let loader = ConfigLoader::new(".");

        let mut config = StencilConfig::default();
        config.templates.root_name = "a/b".to_string();
        match loader.validate(&config).unwrap_err() {
            ConfigError::ValidationError { message } => assert!(message.contains("root_name")),
            other => panic!("Expected ValidationError, got {other:?}"),
        }

        let mut config = StencilConfig::default();
        config.templates.locale = Some("not a locale".to_string());
        match loader.validate(&config).unwrap_err() {
            ConfigError::ValidationError { message } => assert!(message.contains("locale")),
            other => panic!("Expected ValidationError, got {other:?}"),
        }

        let mut config = StencilConfig::default();
        config.templates.compound_extensions = vec![".twig".to_string()];
        assert!(loader.validate(&config).is_err());

        let plugin = PluginConfig {
            id: "dup".to_string(),
            enabled: true,
            roots: vec![],
        };
        let mut config = StencilConfig::default();
        config.plugins = vec![plugin.clone(), plugin];
        match loader.validate(&config).unwrap_err() {
            ConfigError::ValidationError { message } => assert!(message.contains("declared twice")),
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_with_line_number() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
templates:
  locale: en_US
  compound_extensions: [unclosed
"#,
        );

        match ConfigLoader::new(dir.path()).load().unwrap_err() {
            ConfigError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("Expected ParseError with line number, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path());
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            loader.load_file(&missing),
            Err(ConfigError::NotFound { .. })
        ));
    }
}
