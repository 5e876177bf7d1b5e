//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use stencil_common_config::{ConfigLoader, StencilConfig};
use stencil_common_i18n::Locale;
use stencil_templates::{
    DirectoryResourceProvider, ExtensionRegistry, LoaderOptions, PluginDescriptor,
    StaticPluginRegistry, TemplatesLoader,
};
use tracing::debug;

use crate::commands::{CategoriesCommand, DefaultsCommand, ListCommand, ShowCommand};
use crate::error::CliError;

/// Stencil - inspect the file templates bundled with plugins
///
/// Discovers every plugin's `fileTemplates` directory, sorts templates into
/// categories and shows what a user would get, overrides included.
#[derive(Debug, Parser)]
#[command(
    name = "stencil",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error log output"
    )]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "STENCIL_CONFIG",
        value_hint = ValueHint::FilePath,
        help = "Path to configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Project directory
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "STENCIL_PROJECT_DIR",
        default_value = ".",
        value_hint = ValueHint::DirPath,
        help = "Project directory holding .stencil/"
    )]
    pub project: PathBuf,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    /// Extra plugin directories
    #[arg(
        long = "plugin-dir",
        global = true,
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Add an enabled plugin rooted at DIR (repeatable)"
    )]
    pub plugin_dirs: Vec<PathBuf>,

    /// Locale used to pick descriptions
    #[arg(long, global = true, help = "Description locale, e.g. en_US")]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List templates per category
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Print a template and its description
    Show(ShowCommand),

    /// List categories with their directories
    Categories(CategoriesCommand),

    /// Print the default description locations
    Defaults(DefaultsCommand),
}

impl Cli {
    /// Load configuration from `--config` or the project directory
    pub fn load_config(&self) -> Result<StencilConfig, CliError> {
        let loader = ConfigLoader::new(&self.project);
        let config = match &self.config {
            Some(path) => loader.load_file(path)?,
            None => loader.load()?,
        };
        Ok(config)
    }

    /// Run the loading pass described by `config` and the global flags
    pub fn build_loader(&self, config: &StencilConfig) -> Result<TemplatesLoader, CliError> {
        let mut registry = StaticPluginRegistry::from_config(&config.plugins)?;
        for dir in &self.plugin_dirs {
            if !dir.is_dir() {
                return Err(CliError::not_found("Plugin directory", dir.display().to_string()));
            }
            let provider = DirectoryResourceProvider::new([dir])?;
            registry.register(PluginDescriptor::new(dir.display().to_string(), Arc::new(provider)));
        }

        let mut options = LoaderOptions::from_config(&config.templates);
        if let Some(locale) = &self.locale {
            let locale = Locale::parse(locale).ok_or_else(|| {
                CliError::validation("--locale", format!("invalid locale `{locale}`"))
            })?;
            options = options.with_locale(locale);
        }
        debug!(
            config_dir = %options.config_dir.display(),
            locale = %options.locale,
            plugins = registry.len(),
            "building template loader"
        );

        Ok(TemplatesLoader::new(
            options,
            Arc::new(registry),
            Arc::new(ExtensionRegistry::from_config(&config.templates)),
        ))
    }

    /// Execute the selected command
    pub fn execute(self, config: StencilConfig) -> Result<(), CliError> {
        let ctx = CommandContext {
            loader: self.build_loader(&config)?,
            format: self.format,
        };

        match &self.command {
            Command::List(cmd) => cmd.execute(&ctx),
            Command::Show(cmd) => cmd.execute(&ctx),
            Command::Categories(cmd) => cmd.execute(&ctx),
            Command::Defaults(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub loader: TemplatesLoader,
    pub format: OutputFormat,
}
