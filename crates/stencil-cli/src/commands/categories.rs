//! Categories command implementation.

use std::path::Path;

use clap::Parser;
use serde::Serialize;
use stencil_templates::classify::namespace_prefix;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

/// List categories with their directories
#[derive(Debug, Parser)]
pub struct CategoriesCommand {}

impl CategoriesCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let loader = &ctx.loader;
        let categories = loader
            .all_managers()
            .iter()
            .map(|manager| CategorySummary {
                name: manager.name(),
                internal: manager.category().is_internal(),
                prefix: namespace_prefix(loader.config_dir(), manager.config_root()),
                directory: manager.config_root(),
                defaults: manager.default_templates().len(),
                customized: manager.customized_templates().len(),
            })
            .collect();

        print_output(ctx, &CategoriesOutput { categories })
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CategoriesOutput<'a> {
    pub categories: Vec<CategorySummary<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary<'a> {
    pub name: &'a str,
    pub internal: bool,
    /// Namespace prefix bundled paths must carry, empty for the root.
    pub prefix: String,
    pub directory: &'a Path,
    pub defaults: usize,
    pub customized: usize,
}

impl FormattedOutput for CategoriesOutput<'_> {
    fn format_text(&self) -> String {
        self.categories
            .iter()
            .map(|c| {
                let prefix = if c.prefix.is_empty() { "(root)" } else { c.prefix.as_str() };
                let internal = if c.internal { ", internal" } else { "" };
                format!(
                    "{}{internal}\n  prefix:     {prefix}\n  directory:  {}\n  templates:  {} bundled, {} customized",
                    c.name,
                    c.directory.display(),
                    c.defaults,
                    c.customized
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
