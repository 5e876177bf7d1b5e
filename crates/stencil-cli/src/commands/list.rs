//! List command implementation.

use clap::Parser;
use serde::Serialize;
use stencil_templates::{TemplateRecord, TemplateSource};

use super::select_managers;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{columns, print_output, FormattedOutput};

/// List templates per category
#[derive(Debug, Parser)]
pub struct ListCommand {
    /// Only list this category
    #[arg(short, long, value_name = "NAME")]
    pub category: Option<String>,
}

impl ListCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let categories = select_managers(&ctx.loader, self.category.as_deref())?
            .into_iter()
            .map(|manager| CategoryListing {
                category: manager.name(),
                internal: manager.category().is_internal(),
                templates: manager.templates(),
            })
            .collect();

        print_output(ctx, &ListOutput { categories })
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListOutput<'a> {
    pub categories: Vec<CategoryListing<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListing<'a> {
    pub category: &'a str,
    pub internal: bool,
    pub templates: Vec<&'a TemplateRecord>,
}

impl FormattedOutput for ListOutput<'_> {
    fn format_text(&self) -> String {
        let mut sections = Vec::new();
        for listing in &self.categories {
            let mut section = listing.category.to_string();
            if listing.internal {
                section.push_str(" (internal)");
            }

            if listing.templates.is_empty() {
                section.push_str("\n  (no templates)");
            } else {
                let names: Vec<String> =
                    listing.templates.iter().map(|t| t.qualified_name()).collect();
                let rows = names
                    .iter()
                    .zip(&listing.templates)
                    .map(|(name, t)| (name.as_str(), status(t)));
                section.push('\n');
                section.push_str(&columns(rows, 2));
            }
            sections.push(section);
        }
        sections.join("\n\n")
    }
}

fn status(record: &TemplateRecord) -> String {
    let source = match record.source() {
        TemplateSource::Bundled => "bundled",
        TemplateSource::Customized => "customized",
    };
    let description = if record.description_url().is_some() {
        "described"
    } else {
        "no description"
    };
    format!("{source:<10}  {description}")
}
