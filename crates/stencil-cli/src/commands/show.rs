//! Show command implementation.

use clap::Parser;
use serde::Serialize;
use stencil_templates::{CategoryManager, TemplateRecord};

use super::select_managers;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

const MAX_SUGGESTIONS: usize = 5;

/// Print a template and its description
#[derive(Debug, Parser)]
pub struct ShowCommand {
    /// Template as `{name}.{extension}`, e.g. `NewClass.java`
    #[arg(value_name = "QUALIFIED_NAME")]
    pub name: String,

    /// Only search this category
    #[arg(short, long, value_name = "NAME")]
    pub category: Option<String>,
}

impl ShowCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let managers = select_managers(&ctx.loader, self.category.as_deref())?;

        let Some((manager, template)) = managers
            .iter()
            .find_map(|m| m.find(&self.name).map(|t| (*m, t)))
        else {
            return Err(CliError::not_found_with_suggestions(
                "Template",
                &self.name,
                suggestions(&managers, &self.name),
            ));
        };

        let output = ShowOutput {
            category: manager.name(),
            content: template.text()?,
            description: template.description_text()?,
            template,
        };
        print_output(ctx, &output)
    }
}

/// Qualified names containing `wanted`, ignoring case.
fn suggestions(managers: &[&CategoryManager], wanted: &str) -> Vec<String> {
    let wanted = wanted.to_lowercase();
    let mut found: Vec<String> = managers
        .iter()
        .flat_map(|m| m.templates())
        .map(TemplateRecord::qualified_name)
        .filter(|name| name.to_lowercase().contains(&wanted))
        .collect();
    found.sort();
    found.dedup();
    found.truncate(MAX_SUGGESTIONS);
    found
}

#[derive(Debug, Serialize)]
pub struct ShowOutput<'a> {
    pub category: &'a str,
    pub template: &'a TemplateRecord,
    pub content: String,
    pub description: Option<String>,
}

impl FormattedOutput for ShowOutput<'_> {
    fn format_text(&self) -> String {
        let mut text = self.content.trim_end().to_string();
        if let Some(description) = &self.description {
            text.push_str("\n\n--- description ---\n");
            text.push_str(description.trim_end());
        }
        text
    }
}
