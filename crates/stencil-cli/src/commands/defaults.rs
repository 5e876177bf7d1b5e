//! Defaults command implementation.

use clap::Parser;
use serde::Serialize;
use stencil_templates::Url;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{columns, print_output, FormattedOutput};

/// Print the default description locations
#[derive(Debug, Parser)]
pub struct DefaultsCommand {}

impl DefaultsCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let loader = &ctx.loader;
        let output = DefaultsOutput {
            locale: loader.locale().to_string(),
            template_description: loader.default_template_description(),
            include_description: loader.default_include_description(),
            roots: loader.roots(),
        };
        print_output(ctx, &output)
    }
}

#[derive(Debug, Serialize)]
pub struct DefaultsOutput<'a> {
    pub locale: String,
    pub template_description: Option<&'a Url>,
    pub include_description: Option<&'a Url>,
    /// Resource roots scanned, in processing order.
    pub roots: &'a [Url],
}

impl FormattedOutput for DefaultsOutput<'_> {
    fn format_text(&self) -> String {
        let or_none = |url: Option<&Url>| url.map_or_else(|| "(none)".to_string(), Url::to_string);

        let mut text = columns(
            [
                ("locale", self.locale.clone()),
                ("template description", or_none(self.template_description)),
                ("include description", or_none(self.include_description)),
            ],
            0,
        );
        text.push_str("\nroots");
        if self.roots.is_empty() {
            text.push_str("\n  (none)");
        }
        for root in self.roots {
            text.push_str(&format!("\n  {root}"));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_without_roots() {
        let output = DefaultsOutput {
            locale: "en_US".into(),
            template_description: None,
            include_description: None,
            roots: &[],
        };
        let expected = [
            format!("{:<20}  en_US", "locale"),
            format!("{:<20}  (none)", "template description"),
            format!("{:<20}  (none)", "include description"),
            "roots".to_string(),
            "  (none)".to_string(),
        ]
        .join("\n");
        assert_eq!(output.format_text(), expected);
    }
}
