//! Output formatting utilities for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Trait for types that can be formatted for output
pub trait FormattedOutput {
    fn format_text(&self) -> String;

    fn format_json(&self) -> Result<String, serde_json::Error>
    where
        Self: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}

/// Render `value` in the format selected for this invocation
pub fn render<T>(ctx: &CommandContext, value: &T) -> Result<String, CliError>
where
    T: FormattedOutput + Serialize,
{
    let output = match ctx.format {
        OutputFormat::Text => value.format_text(),
        OutputFormat::Json => value.format_json()?,
    };
    Ok(output)
}

/// Print formatted output to stdout
pub fn print_output<T>(ctx: &CommandContext, value: &T) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
{
    write_output(ctx, value, std::io::stdout().lock())
}

/// Print formatted output to a writer
pub fn write_output<T, W>(ctx: &CommandContext, value: &T, mut writer: W) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
    W: Write,
{
    let output = render(ctx, value)?;
    writeln!(writer, "{output}")?;
    Ok(())
}

/// Left-aligned two column rows, the first column padded to its widest cell
pub fn columns<'a, I>(rows: I, indent: usize) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let rows: Vec<_> = rows.into_iter().collect();
    let width = rows.iter().map(|(left, _)| left.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (left, right) in rows {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{:indent$}{left:<width$}  {right}", ""));
    }
    out
}
