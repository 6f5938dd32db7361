//! Rendering of locator attributes.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use console::style;

use usl_core::Attributes;

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable key/value lines
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

/// Write every non-empty attribute, one `key value` line each, sorted by key.
pub fn dump(out: &mut impl Write, attributes: &Attributes, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for (key, value) in attributes.iter().filter(|(_, value)| !value.is_empty()) {
                writeln!(out, "{:<24} {}", style(key).cyan().bold(), value)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(attributes)?)?;
        }
    }
    Ok(())
}

/// Write the values of the `wanted` attributes in the order given.
///
/// Unknown attribute names are skipped.
pub fn print(
    out: &mut impl Write,
    attributes: &Attributes,
    wanted: &[String],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let values: Vec<&str> = wanted
                .iter()
                .filter_map(|key| attributes.get(key))
                .collect();
            writeln!(out, "{}", values.join(" "))?;
        }
        OutputFormat::Json => {
            let selected = attributes.select(wanted.iter().map(String::as_str));
            writeln!(out, "{}", serde_json::to_string_pretty(&selected)?)?;
        }
    }
    Ok(())
}
