//! TOML loading with helpful error messages

use std::path::Path;

use anyhow::{Context, Result};

use super::paths::default_config_path;
use super::schema::ParserConfig;

/// Load and validate a parser configuration file.
pub fn load(path: &Path) -> Result<ParserConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load the configuration from the default location, or the built-in
/// configuration when no file exists there.
pub fn load_default() -> Result<ParserConfig> {
    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!("loading parser config from {}", path.display());
            load(&path)
        }
        _ => Ok(ParserConfig::default()),
    }
}

/// Parse configuration content from a string.
pub fn from_toml_str(content: &str) -> Result<ParserConfig> {
    let config: ParserConfig =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    config.validate()?;

    Ok(config)
}

/// Serialize a configuration to a TOML string.
pub fn to_toml(config: &ParserConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize parser config")
}

fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let message = error.message().to_string();

    match error.span() {
        Some(span) => {
            let line_num = content[..span.start.min(content.len())]
                .matches('\n')
                .count()
                + 1;
            anyhow::anyhow!(
                "TOML parsing error at line {}:\n{}\n\nError: {}",
                line_num,
                line_context(content, line_num),
                message
            )
        }
        None => anyhow::anyhow!("TOML parsing error: {}", message),
    }
}

fn line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = line_num.saturating_sub(2);
    let end = (line_num + 1).min(lines.len());

    lines[start.min(end)..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
