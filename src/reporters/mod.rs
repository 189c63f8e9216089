//! Output reporters for the computed path
//!
//! Supports two output formats:
//! - `text` - the plain wire format: a vertex-count line, then the vertices
//! - `json` - machine-readable JSON

mod json;
mod text;

use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a path in the specified format
pub fn render(path: &[u32], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(path),
        OutputFormat::Json => json::render(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
        assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
