//! JSON reporter
//!
//! Pretty-printed JSON for machine consumption or piping to jq.

use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct PathReport<'a> {
    length: usize,
    vertices: &'a [u32],
}

/// Render the path as JSON
pub fn render(path: &[u32]) -> Result<String> {
    let report = PathReport {
        length: path.len(),
        vertices: path,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
