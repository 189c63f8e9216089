//! Plain text reporter
//!
//! The wire contract: the first line carries the path's vertex count; when
//! the count is nonzero a second line lists the vertices in traversal
//! order, separated by single spaces. An empty path is just the `0` line.

use anyhow::Result;

/// Render the path in the plain wire format
pub fn render(path: &[u32]) -> Result<String> {
    let mut out = format!("{}\n", path.len());
    if !path.is_empty() {
        let vertices: Vec<String> = path.iter().map(|v| v.to_string()).collect();
        out.push_str(&vertices.join(" "));
        out.push('\n');
    }
    Ok(out)
}
