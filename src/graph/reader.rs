//! Edge-list reader
//!
//! Wire format: two leading integers `vertex_count edge_count`, then
//! `edge_count` pairs of 0-indexed endpoints, one undirected edge per pair.
//! Tokens are separated by arbitrary whitespace; line breaks carry no
//! meaning.

use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use super::Graph;

/// Errors reading or parsing an edge-list file.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid {expected}: '{token}'")]
    InvalidToken {
        token: String,
        expected: &'static str,
    },

    #[error("edge endpoint {vertex} out of range for {vertex_count} vertices")]
    EdgeOutOfRange { vertex: u32, vertex_count: usize },
}

fn parse_token<'a, T, I>(tokens: &mut I, expected: &'static str) -> Result<T, ReadError>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(ReadError::UnexpectedEof { expected })?;
    token.parse().map_err(|_| ReadError::InvalidToken {
        token: token.to_string(),
        expected,
    })
}

/// Read an unweighted undirected graph from an edge-list file.
pub fn read_graph(path: &Path) -> Result<Graph, ReadError> {
    let text = std::fs::read_to_string(path)?;
    parse_graph(&text)
}

/// Parse an edge list from its textual form.
///
/// Endpoints are bounds-checked here so a malformed file surfaces as a
/// [`ReadError`] instead of reaching [`Graph::from_edges`], which does not
/// validate. Tokens past the declared edge count are ignored.
pub fn parse_graph(text: &str) -> Result<Graph, ReadError> {
    let mut tokens = text.split_whitespace();

    let vertex_count: usize = parse_token(&mut tokens, "vertex count")?;
    let edge_count: usize = parse_token(&mut tokens, "edge count")?;

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let u: u32 = parse_token(&mut tokens, "edge endpoint")?;
        let v: u32 = parse_token(&mut tokens, "edge endpoint")?;
        for endpoint in [u, v] {
            if endpoint as usize >= vertex_count {
                return Err(ReadError::EdgeOutOfRange {
                    vertex: endpoint,
                    vertex_count,
                });
            }
        }
        edges.push((u, v));
    }

    debug!(vertex_count, edge_count, "parsed edge list");
    Ok(Graph::from_edges(vertex_count, &edges))
}
