//! Longpath - approximate longest simple path search
//!
//! Computing a longest simple path is NP-hard, so this crate runs a greedy
//! heuristic instead of exact search. For every candidate root vertex it
//! labels the graph with BFS distances from that root, then walks greedily
//! toward higher-distance vertices from the farthest one found, and keeps
//! the longest path any root produced. Root ranges are scanned in parallel
//! on large graphs.

pub mod cli;
pub mod graph;
pub mod reporters;
pub mod search;
