//! Graph value types and parse options

use std::{fmt, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

/// Whether node indices start at 0 or at 1.
///
/// Only affects which indices the parser accepts. Edges store the index
/// exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IndexStart {
    #[serde(rename = "0-indexed")]
    ZeroIndexed,
    #[default]
    #[serde(rename = "1-indexed")]
    OneIndexed,
}

impl IndexStart {
    /// Inclusive range of valid node indices for a graph with `n` nodes
    pub fn range(self, n: usize) -> RangeInclusive<usize> {
        match self {
            // n >= 1 for every parsed graph, the saturating sub only guards n == 0
            IndexStart::ZeroIndexed => 0..=n.saturating_sub(1),
            IndexStart::OneIndexed => 1..=n,
        }
    }

    /// Node identifiers in drawing order
    pub fn node_labels(self, n: usize) -> Vec<usize> {
        if n == 0 {
            return Vec::new();
        }
        self.range(n).collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndexStart::ZeroIndexed => "0-indexed",
            IndexStart::OneIndexed => "1-indexed",
        }
    }
}

impl fmt::Display for IndexStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexStart {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0-indexed" | "0" | "zero" => Ok(IndexStart::ZeroIndexed),
            "1-indexed" | "1" | "one" => Ok(IndexStart::OneIndexed),
            _ => Err(crate::Error::ParseIndexStart {
                input: s.to_string(),
            }),
        }
    }
}

/// Options accepted by [`parse`](super::parse).
///
/// # Examples
///
/// ```
/// use cpviz::graph::{IndexStart, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_index_start(IndexStart::ZeroIndexed)
///     .with_weighted(true);
/// assert!(options.weighted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Lowest valid node index
    pub index_start: IndexStart,
    /// Whether every edge line carries a third `weight` token
    pub weighted: bool,
}

impl ParseOptions {
    /// One-indexed, unweighted
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_start(mut self, index_start: IndexStart) -> Self {
        self.index_start = index_start;
        self
    }

    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }
}

/// A directed-as-written edge. Self-loops and duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Edge {
            from,
            to,
            weight: None,
        }
    }

    pub fn weighted(from: usize, to: usize, weight: i64) -> Self {
        Edge {
            from,
            to,
            weight: Some(weight),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} {} {}", self.from, self.to, w),
            None => write!(f, "{} {}", self.from, self.to),
        }
    }
}

/// A parsed graph: node count plus edges in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub n: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Graph {
            n,
            edges: Vec::new(),
        }
    }

    pub fn with_edges(n: usize, edges: Vec<Edge>) -> Self {
        Graph { n, edges }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_labels(&self, index_start: IndexStart) -> Vec<usize> {
        index_start.node_labels(self.n)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.n, self.edges.len())?;
        for edge in &self.edges {
            write!(f, "\n{edge}")?;
        }
        Ok(())
    }
}
