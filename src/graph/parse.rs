//! Parser for the contest graph text format
//!
//! ```text
//! N [M]
//! from to [weight]
//! ...
//! ```
//!
//! The first line holds the node count and an optional edge count. Each
//! following line is one edge. When `M` is given only the first `M` edge
//! lines are read and anything after them is ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{Edge, Graph, ParseOptions};

/// Which part of the input a [`ParseError`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseField {
    N,
    M,
    #[serde(rename = "edge")]
    Edge,
}

impl fmt::Display for ParseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseField::N => f.write_str("N"),
            ParseField::M => f.write_str("M"),
            ParseField::Edge => f.write_str("edge"),
        }
    }
}

/// Structured parse failure. `line` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub field: ParseField,
    pub line: usize,
    pub message: String,
}

impl ParseError {
    fn new(field: ParseField, line: usize, message: impl Into<String>) -> Self {
        let error = ParseError {
            field,
            line,
            message: message.into(),
        };
        debug!(field = %error.field, line = error.line, message = %error.message, "graph parse failed");
        error
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.field, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse a token as an integer. No float, exponent, or whitespace coercion.
fn parse_int(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

fn parse_node_count(token: Option<&str>) -> Result<usize, ParseError> {
    let Some(token) = token else {
        return Err(ParseError::new(
            ParseField::N,
            0,
            "N is missing: expected a positive integer",
        ));
    };
    match parse_int(token) {
        Some(n) if n >= 1 => usize::try_from(n).map_err(|_| {
            ParseError::new(ParseField::N, 0, format!("N '{token}' is too large"))
        }),
        _ => Err(ParseError::new(
            ParseField::N,
            0,
            format!("N must be a positive integer, got '{token}'"),
        )),
    }
}

fn parse_edge_count(token: &str) -> Result<usize, ParseError> {
    match parse_int(token) {
        Some(m) if m >= 0 => usize::try_from(m).map_err(|_| {
            ParseError::new(ParseField::M, 0, format!("M '{token}' is too large"))
        }),
        _ => Err(ParseError::new(
            ParseField::M,
            0,
            format!("M must be a non-negative integer, got '{token}'"),
        )),
    }
}

fn parse_edge(
    content: &str,
    line: usize,
    n: usize,
    options: &ParseOptions,
) -> Result<Edge, ParseError> {
    let range = options.index_start.range(n);
    let invalid = || {
        let shape = if options.weighted {
            "from to weight"
        } else {
            "from to"
        };
        ParseError::new(
            ParseField::Edge,
            line,
            format!(
                "invalid edge '{content}': expected '{shape}' with {} <= from, to <= {}",
                range.start(),
                range.end()
            ),
        )
    };

    let tokens: Vec<&str> = content.split_whitespace().collect();
    let expected = if options.weighted { 3 } else { 2 };
    if tokens.len() != expected {
        return Err(invalid());
    }

    let node = |token: &str| {
        parse_int(token)
            .and_then(|v| usize::try_from(v).ok())
            .filter(|v| range.contains(v))
    };
    let from = node(tokens[0]).ok_or_else(invalid)?;
    let to = node(tokens[1]).ok_or_else(invalid)?;

    if options.weighted {
        let weight = parse_int(tokens[2]).ok_or_else(invalid)?;
        Ok(Edge::weighted(from, to, weight))
    } else {
        Ok(Edge::new(from, to))
    }
}

/// Parse a graph description.
///
/// Returns the graph or the first problem found. No partial graph is
/// returned on failure.
///
/// # Examples
///
/// ```
/// use cpviz::graph::{Edge, ParseField, ParseOptions, parse};
///
/// let graph = parse("3 2\n1 2\n1 3\n2 3", &ParseOptions::default()).unwrap();
/// assert_eq!(graph.edges, vec![Edge::new(1, 2), Edge::new(1, 3)]);
///
/// let err = parse("0", &ParseOptions::default()).unwrap_err();
/// assert_eq!(err.field, ParseField::N);
/// ```
pub fn parse(text: &str, options: &ParseOptions) -> Result<Graph, ParseError> {
    let lines: Vec<&str> = text.trim_end().split('\n').collect();

    let mut header = lines[0].split_whitespace();
    let n = parse_node_count(header.next())?;
    let m = header.next().map(parse_edge_count).transpose()?;

    let last_line = match m {
        Some(m) => m.min(lines.len() - 1),
        None => lines.len() - 1,
    };

    let mut edges = Vec::with_capacity(last_line);
    for (line, content) in lines.iter().enumerate().take(last_line + 1).skip(1) {
        edges.push(parse_edge(content, line, n, options)?);
    }

    if let Some(m) = m
        && edges.len() < m
    {
        return Err(ParseError::new(
            ParseField::Edge,
            lines.len(),
            format!("too few edges: expected {m}, got {}", edges.len()),
        ));
    }

    debug!(n, edges = edges.len(), "parsed graph");
    Ok(Graph { n, edges })
}
