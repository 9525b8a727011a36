//! Graph command - Parse a graph description and report nodes and edges

use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{config::CliConfig, output},
    graph::{Edge, Graph, IndexStart, ParseError, ParseOptions, parse},
};

#[derive(Parser, Debug)]
#[command(about = "Parse a graph in contest input format")]
pub struct GraphArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Node numbering: 0-indexed or 1-indexed
    #[arg(long, short = 'i')]
    pub index_start: Option<IndexStart>,

    /// Expect a weight after each edge
    #[arg(long, short = 'w')]
    pub weighted: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum GraphReport<'a> {
    Ok {
        index_start: IndexStart,
        nodes: Vec<usize>,
        edges: &'a [Edge],
    },
    Error {
        #[serde(flatten)]
        error: &'a ParseError,
    },
}

/// Read the graph text from `path`, or stdin when `None`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read graph from {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read graph from stdin")?;
            Ok(text)
        }
    }
}

/// Merge command-line flags over the config file
pub fn options(args: &GraphArgs, config: &CliConfig) -> ParseOptions {
    ParseOptions::new()
        .with_index_start(args.index_start.unwrap_or(config.graph.index_start))
        .with_weighted(args.weighted || config.graph.weighted)
}

/// Write the parse result. Returns whether parsing succeeded.
pub fn report(
    out: &mut impl Write,
    result: &std::result::Result<Graph, ParseError>,
    options: &ParseOptions,
    json: bool,
) -> Result<bool> {
    match (result, json) {
        (Ok(graph), true) => {
            output::print_json(
                out,
                &GraphReport::Ok {
                    index_start: options.index_start,
                    nodes: graph.node_labels(options.index_start),
                    edges: &graph.edges,
                },
            )?;
        }
        (Err(error), true) => {
            output::print_json(out, &GraphReport::Error { error })?;
        }
        (Ok(graph), false) => {
            output::print_section(out, "Graph")?;
            output::print_kv(out, "indexing", options.index_start.as_str())?;
            output::print_kv(out, "nodes", &graph.n.to_string())?;
            output::print_kv(out, "edges", &graph.edge_count().to_string())?;
            for edge in &graph.edges {
                match edge.weight {
                    Some(weight) => writeln!(out, "  {} -- {} ({weight})", edge.from, edge.to)?,
                    None => writeln!(out, "  {} -- {}", edge.from, edge.to)?,
                }
            }
        }
        (Err(error), false) => {
            writeln!(out, "error: {error}")?;
        }
    }
    Ok(result.is_ok())
}

pub fn execute(args: GraphArgs, config: &CliConfig) -> Result<()> {
    let options = options(&args, config);
    let text = read_input(args.file.as_deref())?;
    let result = parse(&text, &options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if !report(&mut out, &result, &options, args.json)? {
        bail!("invalid graph input");
    }
    Ok(())
}
