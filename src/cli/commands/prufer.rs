//! Prüfer command - Decode a Prüfer code, or draw a random labelled tree
//!
//! Text output is in contest graph format (`N M` header then one edge per
//! line), so it can be piped straight back into `cpviz graph`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::{config::CliConfig, output},
    graph::{IndexStart, decode, random_code, validate_code},
};

#[derive(Parser, Debug)]
#[command(about = "Decode Prüfer sequences into trees")]
pub struct PruferArgs {
    #[command(subcommand)]
    pub command: PruferCommand,
}

#[derive(Subcommand, Debug)]
pub enum PruferCommand {
    /// Decode the given code (labels 0..n-1, n = length + 2)
    Decode {
        /// Code values
        code: Vec<usize>,

        /// Label nodes in the output starting from 0 or 1
        #[arg(long, short = 'i', default_value = "0-indexed")]
        index_start: IndexStart,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Draw a uniformly random labelled tree
    Random {
        /// Number of nodes (at least 2)
        nodes: usize,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Label nodes in the output starting from 0 or 1
        #[arg(long, short = 'i', default_value = "0-indexed")]
        index_start: IndexStart,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
pub struct TreeReport {
    pub nodes: usize,
    pub code: Vec<usize>,
    pub edges: Vec<(usize, usize)>,
}

impl TreeReport {
    /// Decode `code`, shifting labels for one-indexed output
    pub fn from_code(code: Vec<usize>, index_start: IndexStart) -> Self {
        let offset = match index_start {
            IndexStart::ZeroIndexed => 0,
            IndexStart::OneIndexed => 1,
        };
        let edges = decode(&code)
            .into_iter()
            .map(|(u, v)| (u + offset, v + offset))
            .collect();
        TreeReport {
            nodes: code.len() + 2,
            code,
            edges,
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{} {}", self.nodes, self.edges.len())?;
        for (u, v) in &self.edges {
            writeln!(out, "{u} {v}")?;
        }
        Ok(())
    }
}

fn emit(report: &TreeReport, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        output::print_json(&mut out, report)
    } else {
        report.write_text(&mut out)
    }
}

pub fn execute(args: PruferArgs, config: &CliConfig) -> Result<()> {
    match args.command {
        PruferCommand::Decode {
            code,
            index_start,
            json,
        } => {
            validate_code(&code).context("invalid Prüfer code")?;
            emit(&TreeReport::from_code(code, index_start), json)
        }
        PruferCommand::Random {
            nodes,
            seed,
            index_start,
            json,
        } => {
            let seed = seed.or(config.seed).unwrap_or_else(rand::random);
            debug!(seed, nodes, "drawing random tree");
            let mut rng = StdRng::seed_from_u64(seed);
            let code = random_code(nodes, &mut rng)?;
            emit(&TreeReport::from_code(code, index_start), json)
        }
    }
}
