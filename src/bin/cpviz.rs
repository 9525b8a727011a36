//! cpviz CLI - Contest-problem visualizer toolkit
//!
//! This CLI provides a unified interface for:
//! - Parsing graphs written in contest input format
//! - Decoding Prüfer sequences and drawing random trees
//! - Solving and playing Weighted Tic-Tac-Toe
//! - The smaller contest problems

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cpviz::{cli::config::CliConfig, logging::LogFormat};

#[derive(Parser)]
#[command(name = "cpviz")]
#[command(version, about = "Algorithms behind the contest-problem visualizers", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log line format
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a graph description
    Graph(cpviz::cli::commands::graph::GraphArgs),

    /// Decode Prüfer codes and draw random trees
    Prufer(cpviz::cli::commands::prufer::PruferArgs),

    /// Solve or play Weighted Tic-Tac-Toe
    #[command(name = "tictactoe", alias = "ttt")]
    TicTacToe(cpviz::cli::commands::tictactoe::TicTacToeArgs),

    /// Smaller contest problems
    Problem(cpviz::cli::commands::problem::ProblemArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    cpviz::logging::init(cli.verbose, cli.log_format.unwrap_or(config.log_format))?;

    match cli.command {
        Commands::Graph(args) => cpviz::cli::commands::graph::execute(args, &config),
        Commands::Prufer(args) => cpviz::cli::commands::prufer::execute(args, &config),
        Commands::TicTacToe(args) => cpviz::cli::commands::tictactoe::execute(args, &config),
        Commands::Problem(args) => cpviz::cli::commands::problem::execute(args, &config),
    }
}
