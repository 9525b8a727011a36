//! Tic-tac-toe command - Solve weighted boards or play against the solver

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::{config::CliConfig, output},
    tictactoe::{Board, HumanResult, Match, Outcome, Player, SolveResult, Solver},
};

#[derive(Parser, Debug)]
#[command(about = "Weighted Tic-Tac-Toe (ABC349 E)")]
pub struct TicTacToeArgs {
    #[command(subcommand)]
    pub command: TicTacToeCommand,
}

#[derive(Subcommand, Debug)]
pub enum TicTacToeCommand {
    /// Report the optimal moves and the game value of a position
    Solve {
        /// Nine cell scores, row-major, separated by spaces or commas
        #[arg(long, short = 's')]
        scores: Option<String>,

        /// Marks already on the board, e.g. "X...O...." (X first, O second)
        #[arg(long, short = 'b')]
        board: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play against the solver on stdin/stdout
    Play {
        /// Nine cell scores, row-major, separated by spaces or commas
        #[arg(long, short = 's')]
        scores: Option<String>,

        /// Side you play: first or second
        #[arg(long = "as")]
        human: Option<Player>,

        /// Random seed for the CPU's choice among equally good moves
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Message shown on the input screen
pub fn hint_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Player::First) => "First-player win game",
        Outcome::Win(Player::Second) => "Second-player win game",
        Outcome::Draw => "Draw game",
    }
}

fn load_board(scores: Option<&str>, config: &CliConfig) -> Result<Board> {
    let board = match scores {
        Some(scores) => Board::parse_scores(scores).context("invalid scores")?,
        None => Board::checked_scores(config.tictactoe.scores)
            .context("invalid scores in config file")?,
    };
    Ok(board)
}

#[derive(Serialize)]
struct SolveReport<'a> {
    board: String,
    to_move: Player,
    #[serde(flatten)]
    result: &'a SolveResult,
    hint: &'static str,
}

/// Solve `board` and write the report
pub fn report_solution(out: &mut impl Write, board: &Board, json: bool) -> Result<SolveResult> {
    let mut solver = Solver::new();
    let result = solver.solve(board);

    if json {
        output::print_json(
            out,
            &SolveReport {
                board: board.encode(),
                to_move: board.to_move(),
                result: &result,
                hint: hint_message(result.outcome),
            },
        )?;
        return Ok(result);
    }

    output::print_section(out, "Weighted Tic-Tac-Toe")?;
    write!(out, "{board}")?;
    if result.best_moves.is_empty() {
        output::print_kv(out, "result", &result.outcome.to_string())?;
        writeln!(out, "  (position is terminal)")?;
        return Ok(result);
    }
    output::print_kv(out, "to move", board.to_move().as_str())?;
    output::print_kv(out, "value", &result.outcome.to_string())?;
    output::print_kv(out, "hint", hint_message(result.outcome))?;
    writeln!(out, "  optimal moves:")?;
    for &mv in &result.best_moves {
        writeln!(out, "    - {}", output::describe_position(mv))?;
    }
    Ok(result)
}

/// What the player typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Place(usize),
    Hint,
    Quit,
}

/// Accepts a cell index `0-8`, or `row col` with 1-based row and column.
fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["hint" | "h" | "?"] => Some(Command::Hint),
        ["quit" | "q" | "exit"] => Some(Command::Quit),
        [pos] => pos.parse().ok().filter(|&p| p < 9).map(Command::Place),
        [row, col] => {
            let row: usize = row.parse().ok().filter(|r| (1..=3).contains(r))?;
            let col: usize = col.parse().ok().filter(|c| (1..=3).contains(c))?;
            Some(Command::Place((row - 1) * 3 + (col - 1)))
        }
        _ => None,
    }
}

fn print_scores(out: &mut impl Write, game: &Match) -> Result<()> {
    let scores = game.scores();
    let human = game.human();
    let cpu = game.cpu();
    writeln!(
        out,
        "Score: you ({human}) {}, CPU ({cpu}) {}",
        scores.of(human),
        scores.of(cpu)
    )?;
    Ok(())
}

/// Run a game reading moves from `input`. Returns `None` if the player quit
/// or input ran out before the end.
pub fn play_session<R: Rng + ?Sized>(
    game: &mut Match,
    rng: &mut R,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<HumanResult>> {
    let mut line = String::new();

    while !game.is_over() {
        if game.is_cpu_turn() {
            let position = game.play_cpu(rng)?;
            writeln!(out, "CPU plays {}", output::describe_position(position))?;
            continue;
        }

        write!(out, "{}", game.board())?;
        print_scores(out, game)?;
        write!(out, "Your move (0-8, 'row col', hint, quit): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        match parse_command(&line) {
            Some(Command::Place(position)) => {
                if let Err(e) = game.play_human(position) {
                    writeln!(out, "{e}")?;
                }
            }
            Some(Command::Hint) => {
                let moves: Vec<String> = game
                    .suggestions()
                    .into_iter()
                    .map(output::describe_position)
                    .collect();
                writeln!(out, "Optimal: {}", moves.join(", "))?;
            }
            Some(Command::Quit) => return Ok(None),
            None => writeln!(out, "Could not read '{}'", line.trim())?,
        }
    }

    write!(out, "{}", game.board())?;
    print_scores(out, game)?;
    let result = game.human_result();
    match result {
        Some(HumanResult::Win) => writeln!(out, "You win!")?,
        Some(HumanResult::Lose) => writeln!(out, "You lose...")?,
        Some(HumanResult::Draw) => writeln!(out, "Draw")?,
        None => {}
    }
    Ok(result)
}

pub fn execute(args: TicTacToeArgs, config: &CliConfig) -> Result<()> {
    match args.command {
        TicTacToeCommand::Solve {
            scores,
            board,
            json,
        } => {
            let mut position = load_board(scores.as_deref(), config)?;
            if let Some(marks) = board {
                position = position.with_marks(&marks).context("invalid board")?;
                position.validate().context("unreachable board")?;
            }
            let stdout = std::io::stdout();
            report_solution(&mut stdout.lock(), &position, json)?;
            Ok(())
        }
        TicTacToeCommand::Play {
            scores,
            human,
            seed,
        } => {
            let board = load_board(scores.as_deref(), config)?;
            let human = human.unwrap_or(config.tictactoe.human);
            let seed = seed.or(config.seed).unwrap_or_else(rand::random);
            info!(seed, %human, scores = %board.encode(), "starting game");
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Match::new(board, human)?;

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let result = play_session(&mut game, &mut rng, &mut stdin.lock(), &mut stdout.lock())?;
            debug!(?result, moves = game.moves().len(), "game ended");
            Ok(())
        }
    }
}
