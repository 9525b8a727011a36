//! Problem command - Compute the smaller contest problems of the collection

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::{config::CliConfig, output},
    problems::{
        Cell, Direction, Point, Puzzle, adjacent_difference, bad_juice, carpet,
        changed_differences, fill_grid, flip, format_bits, identify, is_alternating, parse_bits,
        serve, sick_friends,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Smaller contest problems")]
pub struct ProblemArgs {
    #[command(subcommand)]
    pub command: ProblemCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProblemCommand {
    /// ABC337 E - Bad Juice: which friend tastes which bottle
    Juice {
        /// Number of bottles N
        bottles: usize,

        /// Spoiled bottle X (1-based)
        #[arg(long, short = 'x')]
        spoiled: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// ABC341 E - Alternating String: adjacent differences under a range flip
    Alternating {
        /// String of 0 and 1
        bits: String,

        /// Flip the 1-based inclusive range L..=R
        #[arg(long, num_args = 2, value_names = ["L", "R"])]
        flip: Option<Vec<usize>>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// ARC176 A - 01 Matrix Again: fill diagonals through the required cells
    Matrix {
        /// Grid size N
        n: usize,

        /// Required cell `row,col` (zero-based), repeatable
        #[arg(long = "cell", short = 'c')]
        cells: Vec<Cell>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// ABC357 C - Sierpinski carpet
    Carpet {
        /// Carpet level N
        level: u32,
    },

    /// ABC323 F - Push and Carry: fewest actions to bring the cargo home
    Cargo {
        /// Mover start `x,y`
        #[arg(long, allow_hyphen_values = true, default_value = "1,2")]
        player: Point,

        /// Cargo start `x,y`
        #[arg(long, allow_hyphen_values = true, default_value = "3,3")]
        cargo: Point,

        /// Goal `x,y`
        #[arg(long, allow_hyphen_values = true, default_value = "0,5")]
        goal: Point,

        /// Draw random start positions instead
        #[arg(long)]
        random: bool,

        /// Random seed for --random
        #[arg(long)]
        seed: Option<u64>,

        /// WASD keys to replay against the puzzle
        #[arg(long)]
        moves: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn mark(filled: bool) -> char {
    if filled { '#' } else { '.' }
}

#[derive(Serialize)]
struct JuiceReport {
    bottles: usize,
    friends: usize,
    plan: Vec<Vec<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spoiled: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sick: Option<Vec<bool>>,
}

/// Serving plan, one row per bottle with friend 1 in the rightmost column
pub fn report_juice(
    out: &mut impl Write,
    bottles: usize,
    spoiled: Option<usize>,
    json: bool,
) -> Result<()> {
    bad_juice::check_bottles(bottles)?;
    let sick = spoiled
        .map(|spoiled| sick_friends(bottles, spoiled))
        .transpose()?;
    let plan = serve(bottles);
    let friends = bad_juice::friends_needed(bottles);

    if json {
        return output::print_json(
            out,
            &JuiceReport {
                bottles,
                friends,
                plan,
                spoiled,
                sick,
            },
        );
    }

    output::print_section(out, "Bad Juice")?;
    output::print_kv(out, "bottles", &bottles.to_string())?;
    output::print_kv(out, "friends", &friends.to_string())?;
    for (index, row) in plan.iter().enumerate() {
        let cells: String = row.iter().rev().map(|&served| mark(served)).collect();
        let note = if spoiled == Some(index + 1) {
            "  <- spoiled"
        } else {
            ""
        };
        writeln!(out, "  {:>5}  {cells}{note}", index + 1)?;
    }
    if let Some(sick) = sick {
        let names: Vec<String> = sick
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s)
            .map(|(j, _)| (j + 1).to_string())
            .collect();
        let names = if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        };
        output::print_kv(out, "sick friends", &names)?;
        output::print_kv(out, "identified", &format!("bottle {}", identify(&sick)))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct AlternatingReport {
    bits: String,
    differences: String,
    alternating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    flipped: Option<FlipReport>,
}

#[derive(Serialize)]
struct FlipReport {
    l: usize,
    r: usize,
    bits: String,
    differences: String,
    changed: Vec<usize>,
    alternating: bool,
}

pub fn report_alternating(
    out: &mut impl Write,
    input: &str,
    range: Option<(usize, usize)>,
    json: bool,
) -> Result<()> {
    let bits = parse_bits(input)?;
    let diff = adjacent_difference(&bits);
    let flipped = match range {
        Some((l, r)) => {
            let after = flip(&bits, l, r)?;
            let after_diff = adjacent_difference(&after);
            Some(FlipReport {
                l,
                r,
                alternating: is_alternating(&after),
                bits: format_bits(&after),
                differences: format_bits(&after_diff),
                changed: changed_differences(bits.len(), l, r),
            })
        }
        None => None,
    };
    let report = AlternatingReport {
        bits: format_bits(&bits),
        alternating: is_alternating(&bits),
        differences: format_bits(&diff),
        flipped,
    };

    if json {
        return output::print_json(out, &report);
    }

    let yes_no = |b: bool| if b { "yes" } else { "no" };
    output::print_section(out, "Alternating String")?;
    output::print_kv(out, "S", &report.bits)?;
    output::print_kv(out, "xor", &report.differences)?;
    output::print_kv(out, "alternating", yes_no(report.alternating))?;
    if let Some(flipped) = &report.flipped {
        output::print_kv(out, "flip", &format!("{}..={}", flipped.l, flipped.r))?;
        output::print_kv(out, "S", &flipped.bits)?;
        output::print_kv(out, "xor", &flipped.differences)?;
        let changed: Vec<String> = flipped.changed.iter().map(|i| (i + 1).to_string()).collect();
        output::print_kv(out, "changed", &changed.join(", "))?;
        output::print_kv(out, "alternating", yes_no(flipped.alternating))?;
    }
    Ok(())
}

/// Grid with `#` on required cells, `1` on the other filled cells
pub fn report_matrix(out: &mut impl Write, n: usize, cells: &[Cell], json: bool) -> Result<()> {
    let filling = fill_grid(n, cells)?;
    if json {
        return output::print_json(out, &filling);
    }

    output::print_section(out, "01 Matrix Again")?;
    output::print_kv(out, "ones per line", &filling.ones_per_line().to_string())?;
    output::print_kv(out, "k", &filling.cells.len().to_string())?;
    for (row, line) in filling.grid().iter().enumerate() {
        let text: String = line
            .iter()
            .enumerate()
            .map(|(col, &filled)| match filled {
                _ if cells.contains(&Cell::new(row, col)) => '#',
                true => '1',
                false => '.',
            })
            .collect();
        writeln!(out, "  {text}")?;
    }
    Ok(())
}

/// Replay `moves` on `puzzle`, then write the result
pub fn report_cargo(
    out: &mut impl Write,
    mut puzzle: Puzzle,
    moves: Option<&str>,
    json: bool,
) -> Result<()> {
    if let Some(moves) = moves {
        for (index, direction) in Direction::parse_keys(moves)?.into_iter().enumerate() {
            if puzzle.is_solved() {
                debug!(step = index, "cargo on the goal, ignoring remaining moves");
                break;
            }
            puzzle.step(direction)?;
        }
    }

    if json {
        return output::print_json(out, &puzzle);
    }

    output::print_section(out, "Push and Carry")?;
    output::print_kv(out, "player", &puzzle.player().to_string())?;
    output::print_kv(out, "cargo", &puzzle.cargo().to_string())?;
    output::print_kv(out, "goal", &puzzle.goal().to_string())?;
    output::print_kv(out, "best", &puzzle.best().to_string())?;
    if moves.is_some() {
        output::print_kv(out, "actions", &puzzle.actions().to_string())?;
        let verdict = match (puzzle.is_solved(), puzzle.is_optimal()) {
            (true, true) => "solved, optimal",
            (true, false) => "solved",
            (false, _) => "cargo not on the goal",
        };
        output::print_kv(out, "result", verdict)?;
    }
    Ok(())
}

pub fn execute(args: ProblemArgs, config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.command {
        ProblemCommand::Juice {
            bottles,
            spoiled,
            json,
        } => report_juice(&mut out, bottles, spoiled, json),
        ProblemCommand::Alternating { bits, flip, json } => {
            let range = match flip.as_deref() {
                Some(&[l, r]) => Some((l, r)),
                Some(other) => bail!("--flip takes two values, got {}", other.len()),
                None => None,
            };
            report_alternating(&mut out, &bits, range, json)
        }
        ProblemCommand::Matrix { n, cells, json } => report_matrix(&mut out, n, &cells, json),
        ProblemCommand::Carpet { level } => {
            for row in carpet(level)? {
                writeln!(out, "{row}")?;
            }
            Ok(())
        }
        ProblemCommand::Cargo {
            player,
            cargo,
            goal,
            random,
            seed,
            moves,
            json,
        } => {
            let puzzle = if random {
                let seed = seed.or(config.seed).unwrap_or_else(rand::random);
                debug!(seed, "drawing random puzzle");
                Puzzle::random(&mut StdRng::seed_from_u64(seed))?
            } else {
                Puzzle::new(player, cargo, goal).context("invalid start positions")?
            };
            report_cargo(&mut out, puzzle, moves.as_deref(), json)
        }
    }
}
