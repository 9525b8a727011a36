//! Output formatting helpers for CLI

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Print a section header
pub fn print_section(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count().max(20)))?;
    Ok(())
}

/// Print a key-value pair
pub fn print_kv(out: &mut impl Write, key: &str, value: &str) -> Result<()> {
    writeln!(out, "  {:14} {}", format!("{key}:"), value)?;
    Ok(())
}

/// Print a value as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// `position (row r, col c)` with 1-based rows and columns
pub fn describe_position(position: usize) -> String {
    format!(
        "{position} (row {}, col {})",
        position / 3 + 1,
        position % 3 + 1
    )
}
