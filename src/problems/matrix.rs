//! 01 Matrix Again (ARC176 A)
//!
//! The cells with equal `(row + col) mod n` form a wrapped anti-diagonal
//! that meets every row and every column once. Filling `m` distinct
//! diagonals, among them every diagonal that holds a required cell, gives
//! each row and each column exactly `m` ones.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::check_range;

/// Zero-based grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Anti-diagonal of this cell in an `n x n` grid
    pub fn diagonal(self, n: usize) -> usize {
        (self.row + self.col) % n
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = crate::Error;

    /// `row,col`, zero-based
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || crate::Error::ParseCoordinates {
            input: s.to_string(),
        };
        let (row, col) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Cell { row, col })
    }
}

/// Diagonals chosen for a grid and the cells they cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filling {
    pub n: usize,
    /// Diagonal indices, those of the required cells first
    pub diagonals: Vec<usize>,
    /// `n` cells per diagonal, in diagonal order then by row
    pub cells: Vec<Cell>,
}

impl Filling {
    /// Ones per row and per column
    pub fn ones_per_line(&self) -> usize {
        self.diagonals.len()
    }

    /// `grid[row][col]` is true for filled cells
    pub fn grid(&self) -> Vec<Vec<bool>> {
        let mut grid = vec![vec![false; self.n]; self.n];
        for cell in &self.cells {
            grid[cell.row][cell.col] = true;
        }
        grid
    }
}

/// Fill an `n x n` grid so every row and column holds `required.len()` ones
/// and every required cell is a one.
///
/// # Errors
///
/// Returns error if `n` is zero, a cell lies outside the grid or is listed
/// twice, or there are more required cells than `n`.
pub fn fill_grid(n: usize, required: &[Cell]) -> crate::Result<Filling> {
    check_range("n", n, 1, usize::MAX)?;
    if required.len() > n {
        return Err(crate::Error::TooManyCells {
            cells: required.len(),
            max: n,
        });
    }

    let mut used = vec![false; n];
    let mut diagonals = Vec::with_capacity(required.len());
    for (index, &cell) in required.iter().enumerate() {
        check_range("row", cell.row, 0, n - 1)?;
        check_range("col", cell.col, 0, n - 1)?;
        if required[..index].contains(&cell) {
            return Err(crate::Error::DuplicateCell {
                row: cell.row,
                col: cell.col,
            });
        }
        let k = cell.diagonal(n);
        if !used[k] {
            used[k] = true;
            diagonals.push(k);
        }
    }
    trace!(n, shared = required.len() - diagonals.len(), "required diagonals");

    for k in 0..n {
        if diagonals.len() >= required.len() {
            break;
        }
        if !used[k] {
            used[k] = true;
            diagonals.push(k);
        }
    }

    let cells = diagonals
        .iter()
        .flat_map(|&k| (0..n).map(move |row| Cell::new(row, (k + n - row) % n)))
        .collect();

    Ok(Filling {
        n,
        diagonals,
        cells,
    })
}
