//! Sierpinski carpet (ABC357 C)
//!
//! Cell `(i, j)` of the level-`n` carpet is white exactly when some ternary
//! digit position holds a `1` in both `i` and `j`.

use super::check_range;

/// Largest level the problem allows
pub const LEVEL_MAX: u32 = 6;

/// Digit `k` (0 = least significant) of `n` written in base 3
pub fn ternary_digit(n: usize, k: u32) -> usize {
    match 3usize.checked_pow(k) {
        Some(place) => n / place % 3,
        None => 0,
    }
}

/// Whether cell `(row, col)` of the level-`level` carpet is a white hole
pub fn is_white(level: u32, row: usize, col: usize) -> bool {
    (0..level).any(|k| ternary_digit(row, k) == 1 && ternary_digit(col, k) == 1)
}

/// Rows of the carpet, `#` for black and `.` for white
pub fn carpet(level: u32) -> crate::Result<Vec<String>> {
    check_range("level", level, 0, LEVEL_MAX)?;
    let side = 3usize.pow(level);
    Ok((0..side)
        .map(|row| {
            (0..side)
                .map(|col| if is_white(level, row, col) { '.' } else { '#' })
                .collect()
        })
        .collect())
}
