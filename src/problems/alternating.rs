//! Alternating String (ABC341 E)
//!
//! Flipping `S[l..=r]` changes the adjacent-difference sequence
//! `S[i] xor S[i+1]` in at most two places, just outside each end of the
//! range. Everything inside the range keeps its difference.

use super::check_range;

/// Parse a string of `0` and `1` characters
pub fn parse_bits(s: &str) -> crate::Result<Vec<bool>> {
    s.trim()
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(crate::Error::InvalidBit {
                character,
                position,
            }),
        })
        .collect()
}

pub fn format_bits(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// `S[i] xor S[i+1]` for every adjacent pair
pub fn adjacent_difference(bits: &[bool]) -> Vec<bool> {
    bits.windows(2).map(|w| w[0] != w[1]).collect()
}

/// Whether no two adjacent characters are equal
pub fn is_alternating(bits: &[bool]) -> bool {
    adjacent_difference(bits).into_iter().all(|d| d)
}

/// Copy of `bits` with the 1-based inclusive range `l..=r` inverted
pub fn flip(bits: &[bool], l: usize, r: usize) -> crate::Result<Vec<bool>> {
    check_range("l", l, 1, bits.len())?;
    check_range("r", r, l, bits.len())?;
    Ok(bits
        .iter()
        .enumerate()
        .map(|(i, &b)| if (l - 1..r).contains(&i) { !b } else { b })
        .collect())
}

/// Zero-based indices into [`adjacent_difference`] that a flip of `l..=r`
/// inverts, for a string of length `len`
pub fn changed_differences(len: usize, l: usize, r: usize) -> Vec<usize> {
    let mut changed = Vec::with_capacity(2);
    if l >= 2 {
        changed.push(l - 2);
    }
    if r < len {
        changed.push(r - 1);
    }
    changed
}
