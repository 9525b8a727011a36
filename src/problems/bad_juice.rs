//! Bad Juice (ABC337 E)
//!
//! Friend `j` drinks from every bottle whose zero-based index has bit `j`
//! set. Who falls sick then spells out the spoiled bottle in binary.

use super::check_range;

/// Fewest bottles the problem allows
pub const BOTTLE_MIN: usize = 2;
/// Most bottles the problem allows
pub const BOTTLE_MAX: usize = 100;

/// `ceil(log2(bottles))`, the fewest friends that tell `bottles` bottles apart
pub fn friends_needed(bottles: usize) -> usize {
    (usize::BITS - bottles.saturating_sub(1).leading_zeros()) as usize
}

/// Serving plan. Row `i` holds, per friend, whether bottle `i + 1` goes to them.
pub fn serve(bottles: usize) -> Vec<Vec<bool>> {
    let friends = friends_needed(bottles);
    (0..bottles)
        .map(|i| (0..friends).map(|j| (i >> j) & 1 == 1).collect())
        .collect()
}

/// Which friends fall sick when bottle `spoiled` (1-based) is the bad one
pub fn sick_friends(bottles: usize, spoiled: usize) -> crate::Result<Vec<bool>> {
    check_range("spoiled bottle", spoiled, 1, bottles)?;
    let index = spoiled - 1;
    Ok((0..friends_needed(bottles))
        .map(|j| (index >> j) & 1 == 1)
        .collect())
}

/// Spoiled bottle (1-based) read back from the sick friends
pub fn identify(sick: &[bool]) -> usize {
    sick.iter()
        .rev()
        .fold(0usize, |acc, &s| (acc << 1) | usize::from(s))
        + 1
}

/// Bottle count within the problem's limits
pub fn check_bottles(bottles: usize) -> crate::Result<()> {
    check_range("bottles", bottles, BOTTLE_MIN, BOTTLE_MAX)
}
