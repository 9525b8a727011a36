//! Smaller contest problems from the visualizer collection
//!
//! Each module holds the computation behind one problem page; the pages
//! themselves only draw what these functions return.

pub mod alternating;
pub mod bad_juice;
pub mod carpet;
pub mod matrix;
pub mod push_cargo;

use std::fmt;

pub use alternating::{
    adjacent_difference, changed_differences, flip, format_bits, is_alternating, parse_bits,
};
pub use bad_juice::{friends_needed, identify, serve, sick_friends};
pub use carpet::{carpet, is_white, ternary_digit};
pub use matrix::{Cell, Filling, fill_grid};
pub use push_cargo::{Direction, Point, Puzzle, minimum_actions};

/// Reject `value` outside `[min, max]`
pub(crate) fn check_range<T>(name: &'static str, value: T, min: T, max: T) -> crate::Result<()>
where
    T: PartialOrd + fmt::Display,
{
    if value < min || value > max {
        return Err(crate::Error::OutOfRange {
            name,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_message() {
        assert!(check_range("n", 3, 1, 10).is_ok());
        let err = check_range("n", 11, 1, 10).unwrap_err();
        assert_eq!(err.to_string(), "n = 11 is outside [1, 10]");
    }
}
