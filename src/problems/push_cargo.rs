//! Push and Carry (ABC323 F)
//!
//! A mover walks on the integer grid one cell per action. Walking into the
//! cargo pushes it one cell further in the same direction. The cargo must
//! reach the goal in as few actions as possible.
//!
//! The closed form: walk to the cell behind the cargo, push along one axis,
//! step around the corner (2 actions) and push along the other axis. Try
//! both axis orders. A walk whose only shortest route runs through the
//! cargo costs 2 more.

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::check_range;

/// Largest absolute coordinate the problem allows, `10^17`
pub const COORD_LIMIT: i64 = 100_000_000_000_000_000;
/// Coordinate bound for randomly drawn puzzles
pub const RANDOM_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    pub fn manhattan(self, other: Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    fn offset(self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(self.x + dx, self.y + dy)
    }

    fn check(self, name: &'static str) -> crate::Result<()> {
        check_range(name, self.x, -COORD_LIMIT, COORD_LIMIT)?;
        check_range(name, self.y, -COORD_LIMIT, COORD_LIMIT)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || crate::Error::ParseCoordinates {
            input: s.to_string(),
        };
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Point { x, y })
    }
}

/// One step of the mover. `Up` is `+y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, -1),
            Direction::Right => (1, 0),
        }
    }

    /// WASD key for this direction
    pub fn from_key(key: char) -> Option<Direction> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse a string of WASD keys, ignoring whitespace
    pub fn parse_keys(keys: &str) -> crate::Result<Vec<Direction>> {
        keys.chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, key)| {
                Direction::from_key(key).ok_or(crate::Error::InvalidMoveKey { key, position })
            })
            .collect()
    }
}

/// Mover and cargo after one step from `(player, cargo)`
pub fn step(player: Point, cargo: Point, direction: Direction) -> (Point, Point) {
    let player = player.offset(direction);
    if player == cargo {
        (player, cargo.offset(direction))
    } else {
        (player, cargo)
    }
}

fn strictly_between(v: i64, a: i64, b: i64) -> bool {
    a.min(b) < v && v < a.max(b)
}

/// Actions to walk from `from` to `to` without touching `cargo`
fn walk(from: Point, to: Point, cargo: Point) -> u64 {
    let blocked = (from.x == to.x && to.x == cargo.x && strictly_between(cargo.y, from.y, to.y))
        || (from.y == to.y && to.y == cargo.y && strictly_between(cargo.x, from.x, to.x));
    from.manhattan(to) + if blocked { 2 } else { 0 }
}

/// Fewest actions that bring `cargo` onto `goal`.
///
/// # Errors
///
/// Returns error if a coordinate is outside `[-COORD_LIMIT, COORD_LIMIT]`,
/// or if the mover starts on the cargo or the cargo starts on the goal.
///
/// # Examples
///
/// ```
/// use cpviz::problems::{Point, minimum_actions};
///
/// let best = minimum_actions(Point::new(1, 2), Point::new(3, 3), Point::new(0, 5)).unwrap();
/// assert_eq!(best, 9);
/// ```
pub fn minimum_actions(player: Point, cargo: Point, goal: Point) -> crate::Result<u64> {
    player.check("player")?;
    cargo.check("cargo")?;
    goal.check("goal")?;
    if player == cargo {
        return Err(crate::Error::SamePosition {
            first: "player",
            second: "cargo",
        });
    }
    if cargo == goal {
        return Err(crate::Error::SamePosition {
            first: "cargo",
            second: "goal",
        });
    }

    let dx = goal.x - cargo.x;
    let dy = goal.y - cargo.y;
    let behind_x = Point::new(cargo.x - dx.signum(), cargo.y);
    let behind_y = Point::new(cargo.x, cargo.y - dy.signum());
    let push = cargo.manhattan(goal);

    let best = match (dx, dy) {
        (0, _) => walk(player, behind_y, cargo) + push,
        (_, 0) => walk(player, behind_x, cargo) + push,
        _ => walk(player, behind_x, cargo).min(walk(player, behind_y, cargo)) + push + 2,
    };
    debug!(%player, %cargo, %goal, best, "minimum actions");
    Ok(best)
}

/// An interactive round: the mover is steered step by step and every step
/// costs one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    player: Point,
    cargo: Point,
    goal: Point,
    actions: u64,
    best: u64,
}

impl Puzzle {
    pub fn new(player: Point, cargo: Point, goal: Point) -> crate::Result<Self> {
        let best = minimum_actions(player, cargo, goal)?;
        Ok(Puzzle {
            player,
            cargo,
            goal,
            actions: 0,
            best,
        })
    }

    /// Random start with every coordinate in `[-RANDOM_LIMIT, RANDOM_LIMIT]`.
    /// The cargo is redrawn until it sits on neither the mover nor the goal.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> crate::Result<Self> {
        let mut draw = || {
            Point::new(
                rng.random_range(-RANDOM_LIMIT..=RANDOM_LIMIT),
                rng.random_range(-RANDOM_LIMIT..=RANDOM_LIMIT),
            )
        };
        let player = draw();
        let goal = draw();
        let mut cargo = draw();
        while cargo == player || cargo == goal {
            cargo = draw();
        }
        Self::new(player, cargo, goal)
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn cargo(&self) -> Point {
        self.cargo
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn actions(&self) -> u64 {
        self.actions
    }

    /// Fewest actions from the starting position
    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn is_solved(&self) -> bool {
        self.cargo == self.goal
    }

    /// Solved in no more actions than the minimum
    pub fn is_optimal(&self) -> bool {
        self.is_solved() && self.actions <= self.best
    }

    /// Move the mover one cell
    ///
    /// # Errors
    ///
    /// Returns `Error::GameOver` once the cargo is on the goal.
    pub fn step(&mut self, direction: Direction) -> crate::Result<()> {
        if self.is_solved() {
            return Err(crate::Error::GameOver);
        }
        (self.player, self.cargo) = step(self.player, self.cargo, direction);
        self.actions += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_page_default_positions() {
        assert_eq!(minimum_actions(p(1, 2), p(3, 3), p(0, 5)).unwrap(), 9);
    }

    #[test]
    fn test_straight_push() {
        assert_eq!(minimum_actions(p(0, 0), p(1, 0), p(2, 0)).unwrap(), 1);
        assert_eq!(minimum_actions(p(0, 0), p(1, 0), p(5, 0)).unwrap(), 4);
    }

    #[test]
    fn test_walk_around_cargo() {
        // Cargo sits between the mover and the cell behind it
        assert_eq!(minimum_actions(p(0, 0), p(1, 0), p(-1, 0)).unwrap(), 6);
        // Goal on the mover's own cell
        assert_eq!(minimum_actions(p(0, 0), p(0, 1), p(0, 0)).unwrap(), 5);
    }

    #[test]
    fn test_turning_corner() {
        assert_eq!(minimum_actions(p(0, 0), p(1, 1), p(2, 2)).unwrap(), 5);
        assert_eq!(minimum_actions(p(0, 1), p(1, 1), p(0, 0)).unwrap(), 6);
    }

    #[test]
    fn test_extreme_coordinates() {
        let far = COORD_LIMIT;
        let best = minimum_actions(p(-far, -far), p(far, far), p(-far, -far)).unwrap();
        // Walk to (far + 1, far), push 4e17, turn 2
        assert_eq!(best, (4 * far as u64 + 1) + 4 * far as u64 + 2);
        assert!(minimum_actions(p(far + 1, 0), p(0, 0), p(1, 1)).is_err());
    }

    #[test]
    fn test_rejects_overlaps() {
        assert!(matches!(
            minimum_actions(p(1, 1), p(1, 1), p(0, 0)),
            Err(crate::Error::SamePosition {
                first: "player",
                ..
            })
        ));
        assert!(matches!(
            minimum_actions(p(0, 0), p(1, 1), p(1, 1)),
            Err(crate::Error::SamePosition { first: "cargo", .. })
        ));
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(
            Direction::parse_keys("wA s\nd").unwrap(),
            vec![
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Right
            ]
        );
        assert!(matches!(
            Direction::parse_keys("wwx"),
            Err(crate::Error::InvalidMoveKey {
                key: 'x',
                position: 2
            })
        ));
    }

    #[test]
    fn test_point_from_str() {
        assert_eq!("-3, 4".parse::<Point>().unwrap(), p(-3, 4));
        assert!("3".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());
    }

    #[test]
    fn test_puzzle_replay() {
        let mut puzzle = Puzzle::new(p(0, 0), p(1, 0), p(3, 0)).unwrap();
        puzzle.step(Direction::Right).unwrap();
        assert_eq!(puzzle.cargo(), p(2, 0));
        assert!(!puzzle.is_solved());
        puzzle.step(Direction::Right).unwrap();
        assert!(puzzle.is_solved());
        assert!(puzzle.is_optimal());
        assert!(matches!(
            puzzle.step(Direction::Up),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_random_puzzle_is_valid_and_reproducible() {
        use rand::{SeedableRng, rngs::StdRng};

        for seed in 0..50 {
            let puzzle = Puzzle::random(&mut StdRng::seed_from_u64(seed)).unwrap();
            assert_ne!(puzzle.player(), puzzle.cargo());
            assert_ne!(puzzle.cargo(), puzzle.goal());
            for point in [puzzle.player(), puzzle.cargo(), puzzle.goal()] {
                assert!(point.x.abs() <= RANDOM_LIMIT && point.y.abs() <= RANDOM_LIMIT);
            }
            let again = Puzzle::random(&mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(puzzle, again);
        }
    }

    #[test]
    fn test_puzzle_detour_is_not_optimal() {
        let mut puzzle = Puzzle::new(p(0, 0), p(1, 0), p(2, 0)).unwrap();
        for key in Direction::parse_keys("wsd").unwrap() {
            puzzle.step(key).unwrap();
        }
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.actions(), 3);
        assert!(!puzzle.is_optimal());
    }
}
