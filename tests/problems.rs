//! Smaller problems checked against brute force

use std::collections::{HashMap, VecDeque};

use cpviz::problems::{
    Cell, Direction, Point, bad_juice, fill_grid, identify, minimum_actions, push_cargo::step,
    serve, sick_friends,
};

mod push_and_carry {
    use super::*;

    const BOX: i64 = 4;

    fn inside(p: Point) -> bool {
        p.x.abs() <= BOX && p.y.abs() <= BOX
    }

    /// Fewest steps until the cargo first reaches each cell, within the box
    fn bfs(player: Point, cargo: Point) -> HashMap<Point, u64> {
        let mut dist = HashMap::from([((player, cargo), 0u64)]);
        let mut reached = HashMap::from([(cargo, 0u64)]);
        let mut queue = VecDeque::from([(player, cargo)]);
        while let Some(state) = queue.pop_front() {
            let d = dist[&state];
            for direction in Direction::ALL {
                let next = step(state.0, state.1, direction);
                if !inside(next.0) || !inside(next.1) || dist.contains_key(&next) {
                    continue;
                }
                dist.insert(next, d + 1);
                reached.entry(next.1).or_insert(d + 1);
                queue.push_back(next);
            }
        }
        reached
    }

    #[test]
    fn closed_form_matches_search() {
        let points: Vec<Point> = (-1..=1)
            .flat_map(|x| (-1..=1).map(move |y| Point::new(x, y)))
            .collect();
        for &player in &points {
            for &cargo in &points {
                if player == cargo {
                    continue;
                }
                let reached = bfs(player, cargo);
                for &goal in &points {
                    if goal == cargo {
                        continue;
                    }
                    assert_eq!(
                        minimum_actions(player, cargo, goal).unwrap(),
                        reached[&goal],
                        "player {player}, cargo {cargo}, goal {goal}"
                    );
                }
            }
        }
    }
}

mod bad_juice_plan {
    use super::*;

    #[test]
    fn plan_rows_are_distinct_binary_codes() {
        for bottles in [bad_juice::BOTTLE_MIN, 7, 8, 9, bad_juice::BOTTLE_MAX] {
            let plan = serve(bottles);
            assert_eq!(plan.len(), bottles);
            for (i, row) in plan.iter().enumerate() {
                assert_eq!(identify(row), i + 1);
                assert_eq!(&sick_friends(bottles, i + 1).unwrap(), row);
            }
        }
    }
}

mod matrix_fill {
    use super::*;

    #[test]
    fn full_permutation_fills_every_cell_of_its_diagonals() {
        // One required cell per row on distinct columns
        let n = 5;
        let required: Vec<Cell> = (0..n).map(|r| Cell::new(r, (2 * r + 1) % n)).collect();
        let filling = fill_grid(n, &required).unwrap();
        assert_eq!(filling.ones_per_line(), n);
        assert!(filling.grid().iter().flatten().all(|&b| b));
    }
}
