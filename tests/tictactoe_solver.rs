//! Minimax solver on weighted boards
//! Validates game values and solver invariants

use cpviz::tictactoe::{
    Board, Match, Memo, Outcome, Player, Solver, choose_move, hint, solve,
};
use rand::{SeedableRng, rngs::StdRng};

mod standard_game {
    use super::*;

    #[test]
    fn zero_scores_is_a_draw() {
        let result = solve(&Board::from_scores([0; 9]), &mut Memo::new());
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.best_moves, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn equal_positive_scores_favor_first() {
        // First always holds five cells of a full board against four
        let result = solve(&Board::from_scores([1; 9]), &mut Memo::new());
        assert_eq!(result.outcome, Outcome::Win(Player::First));
    }

    #[test]
    fn equal_negative_scores_favor_second() {
        let result = solve(&Board::from_scores([-1; 9]), &mut Memo::new());
        assert_eq!(result.outcome, Outcome::Win(Player::Second));
    }

    #[test]
    fn corner_reply_to_center_keeps_the_draw() {
        let board = Board::from_scores([0; 9]).place(4, Player::First).unwrap();
        let result = solve(&board, &mut Memo::new());
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.best_moves, vec![0, 2, 6, 8]);
    }
}

mod invariants {
    use super::*;

    #[test]
    fn solving_twice_is_identical_and_leaves_board_untouched() {
        let board = Board::from_scores([3, -1, 4, 1, -5, 9, 2, -6, 5])
            .with_marks("X...O....")
            .unwrap();
        let snapshot = board;
        let mut memo = Memo::new();

        let first = solve(&board, &mut memo);
        assert_eq!(board, snapshot);
        let second = solve(&board, &mut memo);
        assert_eq!(board, snapshot);
        assert_eq!(first, second);

        let fresh = solve(&board, &mut Memo::new());
        assert_eq!(first, fresh);
    }

    #[test]
    fn best_moves_are_empty_cells() {
        let board = Board::from_scores([1, 2, 3, 4, 5, 6, 7, 8, 9])
            .with_marks("X.O.X.O..")
            .unwrap();
        let result = solve(&board, &mut Memo::new());
        assert!(!result.best_moves.is_empty());
        for mv in result.best_moves {
            assert!(board.is_empty(mv));
        }
    }

    #[test]
    fn best_moves_all_reach_the_reported_outcome() {
        let board = Board::from_scores([-1, 1, 0, -4, -2, -5, -4, -1, -5]);
        let mut memo = Memo::new();
        let result = solve(&board, &mut memo);
        for &mv in &result.best_moves {
            let child = board.place(mv, board.to_move()).unwrap();
            assert_eq!(solve(&child, &mut memo).outcome, result.outcome);
        }
    }

    #[test]
    fn memo_shared_across_scores_stays_correct() {
        // Scores are part of the key, so one table can hold both games
        let mut memo = Memo::new();
        let zeros = solve(&Board::from_scores([0; 9]), &mut memo);
        let ones = solve(&Board::from_scores([1; 9]), &mut memo);
        assert_eq!(zeros.outcome, Outcome::Draw);
        assert_eq!(ones.outcome, Outcome::Win(Player::First));
    }
}

mod scores {
    use super::*;

    const FULL_NO_LINE: &str = "XOXXOOOXX";

    #[test]
    fn full_board_goes_to_larger_total() {
        let board = Board::from_scores([10, 0, 0, 0, 0, 0, 0, 0, 0])
            .with_marks(FULL_NO_LINE)
            .unwrap();
        assert_eq!(
            solve(&board, &mut Memo::new()).outcome,
            Outcome::Win(Player::First)
        );

        let board = Board::from_scores([0, 10, 0, 0, 0, 0, 0, 0, 0])
            .with_marks(FULL_NO_LINE)
            .unwrap();
        assert_eq!(
            solve(&board, &mut Memo::new()).outcome,
            Outcome::Win(Player::Second)
        );
    }

    #[test]
    fn line_wins_even_with_lower_total() {
        // X X X
        // O O .
        // . . .
        let board = Board::from_scores([-100, -100, -100, 100, 100, 0, 0, 0, 0])
            .with_marks("XXXOO....")
            .unwrap();
        assert_eq!(
            solve(&board, &mut Memo::new()).outcome,
            Outcome::Win(Player::First)
        );
    }

    #[test]
    fn sample_input_hint() {
        // ABC349 E sample: the second player wins
        let board = Board::from_scores([-1, 1, 0, -4, -2, -5, -4, -1, -5]);
        assert_eq!(hint(&board), Some(Player::Second));
    }

    #[test]
    fn single_heavy_center_is_first_win() {
        let mut scores = [0; 9];
        scores[4] = 100;
        assert_eq!(hint(&Board::from_scores(scores)), Some(Player::First));
    }
}

mod random_choice {
    use super::*;

    #[test]
    fn seeded_choice_is_reproducible() {
        let board = Board::from_scores([0; 9]);
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut memo = Memo::new();
            (0..10)
                .map(|_| choose_move(&board, &mut memo, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(99), picks(99));
    }

    #[test]
    fn choice_covers_all_tied_moves() {
        let board = Board::from_scores([0; 9]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut solver = Solver::new();
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[solver.choose_move(&board, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn cpu_wins_the_sample_as_second() {
        let board = Board::from_scores([-1, 1, 0, -4, -2, -5, -4, -1, -5]);
        for seed in 0..3 {
            let mut game = Match::new(board, Player::First).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            while !game.is_over() {
                if game.is_human_turn() {
                    let mv = game.board().empty_positions()[0];
                    game.play_human(mv).unwrap();
                } else {
                    game.play_cpu(&mut rng).unwrap();
                }
            }
            assert_eq!(
                game.status(),
                cpviz::tictactoe::GameStatus::Finished(Outcome::Win(Player::Second))
            );
        }
    }
}
