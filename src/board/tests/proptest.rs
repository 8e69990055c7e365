//! Property-based tests using proptest.

use crate::board::{minimax, Board, Evaluator, SearchEngine, Side, Square};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    0..=50usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start position.
/// Returns the position and the side to move (`None` if the game ended).
fn random_position(seed: u64, num_moves: usize) -> (Board, Option<Side>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::initial();
    let mut side = Some(Side::Black);
    for _ in 0..num_moves {
        let Some(mover) = side else { break };
        let moves = board.legal_moves(mover);
        let square = moves[rng.gen_range(0..moves.len())];
        board = board.apply(mover, square).unwrap();
        side = board.next_to_move(mover);
    }
    (board, side)
}

proptest! {
    /// Property: a legal move fills an empty square, flips at least one disc,
    /// and moves exactly `flips` discs from the opponent to the mover
    #[test]
    fn prop_legal_moves_are_sound(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, side) = random_position(seed, num_moves);
        let Some(side) = side else { return Ok(()) };

        for square in Square::all() {
            let legal = board.is_legal(side, square);
            prop_assert_eq!(legal, board.legal_moves(side).contains(square));
            if !legal {
                prop_assert!(board.apply(side, square).is_err());
                continue;
            }
            prop_assert_eq!(board.side_at(square), None);
            let flips = board.flips(side, square);
            prop_assert!(flips >= 1);

            let next = board.apply(side, square).unwrap();
            prop_assert_eq!(next.disc_count(side), board.disc_count(side) + 1 + flips);
            prop_assert_eq!(
                next.disc_count(side.opponent()),
                board.disc_count(side.opponent()) - flips
            );
            prop_assert_eq!(next.side_at(square), Some(side));
        }
    }

    /// Property: applying the same move to the same board gives the same board
    #[test]
    fn prop_apply_is_deterministic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, side) = random_position(seed, num_moves);
        let Some(side) = side else { return Ok(()) };
        for square in board.legal_moves(side) {
            prop_assert_eq!(board.apply(side, square), board.apply(side, square));
        }
    }

    /// Property: next_to_move only hands the turn to a side that can move
    #[test]
    fn prop_next_to_move_never_picks_stuck_side(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_position(seed, num_moves);
        for just_moved in Side::ALL {
            match board.next_to_move(just_moved) {
                Some(side) => prop_assert!(board.has_any_move(side)),
                None => {
                    prop_assert!(!board.has_any_move(Side::Black));
                    prop_assert!(!board.has_any_move(Side::White));
                }
            }
        }
    }

    /// Property: swapping colours negates the evaluation
    #[test]
    fn prop_evaluation_is_colour_antisymmetric(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_position(seed, num_moves);
        let eval = Evaluator::default();
        prop_assert_eq!(eval.evaluate(&board.swap_sides()), -eval.evaluate(&board));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: alpha-beta picks the same move with the same score as minimax
    #[test]
    fn prop_alphabeta_matches_minimax(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        depth in 1..=3u32,
    ) {
        let (board, side) = random_position(seed, num_moves);
        let Some(side) = side else { return Ok(()) };
        let engine = SearchEngine::default();
        prop_assert_eq!(
            engine.search(&board, side, depth),
            minimax(engine.evaluator(), &board, side, depth)
        );
    }
}
