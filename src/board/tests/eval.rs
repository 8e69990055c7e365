//! Evaluator tests on hand-built positions.

use super::play_from_start;
use crate::board::{
    terminal_score, Board, BoardBuilder, EvalBreakdown, EvalWeights, Evaluator, Side, Square,
    WIN_SCORE,
};

#[test]
fn startpos_terms_are_all_zero() {
    assert_eq!(EvalBreakdown::of(&Board::initial()), EvalBreakdown::default());
}

#[test]
fn lone_corner_disc_breakdown() {
    let board = BoardBuilder::new().disc(Square::A1, Side::Black).build();
    let terms = EvalBreakdown::of(&board);
    assert_eq!(
        terms,
        EvalBreakdown {
            positional: 6,
            corners: 100,
            actual_mobility: 0,
            potential_mobility: -100,
            stability: 100,
        }
    );
    // 10 * (10*6 + 30*100 + 25*100) + 5 * (3 * -100)
    assert_eq!(Evaluator::default().evaluate(&board), 54_100);
}

#[test]
fn terms_negate_when_colours_swap() {
    let (board, _) = play_from_start(&["d3", "c3", "c4", "e3", "f2"]);
    let terms = EvalBreakdown::of(&board);
    let swapped = EvalBreakdown::of(&board.swap_sides());
    assert_eq!(swapped.positional, -terms.positional);
    assert_eq!(swapped.corners, -terms.corners);
    assert_eq!(swapped.actual_mobility, -terms.actual_mobility);
    assert_eq!(swapped.potential_mobility, -terms.potential_mobility);
    assert_eq!(swapped.stability, -terms.stability);
}

#[test]
fn weights_select_terms() {
    let board = BoardBuilder::new().disc(Square::A1, Side::Black).build();
    let positional_only = Evaluator::new(EvalWeights {
        positional: 1,
        corners: 0,
        mobility: 0,
        stability: 0,
    });
    assert_eq!(positional_only.evaluate(&board), 60);

    let mobility_only = Evaluator::new(EvalWeights {
        positional: 0,
        corners: 0,
        mobility: 1,
        stability: 0,
    });
    assert_eq!(mobility_only.evaluate(&board), -300);
}

#[test]
fn terminal_score_dominates_heuristics() {
    let black_by_one = BoardBuilder::new()
        .disc(Square::A1, Side::Black)
        .disc(Square::H8, Side::Black)
        .disc(Square::A8, Side::White)
        .build();
    assert_eq!(terminal_score(&black_by_one), WIN_SCORE + 1);
    assert_eq!(terminal_score(&black_by_one.swap_sides()), -WIN_SCORE - 1);

    let best_heuristic = Evaluator::default().evaluate(&black_by_one);
    assert!(best_heuristic < WIN_SCORE);
}

#[test]
fn tied_final_position_scores_zero() {
    let board = BoardBuilder::new()
        .disc(Square::A1, Side::Black)
        .disc(Square::H8, Side::White)
        .build();
    assert_eq!(terminal_score(&board), 0);
}
