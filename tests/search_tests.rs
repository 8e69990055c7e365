//! Search tests to verify the engine finds correct moves in various positions.

use othello_engine::board::{
    minimax, Board, BoardBuilder, SearchEngine, SearchParams, Side, Square, StopReason,
};
use othello_engine::sync::{BestMoveSlot, StopFlag};

const START_TEXT: &str = concat!(
    "??????????",
    "?........?",
    "?........?",
    "?........?",
    "?...o@...?",
    "?...@o...?",
    "?........?",
    "?........?",
    "?........?",
    "??????????",
);

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// The text form parses to the standard start position
#[test]
fn start_text_is_initial_position() {
    let board: Board = START_TEXT.parse().unwrap();
    assert_eq!(board, Board::initial());
    assert_eq!(board.to_text(), START_TEXT);
}

/// Test that the engine takes a free corner over an X-square
#[test]
fn prefers_corner_over_x_square() {
    // Black can take a1 (through b2) or g7 (through f6)
    let board = BoardBuilder::new()
        .disc(sq("b2"), Side::White)
        .disc(sq("c3"), Side::Black)
        .disc(sq("f6"), Side::White)
        .disc(sq("e5"), Side::Black)
        .build();
    let moves = board.legal_moves(Side::Black);
    assert!(moves.contains(Square::A1));
    assert!(moves.contains(sq("g7")));

    let best = SearchEngine::default().best_move(&board, Side::Black, 1);
    assert_eq!(best, Some(Square::A1));
}

/// The engine never answers with an illegal move from a played-out position
#[test]
fn best_move_is_always_legal() {
    let engine = SearchEngine::default();
    let mut board = Board::initial();
    let mut side = Some(Side::Black);
    while let Some(mover) = side {
        let square = engine.best_move(&board, mover, 2).expect("side to move has a move");
        assert!(board.is_legal(mover, square));
        board = board.apply(mover, square).unwrap();
        side = board.next_to_move(mover);
    }
    assert!(board.is_game_over());
}

/// White picks the reply that leaves Black the lowest score
#[test]
fn white_minimizes_black_score() {
    let board = Board::initial().apply(Side::Black, sq("d3")).unwrap();
    let engine = SearchEngine::default();
    let node = engine.search(&board, Side::White, 3);
    let full = minimax(engine.evaluator(), &board, Side::White, 3);
    assert_eq!(node, full);
    for square in board.legal_moves(Side::White) {
        let child = board.apply(Side::White, square).unwrap();
        let reply = engine.search(&child, Side::Black, 2);
        assert!(reply.score >= node.score);
    }
}

/// Iterative deepening publishes increasing depths up to the limit
#[test]
fn iterative_deepening_respects_max_depth() {
    let engine = SearchEngine::with_params(SearchParams::with_max_depth(4));
    let slot = BestMoveSlot::new();
    let result = engine.select_move(&Board::initial(), Side::Black, &slot, &StopFlag::new());

    let depths: Vec<u32> = result.iterations.iter().map(|i| i.depth).collect();
    assert_eq!(depths, vec![1, 3]);
    assert_eq!(result.stop_reason, StopReason::DepthLimit);
    assert_eq!(slot.get().map(|p| p.square), Some(sq("d3")));
}
