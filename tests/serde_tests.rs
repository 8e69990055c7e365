//! Serialization of public types, enabled with the `serde` feature.
#![cfg(feature = "serde")]

use othello_engine::board::{Board, PublishedMove, Side, Square};
use othello_engine::game::Outcome;

#[test]
fn board_serializes_as_text_form() {
    let board = Board::initial().apply(Side::Black, "d3".parse().unwrap()).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, format!("\"{}\"", board.to_text()));
    assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
}

#[test]
fn malformed_board_text_is_rejected() {
    assert!(serde_json::from_str::<Board>("\"??..\"").is_err());
}

#[test]
fn square_rejects_indices_off_the_board() {
    assert_eq!(serde_json::from_str::<Square>("11").unwrap(), Square::A1);
    assert_eq!(serde_json::to_string(&Square::H8).unwrap(), "88");
    for bad in ["200", "10", "0", "99"] {
        assert!(serde_json::from_str::<Square>(bad).is_err(), "accepted {bad}");
    }

    let forged = r#"{"square":200,"depth":1,"score":0}"#;
    assert!(serde_json::from_str::<PublishedMove>(forged).is_err());
}

#[test]
fn published_move_and_outcome_round_trip() {
    let published = PublishedMove {
        square: Square::H8,
        depth: 7,
        score: -120,
    };
    let json = serde_json::to_string(&published).unwrap();
    assert_eq!(serde_json::from_str::<PublishedMove>(&json).unwrap(), published);

    let outcome = Outcome::Win(Side::White);
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), outcome);
}
