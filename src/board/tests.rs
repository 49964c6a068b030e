//! Unit tests for the board module.

use bevy::prelude::*;

use super::state::Board;
use super::token::TokenId;
use crate::constants::MAX_LABEL_CHARS;
use crate::theme::{PALETTE_SIZE, TOKEN_PALETTE};

fn labels(board: &Board) -> Vec<&str> {
    board.list().iter().map(|t| t.label.as_str()).collect()
}

fn ids(board: &Board) -> Vec<u64> {
    board.list().iter().map(|t| t.id.0).collect()
}

fn board_with_ids(ids: &[i64]) -> Board {
    let mut board = Board::default();
    for (i, id) in ids.iter().enumerate() {
        board.add_at(&format!("Token {}", i), *id);
    }
    board
}

// add tests
#[test]
fn test_add_counts_only_non_blank_labels() {
    let mut board = Board::default();
    let submitted = ["Pandemic", "", "  Regulation ", "   ", "\t\n", "AI"];
    for label in submitted {
        board.add(label);
    }

    assert_eq!(board.len(), 3);
    assert_eq!(labels(&board), vec!["Pandemic", "Regulation", "AI"]);
}

#[test]
fn test_add_blank_is_noop() {
    let mut board = Board::default();
    assert!(board.add("").is_none());
    assert!(board.add("   ").is_none());
    assert!(board.is_empty());
}

#[test]
fn test_add_trims_label() {
    let mut board = Board::default();
    let id = board.add("  Supply shock  ").unwrap();
    assert_eq!(board.get(id).unwrap().label, "Supply shock");
}

#[test]
fn test_add_caps_label_length() {
    let mut board = Board::default();
    let long = "x".repeat(MAX_LABEL_CHARS * 50);
    let id = board.add(&long).unwrap();

    let label = &board.get(id).unwrap().label;
    assert_eq!(label.chars().count(), MAX_LABEL_CHARS);
}

#[test]
fn test_add_caps_on_char_boundaries() {
    let mut board = Board::default();
    let long = "é".repeat(MAX_LABEL_CHARS + 5);
    let id = board.add(&long).unwrap();

    assert_eq!(board.get(id).unwrap().label, "é".repeat(MAX_LABEL_CHARS));
}

#[test]
fn test_add_starts_at_origin() {
    let mut board = Board::default();
    let id = board.add("Token").unwrap();
    assert_eq!(board.get(id).unwrap().position, Vec2::ZERO);
}

#[test]
fn test_ids_unique_within_same_millisecond() {
    let mut board = Board::default();
    let a = board.add_at("a", 1_000).unwrap();
    let b = board.add_at("b", 1_000).unwrap();
    let c = board.add_at("c", 999).unwrap();

    assert_eq!(a, TokenId(1_000));
    assert_eq!(b, TokenId(1_001));
    assert_eq!(c, TokenId(1_002));
}

#[test]
fn test_ids_unique_with_wall_clock() {
    let mut board = Board::default();
    for i in 0..50 {
        board.add(&format!("token {}", i));
    }
    let mut all = ids(&board);
    all.dedup();
    assert_eq!(all.len(), 50);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

// color tests
#[test]
fn test_colors_cycle_through_palette() {
    let mut board = Board::default();
    for i in 0..(PALETTE_SIZE * 2 + 1) {
        board.add(&format!("token {}", i));
    }
    for (i, token) in board.list().iter().enumerate() {
        assert_eq!(token.color, TOKEN_PALETTE[i % PALETTE_SIZE]);
    }
}

#[test]
fn test_color_fixed_at_creation() {
    let mut board = Board::default();
    let first = board.add("first").unwrap();
    let second = board.add("second").unwrap();
    board.remove(first);

    // Existing tokens keep their color after deletions
    assert_eq!(board.get(second).unwrap().color, TOKEN_PALETTE[1]);

    // The next token takes the color for the current count
    let third = board.add("third").unwrap();
    assert_eq!(board.get(third).unwrap().color, TOKEN_PALETTE[1]);
}

// remove tests
#[test]
fn test_remove_present_id() {
    let mut board = board_with_ids(&[1, 2, 3, 4]);
    assert!(board.remove(TokenId(3)));
    assert_eq!(ids(&board), vec![1, 2, 4]);
}

#[test]
fn test_remove_absent_id() {
    let mut board = board_with_ids(&[1, 2, 3]);
    assert!(!board.remove(TokenId(42)));
    assert_eq!(ids(&board), vec![1, 2, 3]);
}

#[test]
fn test_remove_is_idempotent() {
    let mut once = board_with_ids(&[1, 2, 3]);
    once.remove(TokenId(2));

    let mut twice = board_with_ids(&[1, 2, 3]);
    assert!(twice.remove(TokenId(2)));
    assert!(!twice.remove(TokenId(2)));

    assert_eq!(once.list(), twice.list());
}

#[test]
fn test_remove_on_empty_board() {
    let mut board = Board::default();
    assert!(!board.remove(TokenId(1)));
    assert!(board.is_empty());
}

// reposition tests
#[test]
fn test_reposition_within_bounds() {
    let mut board = board_with_ids(&[1]);
    let bounds = Rect::new(0.0, 0.0, 500.0, 300.0);
    assert!(board.reposition(TokenId(1), Vec2::new(120.0, 80.0), bounds));
    assert_eq!(board.get(TokenId(1)).unwrap().position, Vec2::new(120.0, 80.0));
}

#[test]
fn test_reposition_clamps_to_bounds() {
    let mut board = board_with_ids(&[1]);
    let bounds = Rect::new(0.0, 0.0, 500.0, 300.0);
    board.reposition(TokenId(1), Vec2::new(-40.0, 900.0), bounds);
    assert_eq!(board.get(TokenId(1)).unwrap().position, Vec2::new(0.0, 300.0));
}

#[test]
fn test_reposition_unknown_id() {
    let mut board = board_with_ids(&[1]);
    let bounds = Rect::new(0.0, 0.0, 500.0, 300.0);
    assert!(!board.reposition(TokenId(9), Vec2::new(10.0, 10.0), bounds));
    assert_eq!(board.get(TokenId(1)).unwrap().position, Vec2::ZERO);
}

#[test]
fn test_reposition_keeps_label_and_color() {
    let mut board = board_with_ids(&[1, 2]);
    let before = board.get(TokenId(2)).unwrap().clone();
    board.reposition(TokenId(2), Vec2::new(5.0, 6.0), Rect::new(0.0, 0.0, 10.0, 10.0));
    let after = board.get(TokenId(2)).unwrap();
    assert_eq!(after.label, before.label);
    assert_eq!(after.color, before.color);
    assert_eq!(ids(&board), vec![1, 2]);
}

// End-to-end scenarios
#[test]
fn test_scenario_add_two_tokens() {
    let mut board = Board::default();

    board.add("Pandemic");
    assert_eq!(board.len(), 1);
    assert_eq!(board.list()[0].label, "Pandemic");
    assert_eq!(board.list()[0].color, TOKEN_PALETTE[0]);

    board.add("Regulation");
    assert_eq!(board.len(), 2);
    assert_eq!(board.list()[0].label, "Pandemic");
    assert_eq!(board.list()[1].label, "Regulation");
    assert_eq!(board.list()[1].color, TOKEN_PALETTE[1]);
}

#[test]
fn test_scenario_remove_middle_token() {
    let mut board = board_with_ids(&[1, 2, 3]);
    let first = board.get(TokenId(1)).unwrap().clone();
    let third = board.get(TokenId(3)).unwrap().clone();

    board.remove(TokenId(2));

    assert_eq!(ids(&board), vec![1, 3]);
    assert_eq!(board.list()[0], first);
    assert_eq!(board.list()[1], third);
}
