//! Integration tests for tictactoe-rust
//!
//! These cover the board queries, the search's determinism and backtracking,
//! and exhaustive checks over the whole game tree that the engine never loses.

use tictactoe_rust::board::{Board, Mark, Point};
use tictactoe_rust::constants::{LINES, N};
use tictactoe_rust::game::Game;
use tictactoe_rust::minimax::{Outcome, best_move, evaluate, minimax, outcome};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn board(rows: [&str; N]) -> Board {
    Board::from_rows(rows).unwrap()
}

/// Place every point in `points` for `mark`.
fn with_marks(points: &[Point], mark: Mark) -> Board {
    let mut b = Board::new();
    for &(r, c) in points {
        b.place(r, c, mark).unwrap();
    }
    b
}

/// Visit every position reachable by alternating play from `b`, stopping at
/// terminal positions. `to_move` is the side about to play.
fn visit_reachable(b: &mut Board, to_move: Mark, f: &mut impl FnMut(&Board)) {
    f(b);
    if outcome(b).is_terminal() {
        return;
    }
    let moves: Vec<Point> = b.empty_cells().collect();
    for (r, c) in moves {
        b.place(r, c, to_move).unwrap();
        visit_reachable(b, to_move.opponent(), f);
        b.clear(r, c).unwrap();
    }
}

/// Try every human move at every human turn, with the engine answering each
/// one via `best_move`, collecting the outcome of every finished game.
fn every_human_line(game: &Game, outcomes: &mut Vec<Outcome>) {
    if game.is_over() {
        outcomes.push(game.outcome());
        return;
    }
    match game.to_move() {
        Mark::Computer => {
            let mut next = game.clone();
            next.play_computer().unwrap();
            every_human_line(&next, outcomes);
        }
        Mark::Player => {
            for (r, c) in game.board().empty_cells() {
                let mut next = game.clone();
                next.play_human(r, c).unwrap();
                every_human_line(&next, outcomes);
            }
        }
    }
}

/// The human's minimax reply: first cell with the lowest score.
fn best_human_move(b: &Board) -> Point {
    let mut scratch = *b;
    let moves: Vec<Point> = scratch.empty_cells().collect();
    let mut best: Option<(Point, i32)> = None;
    for (r, c) in moves {
        scratch.place(r, c, Mark::Player).unwrap();
        let score = minimax(&mut scratch, true);
        scratch.clear(r, c).unwrap();
        if best.is_none_or(|(_, s)| score < s) {
            best = Some(((r, c), score));
        }
    }
    best.unwrap().0
}

// =============================================================================
// Board queries
// =============================================================================

#[test]
fn test_is_win_detects_every_line() {
    for line in LINES {
        for mark in [Mark::Player, Mark::Computer] {
            let b = with_marks(&line, mark);
            assert!(b.is_win(mark), "{mark:?} should win on {line:?}");
            assert!(!b.is_win(mark.opponent()), "{line:?} is not the opponent's");
        }
    }
}

#[test]
fn test_is_win_needs_a_full_line() {
    for line in LINES {
        let b = with_marks(&line[..2], Mark::Player);
        assert!(!b.is_win(Mark::Player), "two marks on {line:?} are not a win");
    }
    // Mixed marks never count
    assert!(!board(["XXO", "OOX", "XOX"]).is_win(Mark::Player));
}

#[test]
fn test_is_full_with_one_empty_cell() {
    let mut b = board(["XOX", "XOO", "OX "]);
    assert!(!b.is_full());
    b.place(2, 2, Mark::Player).unwrap();
    assert!(b.is_full());
}

#[test]
fn test_empty_board_has_all_cells_in_order() {
    let cells: Vec<Point> = Board::new().empty_cells().collect();
    let expected: Vec<Point> = (0..N).flat_map(|r| (0..N).map(move |c| (r, c))).collect();
    assert_eq!(cells, expected);
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_reachable_boards_never_show_two_winners() {
    let mut count = 0;
    for first in [Mark::Player, Mark::Computer] {
        let mut b = Board::new();
        visit_reachable(&mut b, first, &mut |pos| {
            count += 1;
            assert!(
                !(pos.is_win(Mark::Player) && pos.is_win(Mark::Computer)),
                "both sides win on\n{pos}"
            );
        });
    }
    assert!(count > 0);
}

#[test]
fn test_evaluate_matches_outcome() {
    let mut b = Board::new();
    visit_reachable(&mut b, Mark::Player, &mut |pos| {
        assert_eq!(evaluate(pos), outcome(pos).score());
    });
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_minimax_is_idempotent_and_restores_board() {
    let positions = [
        Board::new(),
        board(["X  ", "   ", "   "]),
        board(["X  ", " O ", "  X"]),
        board(["XO ", "OX ", "   "]),
        board(["OO ", "XX ", "X  "]),
    ];
    for pos in positions {
        for maximizing in [true, false] {
            let mut b = pos;
            let first = minimax(&mut b, maximizing);
            assert_eq!(b, pos, "board changed by search");
            let second = minimax(&mut b, maximizing);
            assert_eq!(b, pos, "board changed by search");
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_best_move_empty_board_is_top_left() {
    assert_eq!(best_move(&Board::new()), Ok((0, 0)));
}

#[test]
fn test_best_move_completes_row() {
    let b = with_marks(&[(0, 0), (0, 1)], Mark::Computer);
    assert_eq!(best_move(&b), Ok((0, 2)));
}

#[test]
fn test_best_move_blocks_row() {
    let b = with_marks(&[(0, 0), (0, 1)], Mark::Player);
    assert_eq!(best_move(&b), Ok((0, 2)));
}

#[test]
fn test_best_move_does_not_mutate_board() {
    let b = board(["X  ", " O ", "  X"]);
    let before = b;
    best_move(&b).unwrap();
    assert_eq!(b, before);
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_engine_never_loses_human_first() {
    let mut outcomes = Vec::new();
    every_human_line(&Game::new(Mark::Player), &mut outcomes);
    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&Outcome::PlayerWin));
    assert!(outcomes.contains(&Outcome::ComputerWin));
    assert!(outcomes.contains(&Outcome::Draw));
}

#[test]
fn test_engine_never_loses_computer_first() {
    let mut outcomes = Vec::new();
    every_human_line(&Game::new(Mark::Computer), &mut outcomes);
    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&Outcome::PlayerWin));
}

#[test]
fn test_optimal_against_optimal_is_draw() {
    for first in [Mark::Player, Mark::Computer] {
        let mut game = Game::new(first);
        while !game.is_over() {
            match game.to_move() {
                Mark::Computer => {
                    game.play_computer().unwrap();
                }
                Mark::Player => {
                    let (r, c) = best_human_move(game.board());
                    game.play_human(r, c).unwrap();
                }
            }
        }
        assert_eq!(game.outcome(), Outcome::Draw, "{first:?} opened");
    }
}
