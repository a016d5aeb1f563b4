//! Integration tests for hex-rust
//!
//! These exercise the board, graph, and engine together through the public
//! API: win detection across walls, move accounting, clone independence,
//! and the engine's behavior on forced and degenerate positions.

use hex_rust::board::{BoardError, HexBoard};
use hex_rust::engine::{EngineError, MonteCarloEngine};
use hex_rust::graph::{Color, Graph};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Build a board with the given stones already placed.
fn board_with(size: usize, blue: &[(usize, usize)], red: &[(usize, usize)]) -> HexBoard {
    let mut board = HexBoard::new(size).unwrap();
    for &(row, col) in blue {
        board.enter_move(row, col, Color::Blue).unwrap();
    }
    for &(row, col) in red {
        board.enter_move(row, col, Color::Red).unwrap();
    }
    board
}

/// Snapshot of everything observable about a board, for before/after
/// comparisons around rejected operations.
fn snapshot(board: &HexBoard) -> (Vec<Option<Color>>, usize, usize) {
    let size = board.size();
    let mut cells = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            cells.push(board.get(row, col));
        }
    }
    (cells, board.moves(Color::Blue), board.moves(Color::Red))
}

// =============================================================================
// Reachability symmetry
// =============================================================================

#[test]
fn test_random_graph_reachability_is_symmetric() {
    let mut rng = fastrand::Rng::with_seed(2024);
    let n = 12;
    let mut graph = Graph::new(n);
    for _ in 0..20 {
        let color = if rng.bool() { Color::Blue } else { Color::Red };
        graph.add_edge(rng.usize(..n), rng.usize(..n), color).unwrap();
    }

    for color in [Color::Blue, Color::Red] {
        for a in 0..n {
            for b in 0..n {
                assert_eq!(
                    graph.has_path_to(a, b, color).unwrap(),
                    graph.has_path_to(b, a, color).unwrap(),
                    "Asymmetric reachability for {a} <-> {b} ({color})"
                );
            }
        }
    }
}

// =============================================================================
// Move accounting and rejected-move idempotence
// =============================================================================

#[test]
fn test_move_counters_track_accepted_moves_only() {
    let mut board = HexBoard::new(4).unwrap();

    board.enter_move(0, 0, Color::Blue).unwrap();
    board.enter_move(1, 1, Color::Red).unwrap();
    board.enter_move(2, 2, Color::Blue).unwrap();

    // Rejected: occupied and out of range.
    assert!(board.enter_move(0, 0, Color::Blue).is_err());
    assert!(board.enter_move(1, 1, Color::Blue).is_err());
    assert!(board.enter_move(9, 9, Color::Red).is_err());

    assert_eq!(board.moves(Color::Blue), 2);
    assert_eq!(board.moves(Color::Red), 1);
}

#[test]
fn test_rejected_moves_change_nothing() {
    let mut board = board_with(3, &[(0, 0), (1, 1)], &[(2, 2)]);
    let before = snapshot(&board);

    let err = board.enter_move(1, 1, Color::Red).unwrap_err();
    assert!(matches!(err, BoardError::Occupied { .. }));
    let err = board.enter_move(3, 1, Color::Red).unwrap_err();
    assert!(matches!(err, BoardError::OutOfBounds { .. }));

    assert_eq!(snapshot(&board), before);
    assert!(!board.wins(Color::Blue).unwrap());
    assert!(!board.wins(Color::Red).unwrap());
}

// =============================================================================
// Win detection
// =============================================================================

#[test]
fn test_blue_bridges_walls_on_2x2() {
    let mut board = HexBoard::new(2).unwrap();
    board.enter_move(0, 0, Color::Blue).unwrap();
    board.enter_move(0, 1, Color::Blue).unwrap();

    assert!(board.wins(Color::Blue).unwrap());
    assert!(!board.wins(Color::Red).unwrap());
}

#[test]
fn test_no_win_below_size_moves() {
    let mut board = board_with(5, &[(2, 0), (2, 1), (2, 2), (2, 3)], &[]);
    // Four stones on a 5x5 board can never span, and the query must say so
    // without consulting connectivity.
    assert!(!board.wins(Color::Blue).unwrap());
}

#[test]
fn test_win_is_monotone_under_extra_moves() {
    let mut board = board_with(3, &[(1, 0), (1, 1), (1, 2)], &[]);
    assert!(board.wins(Color::Blue).unwrap());

    board.enter_move(0, 0, Color::Blue).unwrap();
    board.enter_move(2, 2, Color::Blue).unwrap();
    board.enter_move(0, 2, Color::Red).unwrap();
    assert!(
        board.wins(Color::Blue).unwrap(),
        "A win must survive additional moves by either side"
    );
}

#[test]
fn test_zigzag_path_wins() {
    // Blue path using diagonal adjacency: (1,0) -> (0,1) -> (0,2) on a
    // 3x3 board; (1,0) touches the left wall, (0,2) the right wall.
    let mut board = board_with(3, &[(1, 0), (0, 1), (0, 2)], &[]);
    assert!(board.wins(Color::Blue).unwrap());
}

#[test]
fn test_blocked_row_does_not_win() {
    // Red at (1,1) cuts row 1; (0,1) touches (1,0) but not (1,2), so the
    // blue stones form two components and neither spans both walls.
    let mut board = board_with(3, &[(1, 0), (1, 2), (0, 1)], &[(1, 1)]);
    assert!(!board.wins(Color::Blue).unwrap());
}

// =============================================================================
// Clone independence
// =============================================================================

#[test]
fn test_clone_diverges_from_original() {
    let mut original = board_with(3, &[(1, 0), (1, 1)], &[(0, 0)]);

    let mut sim = original.clone();
    sim.enter_move(1, 2, Color::Blue).unwrap();
    assert!(sim.wins(Color::Blue).unwrap());

    // The original must be observably unchanged.
    assert!(original.is_empty(1, 2));
    assert_eq!(original.moves(Color::Blue), 2);
    assert!(!original.wins(Color::Blue).unwrap());

    // And mutating the original afterwards must not see the clone's edges.
    original.enter_move(2, 2, Color::Red).unwrap();
    assert_eq!(sim.get(2, 2), None);
}

// =============================================================================
// Engine behavior
// =============================================================================

#[test]
fn test_engine_finds_the_bridging_move() {
    // Blue holds (1,0) and (1,1); Red blocks (0,2) and (2,2), so the only
    // way to reach the right wall is (1,2). Every rollout containing
    // (1,2) wins and no rollout without it can, so its win rate is the
    // unique maximum.
    let mut board = board_with(3, &[(1, 0), (1, 1)], &[(0, 2), (2, 2)]);
    let mut engine = MonteCarloEngine::with_seed(500, 11);

    let chosen = engine.select_and_apply_move(&mut board, Color::Blue).unwrap();
    assert_eq!(chosen, (1, 2));
    assert!(board.wins(Color::Blue).unwrap());
}

#[test]
fn test_engine_finds_red_bridging_move() {
    // Mirrored scenario for Red: the column through (2,1) is the only
    // route from top wall to bottom wall.
    let mut board = board_with(3, &[(2, 0), (2, 2)], &[(0, 1), (1, 1)]);
    let mut engine = MonteCarloEngine::with_seed(500, 12);

    let chosen = engine.select_and_apply_move(&mut board, Color::Red).unwrap();
    assert_eq!(chosen, (2, 1));
    assert!(board.wins(Color::Red).unwrap());
}

#[test]
fn test_engine_on_full_board_is_explicit_no_move() {
    let mut board = HexBoard::new(3).unwrap();
    for row in 0..3 {
        for col in 0..3 {
            let color = if (row + col) % 2 == 0 {
                Color::Red
            } else {
                Color::Blue
            };
            board.enter_move(row, col, color).unwrap();
        }
    }
    let before = snapshot(&board);

    let mut engine = MonteCarloEngine::with_seed(100, 13);
    let err = engine
        .select_and_apply_move(&mut board, Color::Blue)
        .unwrap_err();
    assert_eq!(err, EngineError::NoCandidate);
    assert_eq!(snapshot(&board), before, "A failed decision must not corrupt state");
}

#[test]
fn test_engine_alternating_play_reaches_a_winner() {
    // Two engines play each other on a 4x4 board; Hex admits no draw, so
    // someone must bridge before the board fills.
    let mut board = HexBoard::new(4).unwrap();
    let mut engine = MonteCarloEngine::with_seed(300, 21);
    let mut to_move = Color::Blue;

    let winner = loop {
        engine.select_and_apply_move(&mut board, to_move).unwrap();
        if board.wins(to_move).unwrap() {
            break to_move;
        }
        to_move = to_move.opponent();
    };

    assert!(board.wins(winner).unwrap());
    assert!(!board.wins(winner.opponent()).unwrap());
}
