//! Game state scenarios: movement, locking, line clears, game over, restart

use term_tetris::core::{ActivePiece, GameState, ScriptedPieces};
use term_tetris::types::{GameAction, GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const LAST_ROW: i8 = BOARD_HEIGHT as i8 - 1;

fn scripted(kind: PieceKind) -> GameState<ScriptedPieces> {
    GameState::with_source(ScriptedPieces::repeat(kind))
}

/// Vertical I standing in column 0 at the top of the grid.
fn vertical_i() -> ActivePiece {
    let spawned = ActivePiece::spawn(PieceKind::I).rotated();
    ActivePiece {
        row: 0,
        col: 0,
        ..spawned
    }
}

/// Fill `rows` completely except column 0.
fn fill_except_first_column<S>(state: &mut GameState<S>, rows: std::ops::RangeInclusive<i8>)
where
    S: term_tetris::core::PieceSource,
{
    for row in rows {
        for col in 1..BOARD_WIDTH as i8 {
            state.board_mut().set(row, col, Some(PieceKind::Z));
        }
    }
}

#[test]
fn test_spawn_position() {
    let state = scripted(PieceKind::O);
    let active = state.active();
    assert_eq!(active.kind, PieceKind::O);
    assert_eq!(active.row, -2);
    assert_eq!(active.col, 4);
    assert_eq!(state.phase(), GamePhase::Playing);
}

#[test]
fn test_o_hard_drop_on_empty_grid() {
    let mut state = scripted(PieceKind::O);

    assert_eq!(state.hard_drop(), Some(20));

    let bottom = state.board().row(LAST_ROW as usize);
    let filled: Vec<usize> = (0..bottom.len()).filter(|&c| bottom[c].is_some()).collect();
    assert_eq!(filled, vec![4, 5]);
    assert_eq!(state.board().filled_count(), 4);
    assert_eq!(state.score(), 0);
    assert_eq!(state.phase(), GamePhase::Playing);
}

#[test]
fn test_completing_single_row_scores_40() {
    let mut state = scripted(PieceKind::O);
    fill_except_first_column(&mut state, LAST_ROW..=LAST_ROW);
    assert!(state.set_active(vertical_i()));

    state.hard_drop();

    assert_eq!(state.score(), 40);
    assert_eq!(state.lines(), 1);
    assert_eq!(state.board().height(), BOARD_HEIGHT);
    // The three I cells above the cleared row slid down by one.
    for row in 17..=19 {
        assert_eq!(state.board().get(row, 0), Some(Some(PieceKind::I)));
    }
    assert_eq!(state.board().filled_count(), 3);
    assert_eq!(state.last_event().unwrap().score_delta, 40);
}

#[test]
fn test_four_rows_score_1200() {
    let mut state = scripted(PieceKind::O);
    fill_except_first_column(&mut state, 16..=LAST_ROW);
    assert!(state.set_active(vertical_i()));

    state.hard_drop();

    assert_eq!(state.score(), 1200);
    assert_eq!(state.lines(), 4);
    assert!(state.board().is_empty());
}

#[test]
fn test_soft_drop_moves_then_locks() {
    let mut state = scripted(PieceKind::O);
    let start = state.active().row;

    assert!(state.apply_action(GameAction::SoftDrop));
    assert_eq!(state.active().row, start + 1);
    assert!(state.board().is_empty());

    while state.active().row < LAST_ROW - 1 {
        state.apply_action(GameAction::SoftDrop);
    }
    // Blocked by the floor: this soft drop locks.
    state.apply_action(GameAction::SoftDrop);
    assert_eq!(state.board().filled_count(), 4);
    assert_eq!(state.active().row, -2);
}

#[test]
fn test_horizontal_moves_stop_at_walls() {
    let mut state = scripted(PieceKind::I);
    let mut moved = 0;
    while state.apply_action(GameAction::MoveRight) {
        moved += 1;
    }
    assert_eq!(moved, 3);
    assert_eq!(state.active().col, 6);

    while state.apply_action(GameAction::MoveLeft) {}
    assert_eq!(state.active().col, 0);
}

#[test]
fn test_game_over_and_restart() {
    let mut state = scripted(PieceKind::O);

    // Score something first so the reset is observable.
    fill_except_first_column(&mut state, 16..=LAST_ROW);
    assert!(state.set_active(vertical_i()));
    state.hard_drop();
    assert_eq!(state.score(), 1200);

    while !state.is_game_over() {
        state.hard_drop();
    }
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert!(!state.board().is_empty());
    assert_eq!(state.score(), 1200);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert!(state.board().is_empty());
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.active().row, -2);
}

#[test]
fn test_score_never_decreases() {
    let mut state = GameState::new(2024);
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
    ];

    let mut last = 0;
    for action in actions.iter().cycle().take(400) {
        state.apply_action(*action);
        if state.is_game_over() {
            break;
        }
        assert!(state.score() >= last);
        last = state.score();
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(77);
    let mut b = GameState::new(77);

    for i in 0..60 {
        let action = match i % 4 {
            0 => GameAction::MoveLeft,
            1 => GameAction::Rotate,
            2 => GameAction::SoftDrop,
            _ => GameAction::HardDrop,
        };
        a.apply_action(action);
        b.apply_action(action);
        a.tick();
        b.tick();
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_active_piece_never_overlaps_stack() {
    let mut state = GameState::new(9);
    for i in 0..300 {
        match i % 5 {
            0 => state.apply_action(GameAction::Rotate),
            1 => state.apply_action(GameAction::MoveLeft),
            2 => state.apply_action(GameAction::MoveRight),
            3 => state.apply_action(GameAction::SoftDrop),
            _ => {
                state.tick();
                true
            }
        };
        if state.is_game_over() {
            break;
        }
        for (row, col) in state.active().cells() {
            assert!(!state.board().is_occupied(row, col));
        }
    }
}
