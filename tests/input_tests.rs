//! Key mapping tests

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use term_tetris::input::{handle_key_event, should_quit};
use term_tetris::types::GameAction;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_arrow_and_action_keys() {
    let cases = [
        (KeyCode::Left, GameAction::MoveLeft),
        (KeyCode::Right, GameAction::MoveRight),
        (KeyCode::Down, GameAction::SoftDrop),
        (KeyCode::Up, GameAction::Rotate),
        (KeyCode::Char(' '), GameAction::HardDrop),
        (KeyCode::Char('r'), GameAction::Restart),
        (KeyCode::Char('R'), GameAction::Restart),
    ];
    for (code, action) in cases {
        assert_eq!(handle_key_event(key(code)), Some(action), "{code:?}");
    }
}

#[test]
fn test_unmapped_keys() {
    for code in [KeyCode::Enter, KeyCode::Char('x'), KeyCode::Tab] {
        assert_eq!(handle_key_event(key(code)), None);
    }
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(key(KeyCode::Char('c'))));
    assert!(!should_quit(key(KeyCode::Char('r'))));
}
