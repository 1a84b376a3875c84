use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::keypad::{Control, CursorMove};

/// What a physical key press means for the puzzle screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Tap(Control),
    MoveCursor(CursorMove),
    /// Tap whatever the keypad cursor is on.
    PressCursor,
    Quit,
    /// Letters and editing keys are swallowed so the on-screen keyboard is
    /// the only way to type.
    Suppressed,
    Ignored,
}

/// Physical keys that are discarded outright.
pub fn is_suppressed(code: KeyCode) -> bool {
    match code {
        KeyCode::Char(ch) => ch.is_alphabetic(),
        KeyCode::Backspace | KeyCode::Enter => true,
        _ => false,
    }
}

pub fn map_key(key: KeyEvent, video_open: bool) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignored;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    if is_suppressed(key.code) {
        return KeyAction::Suppressed;
    }

    match key.code {
        KeyCode::Esc if video_open => KeyAction::Tap(Control::CloseVideo),
        KeyCode::Esc => KeyAction::Tap(Control::Back),
        KeyCode::Char('?') => KeyAction::Tap(Control::Info),
        KeyCode::F(2) => KeyAction::Tap(Control::Menu),
        KeyCode::Up => KeyAction::MoveCursor(CursorMove::Up),
        KeyCode::Down => KeyAction::MoveCursor(CursorMove::Down),
        KeyCode::Left => KeyAction::MoveCursor(CursorMove::Left),
        KeyCode::Right => KeyAction::MoveCursor(CursorMove::Right),
        KeyCode::Char(' ') => KeyAction::PressCursor,
        _ => KeyAction::Ignored,
    }
}
