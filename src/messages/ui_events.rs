//! UI events - terminal input translated for the state machine

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input events consumed by the state machine.
///
/// These are mode-independent: what `Char('q')` means (quit or a typed
/// character) is decided by the state machine from its current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Esc,
    /// Ctrl+C; quits from every mode
    Interrupt,
    Resize(u16, u16),
}

/// Convert a crossterm event to a UiEvent; unbound input yields `None`
pub fn to_ui_event(event: Event) -> Option<UiEvent> {
    match event {
        Event::Key(key) => key_to_ui_event(key),
        Event::Resize(width, height) => Some(UiEvent::Resize(width, height)),
        _ => None,
    }
}

/// Convert a key press to a UiEvent
pub fn key_to_ui_event(key: KeyEvent) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Interrupt),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(UiEvent::Char(c)),
        KeyCode::Enter => Some(UiEvent::Enter),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Tab => Some(UiEvent::Tab),
        KeyCode::Up => Some(UiEvent::Up),
        KeyCode::Down => Some(UiEvent::Down),
        KeyCode::Esc => Some(UiEvent::Esc),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(UiEvent::Interrupt)
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_shifted_char_is_plain_char() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('H'), KeyModifiers::SHIFT)),
            Some(UiEvent::Char('H'))
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_to_ui_event(key), None);
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(to_ui_event(Event::Resize(80, 24)), Some(UiEvent::Resize(80, 24)));
        assert_eq!(to_ui_event(Event::FocusGained), None);
    }
}
