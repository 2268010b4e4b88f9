use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// One wheel step of pulling content down
    PullDown,
    /// One wheel step of pulling content up
    PullUp,
    /// End the current gesture now
    Settle,
    /// Drop the current gesture and remount the interaction
    Reset,
    None,
}

/// Pointer input relevant to the gesture tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Press { row: u16 },
    Drag { row: u16 },
    Release,
    /// Positive ticks pull content down
    Wheel { ticks: i32 },
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Pulling
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::PullDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::PullDown,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::PullUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::PullUp,

        // Gesture control
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Settle,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Settle,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reset,

        _ => Action::None,
    }
}

/// Map a mouse event onto gesture input
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerInput::Press { row: mouse.row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerInput::Drag { row: mouse.row }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerInput::Release),
        // Wheel up scrolls toward the top, which drags the content down
        MouseEventKind::ScrollUp => Some(PointerInput::Wheel { ticks: 1 }),
        MouseEventKind::ScrollDown => Some(PointerInput::Wheel { ticks: -1 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 4,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Up, KeyModifiers::NONE)), Action::PullDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE)), Action::PullUp);
        assert_eq!(handle_key_event(key(KeyCode::Char(' '), KeyModifiers::NONE)), Action::Settle);
        assert_eq!(handle_key_event(key(KeyCode::Char('r'), KeyModifiers::NONE)), Action::Reset);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
    }

    #[test]
    fn test_mouse_mapping() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 7)),
            Some(PointerInput::Press { row: 7 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 9)),
            Some(PointerInput::Drag { row: 9 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 9)),
            Some(PointerInput::Release)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollUp, 0)),
            Some(PointerInput::Wheel { ticks: 1 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 0)),
            Some(PointerInput::Wheel { ticks: -1 })
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::Moved, 3)), None);
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 3)),
            None
        );
    }
}
