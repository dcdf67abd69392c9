//! Input module - event conversion and polling.
//!
//! Bridges crossterm's event system with the viewer. Converts the raw
//! events into the small set this widget consumes: scrolls, key presses,
//! and resizes.

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers, MouseEvent as CrosstermMouseEvent,
    MouseEventKind, poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

// =============================================================================
// EVENT TYPES
// =============================================================================

/// Direction of a manual scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A manual scroll gesture (mouse wheel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub direction: ScrollDirection,
    /// Scroll distance in wheel notches.
    pub delta: u16,
}

/// A key press with the modifiers the viewer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub ctrl: bool,
}

/// Unified event type for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse wheel scroll.
    Scroll(ScrollEvent),
    /// Key press (releases and repeats are folded into presses).
    Key(KeyPress),
    /// Terminal resize event (new width, height).
    Resize(u16, u16),
    /// No event or unhandled event type.
    None,
}

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Convert a crossterm mouse event. Only wheel scrolls are of interest.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> InputEvent {
    let direction = match event.kind {
        MouseEventKind::ScrollUp => ScrollDirection::Up,
        MouseEventKind::ScrollDown => ScrollDirection::Down,
        MouseEventKind::ScrollLeft => ScrollDirection::Left,
        MouseEventKind::ScrollRight => ScrollDirection::Right,
        _ => return InputEvent::None,
    };

    InputEvent::Scroll(ScrollEvent {
        direction,
        delta: 1,
    })
}

/// Convert a crossterm key event. Releases are dropped.
pub fn convert_key_event(event: CrosstermKeyEvent) -> InputEvent {
    if event.kind == KeyEventKind::Release {
        return InputEvent::None;
    }

    InputEvent::Key(KeyPress {
        code: event.code,
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
    })
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Mouse(mouse) => Ok(convert_mouse_event(mouse)),
        CrosstermEvent::Key(key) => Ok(convert_key_event(key)),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_event(kind: MouseEventKind) -> CrosstermMouseEvent {
        CrosstermMouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_scroll_directions() {
        let directions = [
            (MouseEventKind::ScrollUp, ScrollDirection::Up),
            (MouseEventKind::ScrollDown, ScrollDirection::Down),
            (MouseEventKind::ScrollLeft, ScrollDirection::Left),
            (MouseEventKind::ScrollRight, ScrollDirection::Right),
        ];

        for (kind, expected) in directions {
            match convert_mouse_event(mouse_event(kind)) {
                InputEvent::Scroll(scroll) => {
                    assert_eq!(scroll.direction, expected);
                    assert_eq!(scroll.delta, 1);
                }
                other => panic!("expected scroll, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_scroll_mouse_events_ignored() {
        let ignored = [
            MouseEventKind::Moved,
            MouseEventKind::Down(crossterm::event::MouseButton::Left),
            MouseEventKind::Up(crossterm::event::MouseButton::Left),
            MouseEventKind::Drag(crossterm::event::MouseButton::Left),
        ];

        for kind in ignored {
            assert_eq!(convert_mouse_event(mouse_event(kind)), InputEvent::None);
        }
    }

    #[test]
    fn test_convert_key_press() {
        let event = convert_key_event(key_event(
            KeyCode::Char(' '),
            KeyModifiers::empty(),
            KeyEventKind::Press,
        ));

        assert_eq!(
            event,
            InputEvent::Key(KeyPress {
                code: KeyCode::Char(' '),
                ctrl: false,
            })
        );
    }

    #[test]
    fn test_convert_key_with_ctrl() {
        let event = convert_key_event(key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ));

        assert_eq!(
            event,
            InputEvent::Key(KeyPress {
                code: KeyCode::Char('c'),
                ctrl: true,
            })
        );
    }

    #[test]
    fn test_key_release_dropped() {
        let event = convert_key_event(key_event(
            KeyCode::Char('q'),
            KeyModifiers::empty(),
            KeyEventKind::Release,
        ));
        assert_eq!(event, InputEvent::None);
    }

    #[test]
    fn test_key_repeat_kept() {
        let event = convert_key_event(key_event(
            KeyCode::Down,
            KeyModifiers::empty(),
            KeyEventKind::Repeat,
        ));
        assert!(matches!(event, InputEvent::Key(_)));
    }
}
