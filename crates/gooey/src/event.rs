//! Input events delivered by a backend

use crate::backend::WindowId;

/// Mouse button that produced a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// Primary button
    #[default]
    Left,
    /// Middle button / wheel click
    Middle,
    /// Secondary button
    Right,
}

/// Logical key carried by keyboard events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    Backspace,
    Enter,
    Escape,
    Tab,
    Left,
    Right,
    Up,
    Down,
    /// Any other key, identified only by its keycode
    Other,
}

impl Key {
    /// The character this key inserts into text, if any
    #[must_use]
    pub fn printable(self) -> Option<char> {
        match self {
            Self::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// Event payload
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EventKind {
    /// Nothing happened since the last poll
    #[default]
    None,
    /// A mouse button went down
    ClickPress { x: i32, y: i32, button: MouseButton },
    /// A mouse button went up
    ClickRelease { x: i32, y: i32, button: MouseButton },
    /// A key went down
    KeyPress { key: Key, keycode: u32 },
    /// A key went up
    KeyRelease { key: Key, keycode: u32 },
    /// The pointer moved
    MouseMove { x: i32, y: i32 },
    /// Wheel scroll; positive `delta` scrolls content towards its start
    MouseScroll { x: i32, y: i32, delta: i32 },
    /// The window contents need to be repainted
    Expose,
    /// The user asked to close the window
    WindowClose,
}

/// An input event scoped to one window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Event {
    /// Window the event originated from
    pub attached_window: WindowId,
    /// What happened
    pub kind: EventKind,
}

impl Event {
    /// Create an event for a window
    #[must_use]
    pub const fn new(attached_window: WindowId, kind: EventKind) -> Self {
        Self {
            attached_window,
            kind,
        }
    }

    /// The idle sentinel returned when no input is pending
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether this is the idle sentinel
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self.kind, EventKind::None)
    }

    /// Pointer position carried by the event, if any
    #[must_use]
    pub fn position(&self) -> Option<(i32, i32)> {
        match self.kind {
            EventKind::ClickPress { x, y, .. }
            | EventKind::ClickRelease { x, y, .. }
            | EventKind::MouseMove { x, y }
            | EventKind::MouseScroll { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }

    /// Left click press at a position
    #[must_use]
    pub const fn press(window: WindowId, x: i32, y: i32) -> Self {
        Self::new(
            window,
            EventKind::ClickPress {
                x,
                y,
                button: MouseButton::Left,
            },
        )
    }

    /// Left click release at a position
    #[must_use]
    pub const fn release(window: WindowId, x: i32, y: i32) -> Self {
        Self::new(
            window,
            EventKind::ClickRelease {
                x,
                y,
                button: MouseButton::Left,
            },
        )
    }

    /// Pointer motion to a position
    #[must_use]
    pub const fn motion(window: WindowId, x: i32, y: i32) -> Self {
        Self::new(window, EventKind::MouseMove { x, y })
    }

    /// Wheel scroll at a position
    #[must_use]
    pub const fn scroll(window: WindowId, x: i32, y: i32, delta: i32) -> Self {
        Self::new(window, EventKind::MouseScroll { x, y, delta })
    }

    /// Key press
    #[must_use]
    pub const fn key(window: WindowId, key: Key) -> Self {
        Self::new(window, EventKind::KeyPress { key, keycode: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_event() {
        let event = Event::none();
        assert!(event.is_none());
        assert_eq!(event.position(), None);
    }

    #[test]
    fn test_event_position() {
        let id = WindowId::new(3);
        assert_eq!(Event::press(id, 4, 5).position(), Some((4, 5)));
        assert_eq!(Event::scroll(id, 1, 2, -1).position(), Some((1, 2)));
        assert_eq!(Event::key(id, Key::Enter).position(), None);
        assert_eq!(Event::press(id, 0, 0).attached_window, id);
    }

    #[test]
    fn test_printable_keys() {
        assert_eq!(Key::Char('a').printable(), Some('a'));
        assert_eq!(Key::Char('\u{8}').printable(), None);
        assert_eq!(Key::Backspace.printable(), None);
    }
}
