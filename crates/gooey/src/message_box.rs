//! Message boxes
//!
//! A message box is a hidden child window holding one label and an OK
//! button. Pressing OK hides the window and invokes the dismiss handler.

use std::cell::Cell;
use std::rc::Rc;

use crate::backend::Backend;
use crate::callback::Callback;
use crate::error::GooeyResult;
use crate::theme::{Color, Theme};
use crate::widget::{Button, Label};
use crate::window::Window;

const BUTTON_WIDTH: i32 = 80;
const BUTTON_HEIGHT: i32 = 30;

/// Severity, which picks the message color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageBoxKind {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageBoxKind {
    /// Theme color used for the message text
    #[must_use]
    pub fn color(self, theme: &Theme) -> Color {
        match self {
            Self::Info => theme.info,
            Self::Success => theme.success,
            Self::Error => theme.danger,
        }
    }
}

/// Message box configuration
#[derive(Debug, Clone)]
pub struct MessageBoxConfig {
    /// Window title
    pub title: String,
    /// Body text
    pub message: String,
    /// Severity
    pub kind: MessageBoxKind,
    /// Caption of the dismiss button
    pub confirm_text: String,
    /// Window size as `(width, height)`
    pub size: (i32, i32),
}

impl Default for MessageBoxConfig {
    fn default() -> Self {
        Self {
            title: "Message".to_string(),
            message: String::new(),
            kind: MessageBoxKind::Info,
            confirm_text: "OK".to_string(),
            size: (300, 150),
        }
    }
}

impl MessageBoxConfig {
    /// Informational box with the default size and an OK button
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: MessageBoxKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the dismiss button caption
    #[must_use]
    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = (width, height);
        self
    }

    /// Spawn the hidden window
    pub(crate) fn open(
        &self,
        backend: &mut dyn Backend,
        theme: &Theme,
        on_dismiss: impl FnMut(()) + 'static,
    ) -> GooeyResult<Window> {
        let (width, height) = self.size;
        let mut window = Window::create_child(backend, &self.title, width, height, false)?;

        let mut label = Label::new(20, 40, self.message.as_str());
        label.set_color(self.kind.color(theme));
        window.add(label)?;

        let requested = Rc::new(Cell::new(false));
        let flag = Rc::clone(&requested);
        let button = Button::new(
            (width - BUTTON_WIDTH) / 2,
            height - BUTTON_HEIGHT - 20,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
            self.confirm_text.as_str(),
        )
        .on_click(move |()| flag.set(true));
        window.add(button)?;

        window.arm_dismissal(requested, Callback::new(on_dismiss).with_description("message box dismissed"));
        Ok(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;
    use crate::window::WindowKind;

    #[test]
    fn test_open_builds_hidden_child() {
        let mut backend = HeadlessBackend::new();
        let theme = Theme::default();
        let config = MessageBoxConfig::new("Oops", "Something failed").with_kind(MessageBoxKind::Error);
        let window = config.open(&mut backend, &theme, |()| {}).unwrap();

        assert_eq!(window.kind(), WindowKind::MessageBox);
        assert!(!window.is_visible());
        let record = backend.window(window.id()).unwrap();
        assert!(record.child);
        assert!(!record.visible);

        let label = &window.pool::<Label>()[0];
        assert_eq!(label.text, "Something failed");
        assert_eq!(label.color, Some(theme.danger));
        assert_eq!(window.pool::<Button>()[0].label, "OK");
    }

    #[test]
    fn test_button_centered() {
        let mut backend = HeadlessBackend::new();
        let config = MessageBoxConfig::new("t", "m").with_size(400, 200).with_confirm_text("Close");
        let window = config.open(&mut backend, &Theme::default(), |()| {}).unwrap();
        let button = &window.pool::<Button>()[0];
        assert_eq!(button.header.x, 160);
        assert_eq!(button.header.y, 150);
        assert_eq!(button.label, "Close");
    }
}
