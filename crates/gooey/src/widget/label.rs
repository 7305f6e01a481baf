//! Static text

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::{Painter, DEFAULT_FONT_SIZE};
use crate::theme::Color;

/// Text drawn with its baseline at the header's `y`
#[derive(Debug, Clone)]
pub struct Label {
    pub(crate) header: WidgetHeader,
    /// Displayed text
    pub text: String,
    /// Font size
    pub font_size: f32,
    /// Override for the theme's text color
    pub color: Option<Color>,
}

impl Label {
    /// Create a label. Its height is one line; its width is filled in by
    /// layouts.
    pub fn new(x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            header: WidgetHeader::new(WidgetKind::Label, x, y, 0, DEFAULT_FONT_SIZE as i32),
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
            color: None,
        }
    }

    /// Use a different font size
    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self.header.height = font_size as i32;
        self
    }

    /// Replace the text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Override the text color
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }
}

impl Widget for Label {
    const KIND: WidgetKind = WidgetKind::Label;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::Label(index)
    }

    fn header(&self) -> &WidgetHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut WidgetHeader {
        &mut self.header
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let color = self.color.unwrap_or(painter.theme().neutral);
        painter.draw_text(self.header.x, self.header.y, &self.text, color, self.font_size);
    }
}
