//! Single-line text input

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::{Painter, DEFAULT_FONT_SIZE};
use crate::callback::{fire, Callback};
use crate::event::Key;

/// Maximum number of characters a textbox holds
pub const MAX_TEXTBOX_LEN: usize = 256;

/// Inner horizontal padding
const PADDING: i32 = 5;

/// Editable single-line text field
#[derive(Debug)]
pub struct Textbox {
    pub(crate) header: WidgetHeader,
    /// Current contents
    pub text: String,
    /// Hint shown while empty
    pub placeholder: String,
    /// Whether key presses edit this box
    pub focused: bool,
    pub(crate) on_change: Option<Callback<String>>,
}

impl Textbox {
    /// Create an empty, unfocused textbox
    pub fn new(x: i32, y: i32, width: i32, height: i32, placeholder: impl Into<String>) -> Self {
        Self {
            header: WidgetHeader::new(WidgetKind::Textbox, x, y, width, height),
            text: String::new(),
            placeholder: placeholder.into(),
            focused: false,
            on_change: None,
        }
    }

    /// Attach a handler receiving the full text after each edit
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(String) + 'static) -> Self {
        self.on_change = Some(Callback::new(handler));
        self
    }

    /// Replace the contents (truncated to the capacity)
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(MAX_TEXTBOX_LEN).collect();
    }

    /// Apply one key press; returns whether the box changed
    fn apply_key(&mut self, key: Key) -> bool {
        match key {
            Key::Backspace => {
                if self.text.pop().is_none() {
                    return false;
                }
            }
            Key::Enter | Key::Escape => {
                self.focused = false;
                return true;
            }
            other => {
                let Some(c) = other.printable() else {
                    return false;
                };
                if self.text.chars().count() >= MAX_TEXTBOX_LEN {
                    return false;
                }
                self.text.push(c);
            }
        }
        let text = self.text.clone();
        fire(&mut self.on_change, text);
        true
    }
}

/// Longest suffix of `text` whose width fits in `max_width`
fn visible_tail<'t>(painter: &Painter<'_>, text: &'t str, max_width: f32) -> &'t str {
    let mut start = 0;
    while start < text.len() && painter.text_width(&text[start..]) > max_width {
        start += text[start..].chars().next().map_or(1, char::len_utf8);
    }
    &text[start..]
}

impl Widget for Textbox {
    const KIND: WidgetKind = WidgetKind::Textbox;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::Textbox(index)
    }

    fn header(&self) -> &WidgetHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut WidgetHeader {
        &mut self.header
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let theme = *painter.theme();
        let h = self.header;
        let border = if self.focused { theme.primary } else { theme.neutral };

        painter.fill_rect(h.x, h.y, h.width, h.height, theme.base);
        painter.draw_rect(h.x, h.y, h.width, h.height, border);

        let baseline = h.y + (h.height + painter.text_height("A") as i32) / 2;
        if self.text.is_empty() {
            if !self.focused {
                painter.draw_text(h.x + PADDING, baseline, &self.placeholder, theme.widget_base, DEFAULT_FONT_SIZE);
            }
        } else {
            let shown = visible_tail(painter, &self.text, (h.width - 2 * PADDING) as f32).to_string();
            painter.draw_text(h.x + PADDING, baseline, &shown, theme.neutral, DEFAULT_FONT_SIZE);
        }

        if self.focused {
            let shown = visible_tail(painter, &self.text, (h.width - 2 * PADDING) as f32);
            let caret = h.x + PADDING + painter.text_width(shown) as i32 + 1;
            painter.draw_line(caret, h.y + 5, caret, h.y + h.height - 5, theme.neutral);
        }
    }
}

/// Focus the textbox under the pointer and unfocus the rest
pub(crate) fn handle_click(textboxes: &mut [Textbox], x: i32, y: i32) -> bool {
    let mut hit = false;
    for textbox in textboxes.iter_mut() {
        let inside = !hit && textbox.header.contains(x, y);
        textbox.focused = inside;
        hit |= inside;
    }
    hit
}

/// Route a key press to the focused textbox
pub(crate) fn handle_key(textboxes: &mut [Textbox], key: Key) -> bool {
    textboxes
        .iter_mut()
        .find(|t| t.focused)
        .is_some_and(|t| t.apply_key(key))
}
