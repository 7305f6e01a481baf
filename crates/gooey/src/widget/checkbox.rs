//! Checkbox

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::{Painter, DEFAULT_FONT_SIZE};
use crate::callback::{fire, Callback};

/// Side length of the check box square
pub const CHECKBOX_SIZE: i32 = 20;

/// Square toggle with a caption to its right
#[derive(Debug)]
pub struct Checkbox {
    pub(crate) header: WidgetHeader,
    /// Caption
    pub label: String,
    /// Current state
    pub checked: bool,
    pub(crate) on_toggle: Option<Callback<bool>>,
}

impl Checkbox {
    /// Create an unchecked checkbox
    pub fn new(x: i32, y: i32, label: impl Into<String>) -> Self {
        Self {
            header: WidgetHeader::new(WidgetKind::Checkbox, x, y, CHECKBOX_SIZE, CHECKBOX_SIZE),
            label: label.into(),
            checked: false,
            on_toggle: None,
        }
    }

    /// Attach a handler receiving the new state
    #[must_use]
    pub fn on_toggle(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_toggle = Some(Callback::new(handler));
        self
    }
}

impl Widget for Checkbox {
    const KIND: WidgetKind = WidgetKind::Checkbox;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::Checkbox(index)
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

        painter.fill_rect(h.x, h.y, h.width, h.height, theme.widget_base);
        painter.draw_rect(h.x, h.y, h.width, h.height, theme.neutral);
        if self.checked {
            painter.fill_rect(h.x + 4, h.y + 4, h.width - 8, h.height - 8, theme.primary);
        }

        let text_height = painter.text_height(&self.label) as i32;
        painter.draw_text(
            h.x + h.width + 8,
            h.y + (h.height + text_height) / 2,
            &self.label,
            theme.neutral,
            DEFAULT_FONT_SIZE,
        );
    }
}

/// Toggle the first checkbox whose box is under the pointer
pub(crate) fn handle_click(checkboxes: &mut [Checkbox], x: i32, y: i32) -> bool {
    for checkbox in checkboxes.iter_mut() {
        if checkbox.header.contains(x, y) {
            checkbox.checked = !checkbox.checked;
            let checked = checkbox.checked;
            fire(&mut checkbox.on_toggle, checked);
            return true;
        }
    }
    false
}
