//! Push button

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::{Painter, DEFAULT_FONT_SIZE};
use crate::callback::{fire, Callback};

/// Clickable button with a centered label
///
/// Each click toggles `clicked` and invokes the callback.
#[derive(Debug)]
pub struct Button {
    pub(crate) header: WidgetHeader,
    /// Caption
    pub label: String,
    /// Toggled on every click
    pub clicked: bool,
    /// Whether the pointer is over the button
    pub hovered: bool,
    pub(crate) on_click: Option<Callback<()>>,
}

impl Button {
    /// Create a button
    pub fn new(x: i32, y: i32, width: i32, height: i32, label: impl Into<String>) -> Self {
        Self {
            header: WidgetHeader::new(WidgetKind::Button, x, y, width, height),
            label: label.into(),
            clicked: false,
            hovered: false,
            on_click: None,
        }
    }

    /// Attach a click handler
    #[must_use]
    pub fn on_click(mut self, handler: impl FnMut(()) + 'static) -> Self {
        self.on_click = Some(Callback::new(handler));
        self
    }
}

impl Widget for Button {
    const KIND: WidgetKind = WidgetKind::Button;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::Button(index)
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
        let fill = if self.clicked {
            theme.primary
        } else if self.hovered {
            theme.info
        } else {
            theme.widget_base
        };

        painter.fill_rect(h.x, h.y, h.width, h.height, fill);
        painter.draw_rect(h.x, h.y, h.width, h.height, theme.neutral);

        let text_width = painter.text_width(&self.label) as i32;
        let text_height = painter.text_height(&self.label) as i32;
        let tx = h.x + (h.width - text_width) / 2;
        let ty = h.y + (h.height + text_height) / 2;
        painter.draw_text(tx, ty, &self.label, theme.neutral, DEFAULT_FONT_SIZE);
    }
}

/// Toggle the first button under the pointer
pub(crate) fn handle_click(buttons: &mut [Button], x: i32, y: i32) -> bool {
    for button in buttons.iter_mut() {
        if button.header.contains(x, y) {
            button.clicked = !button.clicked;
            log::debug!("Button '{}' clicked", button.label);
            fire(&mut button.on_click, ());
            return true;
        }
    }
    false
}

/// Update hover flags; returns whether any flag changed
pub(crate) fn handle_hover(buttons: &mut [Button], x: i32, y: i32) -> bool {
    let mut changed = false;
    for button in buttons.iter_mut() {
        let hovered = button.header.contains(x, y);
        if hovered != button.hovered {
            button.hovered = hovered;
            changed = true;
        }
    }
    changed
}
