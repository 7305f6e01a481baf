//! Dropdown selector

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::{Painter, DEFAULT_FONT_SIZE};
use crate::callback::{fire, Callback};
use crate::error::{GooeyError, GooeyResult};

/// Maximum number of options per dropdown
pub const MAX_DROPDOWN_OPTIONS: usize = 10;

/// Collapsed selector that opens a column of option rows below itself
#[derive(Debug)]
pub struct Dropdown {
    pub(crate) header: WidgetHeader,
    /// Option captions
    pub options: Vec<String>,
    /// Index of the chosen option
    pub selected: usize,
    /// Whether the option rows are shown
    pub is_open: bool,
    pub(crate) on_select: Option<Callback<usize>>,
}

impl Dropdown {
    /// Create a closed dropdown with the first option selected
    pub fn new<S: Into<String>>(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        options: impl IntoIterator<Item = S>,
    ) -> GooeyResult<Self> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.len() > MAX_DROPDOWN_OPTIONS {
            log::warn!("Dropdown has {} options, limit is {MAX_DROPDOWN_OPTIONS}", options.len());
            return Err(GooeyError::CapacityExceeded {
                kind: WidgetKind::Dropdown,
                capacity: MAX_DROPDOWN_OPTIONS,
            });
        }
        Ok(Self {
            header: WidgetHeader::new(WidgetKind::Dropdown, x, y, width, height),
            options,
            selected: 0,
            is_open: false,
            on_select: None,
        })
    }

    /// Attach a handler receiving the chosen index
    #[must_use]
    pub fn on_select(mut self, handler: impl FnMut(usize) + 'static) -> Self {
        self.on_select = Some(Callback::new(handler));
        self
    }

    /// Caption of the chosen option
    #[must_use]
    pub fn selected_text(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    /// Option row under the pointer while open
    fn option_at(&self, x: i32, y: i32) -> Option<usize> {
        let h = self.header;
        if !self.is_open || h.height <= 0 || x < h.x || x > h.x + h.width {
            return None;
        }
        let top = h.y + h.height;
        if y < top {
            return None;
        }
        let row = ((y - top) / h.height) as usize;
        (row < self.options.len()).then_some(row)
    }
}

impl Widget for Dropdown {
    const KIND: WidgetKind = WidgetKind::Dropdown;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::Dropdown(index)
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
        let text_offset = (h.height + painter.text_height("A") as i32) / 2;

        painter.fill_rect(h.x, h.y, h.width, h.height, theme.widget_base);
        painter.draw_rect(h.x, h.y, h.width, h.height, theme.neutral);
        if let Some(text) = self.selected_text() {
            painter.draw_text(h.x + 5, h.y + text_offset, text, theme.neutral, DEFAULT_FONT_SIZE);
        }

        // Caret
        let cx = h.x + h.width - 15;
        let cy = h.y + h.height / 2;
        painter.draw_line(cx - 5, cy - 3, cx, cy + 3, theme.neutral);
        painter.draw_line(cx, cy + 3, cx + 5, cy - 3, theme.neutral);

        if self.is_open {
            for (i, option) in self.options.iter().enumerate() {
                let row_y = h.y + h.height * (i as i32 + 1);
                let fill = if i == self.selected {
                    theme.primary
                } else {
                    theme.widget_base
                };
                painter.fill_rect(h.x, row_y, h.width, h.height, fill);
                painter.draw_rect(h.x, row_y, h.width, h.height, theme.neutral);
                painter.draw_text(h.x + 5, row_y + text_offset, option, theme.neutral, DEFAULT_FONT_SIZE);
            }
        }
    }
}

/// Toggle a dropdown header or pick an option from an open one
pub(crate) fn handle_click(dropdowns: &mut [Dropdown], x: i32, y: i32) -> bool {
    for dropdown in dropdowns.iter_mut() {
        if dropdown.header.contains(x, y) {
            dropdown.is_open = !dropdown.is_open;
            return true;
        }
        if let Some(index) = dropdown.option_at(x, y) {
            dropdown.selected = index;
            dropdown.is_open = false;
            fire(&mut dropdown.on_select, index);
            return true;
        }
    }
    false
}
