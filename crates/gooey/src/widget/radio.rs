//! Radio buttons and mutually exclusive groups

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::{Painter, DEFAULT_FONT_SIZE};
use crate::callback::{fire, Callback};
use crate::error::{GooeyError, GooeyResult};

/// Default radius of a radio button
pub const RADIO_RADIUS: i32 = 10;

/// Maximum number of buttons in one group
pub const MAX_RADIO_BUTTONS: usize = 10;

/// Round toggle with a caption
///
/// Standalone radio buttons toggle on click; members of a [`RadioGroup`]
/// select exclusively.
#[derive(Debug)]
pub struct RadioButton {
    pub(crate) header: WidgetHeader,
    /// Caption
    pub label: String,
    /// Circle radius
    pub radius: i32,
    /// Current state
    pub selected: bool,
    pub(crate) on_select: Option<Callback<bool>>,
}

impl RadioButton {
    /// Create an unselected radio button with its circle's bounding box at
    /// `(x, y)`
    pub fn new(x: i32, y: i32, label: impl Into<String>) -> Self {
        Self {
            header: WidgetHeader::new(
                WidgetKind::RadioButton,
                x,
                y,
                RADIO_RADIUS * 2,
                RADIO_RADIUS * 2,
            ),
            label: label.into(),
            radius: RADIO_RADIUS,
            selected: false,
            on_select: None,
        }
    }

    /// Attach a handler receiving the new state
    #[must_use]
    pub fn on_select(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_select = Some(Callback::new(handler));
        self
    }

    /// Whether a point lies inside the circle
    #[must_use]
    pub fn hit(&self, x: i32, y: i32) -> bool {
        let cx = self.header.x + self.radius;
        let cy = self.header.y + self.radius;
        let (dx, dy) = (i64::from(x - cx), i64::from(y - cy));
        dx * dx + dy * dy <= i64::from(self.radius) * i64::from(self.radius)
    }
}

impl Widget for RadioButton {
    const KIND: WidgetKind = WidgetKind::RadioButton;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::RadioButton(index)
    }

    fn header(&self) -> &WidgetHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut WidgetHeader {
        &mut self.header
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let theme = *painter.theme();
        let (cx, cy) = (self.header.x + self.radius, self.header.y + self.radius);

        painter.fill_circle(cx, cy, self.radius, theme.neutral);
        painter.fill_circle(cx, cy, self.radius - 1, theme.widget_base);
        if self.selected {
            painter.fill_circle(cx, cy, self.radius / 2, theme.primary);
        }

        let text_height = painter.text_height(&self.label) as i32;
        painter.draw_text(
            cx + self.radius + 8,
            cy + text_height / 2,
            &self.label,
            theme.neutral,
            DEFAULT_FONT_SIZE,
        );
    }
}

/// A set of radio buttons of which at most one is selected
#[derive(Debug)]
pub struct RadioGroup {
    pub(crate) header: WidgetHeader,
    pub(crate) buttons: Vec<RadioButton>,
}

impl RadioGroup {
    /// Create an empty group
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: WidgetHeader::new(WidgetKind::RadioButton, 0, 0, 0, 0),
            buttons: Vec::new(),
        }
    }

    /// Add a member; the group's header grows to cover every member
    pub fn add_button(&mut self, button: RadioButton) -> GooeyResult<usize> {
        if self.buttons.len() >= MAX_RADIO_BUTTONS {
            log::warn!("Radio group is full ({MAX_RADIO_BUTTONS} buttons)");
            return Err(GooeyError::CapacityExceeded {
                kind: WidgetKind::RadioButton,
                capacity: MAX_RADIO_BUTTONS,
            });
        }

        let b = button.header;
        if self.buttons.is_empty() {
            self.header = WidgetHeader::new(WidgetKind::RadioButton, b.x, b.y, b.width, b.height);
        } else {
            let h = &mut self.header;
            let right = (h.x + h.width).max(b.x + b.width);
            let bottom = (h.y + h.height).max(b.y + b.height);
            h.x = h.x.min(b.x);
            h.y = h.y.min(b.y);
            h.width = right - h.x;
            h.height = bottom - h.y;
        }

        self.buttons.push(button);
        Ok(self.buttons.len() - 1)
    }

    /// Members in insertion order
    #[must_use]
    pub fn buttons(&self) -> &[RadioButton] {
        &self.buttons
    }

    /// Index of the selected member
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.selected)
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for RadioGroup {
    const KIND: WidgetKind = WidgetKind::RadioButton;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::RadioGroup(index)
    }

    fn header(&self) -> &WidgetHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut WidgetHeader {
        &mut self.header
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        for button in &self.buttons {
            button.draw(painter);
        }
    }
}

/// Toggle the first standalone radio button under the pointer
pub(crate) fn handle_click(buttons: &mut [RadioButton], x: i32, y: i32) -> bool {
    for button in buttons.iter_mut() {
        if button.hit(x, y) {
            button.selected = !button.selected;
            let selected = button.selected;
            fire(&mut button.on_select, selected);
            return true;
        }
    }
    false
}

/// Select the group member under the pointer and clear its siblings
pub(crate) fn handle_group_click(groups: &mut [RadioGroup], x: i32, y: i32) -> bool {
    for group in groups.iter_mut() {
        let Some(hit) = group.buttons.iter().position(|b| b.hit(x, y)) else {
            continue;
        };
        for (i, button) in group.buttons.iter_mut().enumerate() {
            button.selected = i == hit;
        }
        fire(&mut group.buttons[hit].on_select, true);
        return true;
    }
    false
}
