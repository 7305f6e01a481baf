//! Horizontal value slider

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::{Painter, DEFAULT_FONT_SIZE};
use crate::callback::{fire, Callback};
use crate::error::{GooeyError, GooeyResult};
use crate::event::{Event, EventKind, Key};

/// Extra pixels above and below the track that still grab the slider
const GRAB_TOLERANCE: i32 = 10;

/// Radius of the value knob
const KNOB_RADIUS: i32 = 8;

/// Integer slider over `[min, max]`
#[derive(Debug)]
pub struct Slider {
    pub(crate) header: WidgetHeader,
    min: i64,
    max: i64,
    /// Current value
    pub value: i64,
    /// Draw min/max/value labels
    pub show_hints: bool,
    /// Whether a drag gesture is in progress
    pub dragging: bool,
    pub(crate) on_change: Option<Callback<i64>>,
}

impl Slider {
    /// Create a slider positioned at `min`
    ///
    /// Fails when `max <= min`.
    pub fn new(x: i32, y: i32, width: i32, min: i64, max: i64, show_hints: bool) -> GooeyResult<Self> {
        if max <= min {
            log::warn!("Rejected slider with min {min} >= max {max}");
            return Err(GooeyError::InvalidSlider { min, max });
        }
        Ok(Self {
            header: WidgetHeader::new(WidgetKind::Slider, x, y, width, 6),
            min,
            max,
            value: min,
            show_hints,
            dragging: false,
            on_change: None,
        })
    }

    /// Attach a handler receiving the new value
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(i64) + 'static) -> Self {
        self.on_change = Some(Callback::new(handler));
        self
    }

    /// Lower bound
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound, always above [`Slider::min`]
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Set the value, clamped to the range; fires the handler on change
    pub fn set_value(&mut self, value: i64) -> bool {
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return false;
        }
        self.value = value;
        fire(&mut self.on_change, value);
        true
    }

    fn grabs(&self, x: i32, y: i32) -> bool {
        let h = self.header;
        x >= h.x && x <= h.x + h.width && y >= h.y - GRAB_TOLERANCE && y <= h.y + h.height + GRAB_TOLERANCE
    }

    /// Distance between the bounds; wider than `i64` for full-range sliders
    fn span(&self) -> i128 {
        i128::from(self.max) - i128::from(self.min)
    }

    fn value_at(&self, x: i32) -> i64 {
        let h = self.header;
        if h.width <= 0 {
            return self.min;
        }
        let offset = i128::from(x.saturating_sub(h.x).clamp(0, h.width));
        let value = i128::from(self.min) + offset * self.span() / i128::from(h.width);
        i64::try_from(value).unwrap_or(self.max).clamp(self.min, self.max)
    }

    fn knob_x(&self) -> i32 {
        let h = self.header;
        let progress = i128::from(self.value) - i128::from(self.min);
        let offset = progress * i128::from(h.width.max(0)) / self.span();
        h.x.saturating_add(i32::try_from(offset).unwrap_or(h.width))
    }
}

impl Widget for Slider {
    const KIND: WidgetKind = WidgetKind::Slider;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::Slider(index)
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
        let knob = self.knob_x();

        painter.fill_rect(h.x, h.y, h.width, h.height, theme.widget_base);
        painter.fill_rect(h.x, h.y, knob.saturating_sub(h.x), h.height, theme.primary);
        painter.fill_circle(knob, h.y + h.height / 2, KNOB_RADIUS, theme.primary);

        if self.show_hints {
            let below = h.y + h.height + KNOB_RADIUS + 14;
            let max_text = self.max.to_string();
            let max_width = painter.text_width(&max_text) as i32;
            painter.draw_text(h.x, below, &self.min.to_string(), theme.neutral, DEFAULT_FONT_SIZE);
            painter.draw_text(h.x + h.width - max_width, below, &max_text, theme.neutral, DEFAULT_FONT_SIZE);
            painter.draw_text(knob - 4, h.y - KNOB_RADIUS - 4, &self.value.to_string(), theme.neutral, DEFAULT_FONT_SIZE);
        }
    }
}

/// Press / motion / release handling for slider drags
pub(crate) fn handle_drag(sliders: &mut [Slider], event: &Event) -> bool {
    match event.kind {
        EventKind::ClickPress { x, y, .. } => {
            for slider in sliders.iter_mut() {
                if slider.grabs(x, y) {
                    slider.dragging = true;
                    let value = slider.value_at(x);
                    slider.set_value(value);
                    return true;
                }
            }
            false
        }
        EventKind::MouseMove { x, .. } => {
            let mut consumed = false;
            for slider in sliders.iter_mut().filter(|s| s.dragging) {
                let value = slider.value_at(x);
                consumed |= slider.set_value(value);
            }
            consumed
        }
        EventKind::ClickRelease { .. } => {
            let mut released = false;
            for slider in sliders.iter_mut().filter(|s| s.dragging) {
                slider.dragging = false;
                released = true;
            }
            released
        }
        _ => false,
    }
}

/// Left/Right arrows step the slider under the pointer by one
pub(crate) fn handle_key(sliders: &mut [Slider], key: Key, pointer: (i32, i32)) -> bool {
    let step = match key {
        Key::Left => -1,
        Key::Right => 1,
        _ => return false,
    };
    sliders
        .iter_mut()
        .find(|s| s.grabs(pointer.0, pointer.1))
        .is_some_and(|s| {
            let value = s.value.saturating_add(step);
            s.set_value(value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Backend, HeadlessBackend, WindowId};
    use crate::theme::Theme;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn slider() -> Slider {
        Slider::new(100, 100, 200, 0, 100, true).unwrap()
    }

    #[test]
    fn test_invalid_range() {
        assert!(matches!(
            Slider::new(0, 0, 10, 5, 5, false),
            Err(GooeyError::InvalidSlider { min: 5, max: 5 })
        ));
        assert!(Slider::new(0, 0, 10, 9, 1, false).is_err());
    }

    #[test]
    fn test_drag_gesture() {
        let id = WindowId::new(1);
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        let mut sliders = vec![slider().on_change(move |v| sink.borrow_mut().push(v))];

        assert!(handle_drag(&mut sliders, &Event::press(id, 200, 103)));
        assert!(sliders[0].dragging);
        assert_eq!(sliders[0].value, 50);

        assert!(handle_drag(&mut sliders, &Event::motion(id, 250, 400)));
        assert_eq!(sliders[0].value, 75);

        // Past the end clamps
        handle_drag(&mut sliders, &Event::motion(id, 900, 103));
        assert_eq!(sliders[0].value, 100);

        assert!(handle_drag(&mut sliders, &Event::release(id, 900, 103)));
        assert!(!sliders[0].dragging);
        assert!(!handle_drag(&mut sliders, &Event::motion(id, 100, 103)));
        assert_eq!(*values.borrow(), vec![50, 75, 100]);
    }

    #[test]
    fn test_full_i64_range() {
        let id = WindowId::new(1);
        let mut backend = HeadlessBackend::new();
        let window = backend.create_window("slider", 200, 200);
        let theme = Theme::default();
        let mut sliders = vec![Slider::new(0, 0, 100, i64::MIN, i64::MAX, true).unwrap()];
        assert_eq!((sliders[0].min(), sliders[0].max()), (i64::MIN, i64::MAX));

        sliders[0].draw(&mut Painter::new(&mut backend, &theme, window));

        assert!(handle_drag(&mut sliders, &Event::press(id, 50, 3)));
        assert!(sliders[0].value > i64::MIN);
        handle_drag(&mut sliders, &Event::motion(id, 100, 3));
        assert_eq!(sliders[0].value, i64::MAX);
        assert_eq!(sliders[0].knob_x(), 100);
        handle_drag(&mut sliders, &Event::release(id, 100, 3));

        // Stepping past the top saturates
        assert!(!handle_key(&mut sliders, Key::Right, (50, 3)));
        assert_eq!(sliders[0].value, i64::MAX);

        handle_drag(&mut sliders, &Event::press(id, 0, 3));
        assert_eq!(sliders[0].value, i64::MIN);
        assert_eq!(sliders[0].knob_x(), 0);
        sliders[0].draw(&mut Painter::new(&mut backend, &theme, window));
    }

    #[test]
    fn test_press_outside() {
        let id = WindowId::new(1);
        let mut sliders = vec![slider()];
        assert!(!handle_drag(&mut sliders, &Event::press(id, 200, 150)));
        assert!(!sliders[0].dragging);
        assert!(!handle_drag(&mut sliders, &Event::release(id, 200, 150)));
    }

    #[test]
    fn test_arrow_keys() {
        let mut sliders = vec![slider()];
        assert!(handle_key(&mut sliders, Key::Right, (150, 103)));
        assert_eq!(sliders[0].value, 1);
        assert!(handle_key(&mut sliders, Key::Left, (150, 103)));
        // Already at min
        assert!(!handle_key(&mut sliders, Key::Left, (150, 103)));
        assert!(!handle_key(&mut sliders, Key::Right, (10, 10)));
        assert!(!handle_key(&mut sliders, Key::Enter, (150, 103)));
    }
}
