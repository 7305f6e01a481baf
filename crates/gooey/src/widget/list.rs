//! Scrollable item list
//!
//! Items are laid out at a fixed pitch (`item_spacing`) and shifted by a
//! non-positive `scroll_offset`; only rows intersecting the list rectangle are
//! drawn. A scrollbar thumb on the right edge reflects the visible share of
//! the content and can be dragged.
//!
//! Scroll state invariant: `-(max(0, total - visible)) <= scroll_offset <= 0`
//! where `total = item_count * item_spacing` and `visible = height`. Every
//! mutation goes through [`List::scroll_by`], which clamps.

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::{Backend, Painter, DEFAULT_FONT_SIZE};
use crate::callback::{fire, Callback};
use crate::event::Key;

/// Default vertical pitch of list rows
pub const DEFAULT_ITEM_SPACING: i32 = 50;

/// Default scrollbar thumb width
pub const DEFAULT_THUMB_WIDTH: i32 = 10;

/// Wheel scroll multiplier
pub const SCROLL_SPEED: f32 = 2.0;

/// One row of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Primary text
    pub title: String,
    /// Secondary text drawn under the title
    pub description: String,
}

/// Virtualized, scrollable list of titled items
#[derive(Debug)]
pub struct List {
    pub(crate) header: WidgetHeader,
    items: Vec<ListItem>,
    scroll_offset: i32,
    thumb_y: i32,
    thumb_height: i32,
    thumb_width: i32,
    item_spacing: i32,
    dragging: bool,
    drag_last_y: i32,
    selected: Option<usize>,
    pub(crate) on_select: Option<Callback<usize>>,
}

impl List {
    /// Create an empty list
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        let mut list = Self {
            header: WidgetHeader::new(WidgetKind::List, x, y, width, height),
            items: Vec::new(),
            scroll_offset: 0,
            thumb_y: y,
            thumb_height: height,
            thumb_width: DEFAULT_THUMB_WIDTH,
            item_spacing: DEFAULT_ITEM_SPACING,
            dragging: false,
            drag_last_y: 0,
            selected: None,
            on_select: None,
        };
        list.update_scrollbar();
        list
    }

    /// Attach a handler receiving the clicked item index
    #[must_use]
    pub fn on_select(mut self, handler: impl FnMut(usize) + 'static) -> Self {
        self.on_select = Some(Callback::new(handler));
        self
    }

    /// Use a different row pitch
    #[must_use]
    pub fn with_item_spacing(mut self, spacing: i32) -> Self {
        self.set_item_spacing(spacing);
        self
    }

    /// Change the row pitch; values below one pixel become one
    pub fn set_item_spacing(&mut self, spacing: i32) {
        self.item_spacing = spacing.max(1);
        self.update_scrollbar();
    }

    /// Vertical pitch of rows
    #[must_use]
    pub fn item_spacing(&self) -> i32 {
        self.item_spacing
    }

    /// Change the scrollbar column width, kept within `[1, width]`
    pub fn set_thumb_width(&mut self, width: i32) {
        self.thumb_width = width.clamp(1, self.header.width.max(1));
    }

    /// Width of the scrollbar column
    #[must_use]
    pub fn thumb_width(&self) -> i32 {
        self.thumb_width
    }

    /// Append an item
    pub fn add_item(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.items.push(ListItem {
            title: title.into(),
            description: description.into(),
        });
        self.update_scrollbar();
    }

    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Current offset (always `<= 0`)
    #[must_use]
    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn thumb_y(&self) -> i32 {
        self.thumb_y
    }

    #[must_use]
    pub fn thumb_height(&self) -> i32 {
        self.thumb_height
    }

    /// Whether the thumb is being dragged
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last clicked item
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Height of all rows together
    #[must_use]
    pub fn content_height(&self) -> i32 {
        i32::try_from(self.items.len())
            .unwrap_or(i32::MAX)
            .saturating_mul(self.item_spacing)
    }

    /// Most negative allowed offset, negated
    #[must_use]
    pub fn max_scroll(&self) -> i32 {
        (self.content_height() - self.header.height).max(0)
    }

    /// Content pixels per visible pixel
    fn overflow_ratio(&self) -> f32 {
        if self.header.height <= 0 {
            return 0.0;
        }
        self.content_height() as f32 / self.header.height as f32
    }

    /// Shift the content by `delta` pixels (positive moves towards the first
    /// item); returns whether the offset changed
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        let before = self.scroll_offset;
        let target = self.scroll_offset as f32 + delta;
        self.scroll_offset = (target.round() as i32).clamp(-self.max_scroll(), 0);
        self.update_scrollbar();
        self.scroll_offset != before
    }

    /// Re-clamp the offset and recompute the thumb geometry
    pub fn update_scrollbar(&mut self) {
        let visible = self.header.height;
        let total = self.content_height();
        self.scroll_offset = self.scroll_offset.clamp(-self.max_scroll(), 0);

        if total <= visible || total <= 0 {
            self.thumb_height = visible;
            self.thumb_y = self.header.y;
        } else {
            let (visible_f, total_f) = (visible as f32, total as f32);
            self.thumb_height = (visible_f * (visible_f / total_f)) as i32;
            self.thumb_y = self.header.y - (self.scroll_offset as f32 * visible_f / total_f) as i32;
        }
    }

    fn thumb_contains(&self, x: i32, y: i32) -> bool {
        let left = self.header.x + self.header.width - self.thumb_width;
        x >= left && x <= self.header.x + self.header.width && y >= self.thumb_y && y <= self.thumb_y + self.thumb_height
    }

    /// Row under the pointer, excluding the scrollbar column
    fn item_at(&self, x: i32, y: i32) -> Option<usize> {
        let h = self.header;
        if !h.contains(x, y) || x >= h.x + h.width - self.thumb_width {
            return None;
        }
        let content_y = (y - h.y).saturating_sub(self.scroll_offset);
        let index = (content_y / self.item_spacing) as usize;
        (index < self.items.len()).then_some(index)
    }
}

impl Widget for List {
    const KIND: WidgetKind = WidgetKind::List;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::List(index)
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

        painter.fill_rect(h.x, h.y, h.width, h.height, theme.base);
        painter.draw_rect(h.x, h.y, h.width, h.height, theme.neutral);

        let row_width = h.width - self.thumb_width;
        for (i, item) in self.items.iter().enumerate() {
            let row_y = (i as i32)
                .saturating_mul(self.item_spacing)
                .saturating_add(h.y + self.scroll_offset);
            if row_y >= h.y + h.height {
                break;
            }
            if row_y.saturating_add(self.item_spacing) <= h.y {
                continue;
            }

            if self.selected == Some(i) {
                painter.fill_rect(h.x + 1, row_y, row_width - 1, self.item_spacing, theme.widget_base);
            }
            painter.draw_text(h.x + 10, row_y + 20, &item.title, theme.neutral, DEFAULT_FONT_SIZE);
            painter.draw_text(h.x + 10, row_y + 38, &item.description, theme.info, DEFAULT_FONT_SIZE * 0.8);
            painter.draw_line(
                h.x,
                row_y + self.item_spacing,
                h.x + row_width,
                row_y + self.item_spacing,
                theme.widget_base,
            );
        }

        let track_x = h.x + h.width - self.thumb_width;
        painter.fill_rect(track_x, h.y, self.thumb_width, h.height, theme.widget_base);
        painter.fill_rect(track_x, self.thumb_y, self.thumb_width, self.thumb_height, theme.primary);
    }
}

/// Start a thumb drag when the press lands on a thumb
pub(crate) fn handle_thumb_grab(lists: &mut [List], backend: &mut dyn Backend, x: i32, y: i32) -> bool {
    for list in lists.iter_mut() {
        list.update_scrollbar();
        if list.thumb_contains(x, y) {
            list.dragging = true;
            list.drag_last_y = y;
            backend.inhibit_reset_events(true);
            return true;
        }
    }
    false
}

/// Apply pointer motion to a dragged thumb
pub(crate) fn handle_thumb_drag(lists: &mut [List], y: i32) -> bool {
    let mut consumed = false;
    for list in lists.iter_mut().filter(|l| l.dragging) {
        let dy = y - list.drag_last_y;
        list.drag_last_y = y;
        let ratio = list.overflow_ratio();
        list.scroll_by(-(dy as f32) * ratio);
        consumed = true;
    }
    consumed
}

/// End any thumb drag
pub(crate) fn handle_thumb_release(lists: &mut [List], backend: &mut dyn Backend) -> bool {
    let mut released = false;
    for list in lists.iter_mut().filter(|l| l.dragging) {
        list.dragging = false;
        released = true;
    }
    if released {
        backend.inhibit_reset_events(false);
    }
    released
}

/// Wheel scrolling over a list
pub(crate) fn handle_scroll(lists: &mut [List], x: i32, y: i32, delta: i32) -> bool {
    let Some(list) = lists.iter_mut().find(|l| l.header.contains(x, y)) else {
        return false;
    };
    let ratio = list.overflow_ratio();
    list.scroll_by(delta as f32 * SCROLL_SPEED * ratio);
    true
}

/// Up/Down arrows scroll the list under the pointer by one row
pub(crate) fn handle_key(lists: &mut [List], key: Key, pointer: (i32, i32)) -> bool {
    let direction = match key {
        Key::Up => 1.0,
        Key::Down => -1.0,
        _ => return false,
    };
    lists
        .iter_mut()
        .find(|l| l.header.contains(pointer.0, pointer.1))
        .is_some_and(|l| {
            let step = direction * l.item_spacing as f32;
            l.scroll_by(step)
        })
}

/// Select the row under the pointer
pub(crate) fn handle_item_click(lists: &mut [List], x: i32, y: i32) -> bool {
    for list in lists.iter_mut() {
        if let Some(index) = list.item_at(x, y) {
            list.selected = Some(index);
            fire(&mut list.on_select, index);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;

    /// 10 rows of 50px in a 200px viewport: total 500, max scroll 300
    fn filled_list() -> List {
        let mut list = List::new(0, 0, 300, 200);
        for i in 0..10 {
            list.add_item(format!("Item {i}"), "detail");
        }
        list
    }

    fn assert_in_bounds(list: &List) {
        assert!(list.scroll_offset() <= 0);
        assert!(list.scroll_offset() >= -list.max_scroll());
    }

    #[test]
    fn test_thumb_geometry() {
        let mut list = filled_list();
        assert_eq!(list.content_height(), 500);
        assert_eq!(list.max_scroll(), 300);
        // 200 * (200 / 500)
        assert_eq!(list.thumb_height(), 80);
        assert_eq!(list.thumb_y(), 0);

        list.scroll_by(-100.0);
        assert_eq!(list.scroll_offset(), -100);
        // 0 - (-100 * 200 / 500)
        assert_eq!(list.thumb_y(), 40);
    }

    #[test]
    fn test_content_that_fits() {
        let mut list = List::new(0, 0, 300, 200);
        list.add_item("only", "");
        assert_eq!(list.thumb_height(), 200);
        assert!(!list.scroll_by(-50.0));
        assert_eq!(list.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut list = filled_list();
        list.scroll_by(-10_000.0);
        assert_eq!(list.scroll_offset(), -300);
        list.scroll_by(10_000.0);
        assert_eq!(list.scroll_offset(), 0);
    }

    #[test]
    fn test_wheel_scroll() {
        let mut lists = vec![filled_list()];
        // delta -1 => -1 * 2 * 2.5 = -5
        assert!(handle_scroll(&mut lists, 50, 50, -1));
        assert_eq!(lists[0].scroll_offset(), -5);
        assert!(!handle_scroll(&mut lists, 500, 50, -1));
    }

    #[test]
    fn test_thumb_drag_cycle() {
        let mut backend = HeadlessBackend::new();
        let mut lists = vec![filled_list()];

        assert!(handle_thumb_grab(&mut lists, &mut backend, 295, 10));
        assert!(lists[0].is_dragging());
        assert!(backend.is_reset_inhibited());

        // 20px down moves content 50px up
        assert!(handle_thumb_drag(&mut lists, 30));
        assert_eq!(lists[0].scroll_offset(), -50);

        assert!(handle_thumb_release(&mut lists, &mut backend));
        assert!(!lists[0].is_dragging());
        assert!(!backend.is_reset_inhibited());
        assert!(!handle_thumb_drag(&mut lists, 90));
        assert!(!handle_thumb_release(&mut lists, &mut backend));
    }

    #[test]
    fn test_grab_misses_track() {
        let mut backend = HeadlessBackend::new();
        let mut lists = vec![filled_list()];
        // Thumb spans y 0..80
        assert!(!handle_thumb_grab(&mut lists, &mut backend, 295, 150));
        assert!(!handle_thumb_grab(&mut lists, &mut backend, 100, 10));
    }

    #[test]
    fn test_item_click_accounts_for_scroll() {
        let mut lists = vec![filled_list()];
        assert!(handle_item_click(&mut lists, 50, 75));
        assert_eq!(lists[0].selected(), Some(1));

        lists[0].scroll_by(-100.0);
        assert!(handle_item_click(&mut lists, 50, 75));
        assert_eq!(lists[0].selected(), Some(3));

        // Scrollbar column is not an item
        assert!(!handle_item_click(&mut lists, 295, 150));
    }

    #[test]
    fn test_arrow_keys() {
        let mut lists = vec![filled_list()];
        assert!(handle_key(&mut lists, Key::Down, (10, 10)));
        assert_eq!(lists[0].scroll_offset(), -50);
        assert!(handle_key(&mut lists, Key::Up, (10, 10)));
        assert!(!handle_key(&mut lists, Key::Up, (10, 10)));
        assert!(!handle_key(&mut lists, Key::Down, (900, 10)));
    }

    #[test]
    fn test_spacing_never_reaches_zero() {
        let mut list = filled_list();
        list.set_item_spacing(0);
        assert_eq!(list.item_spacing(), 1);
        assert_eq!(list.content_height(), 10);

        let mut lists = vec![list];
        assert!(handle_item_click(&mut lists, 5, 5));
        assert_eq!(lists[0].selected(), Some(5));

        let list = List::new(0, 0, 300, 200).with_item_spacing(-20);
        assert_eq!(list.item_spacing(), 1);
    }

    #[test]
    fn test_huge_spacing_saturates() {
        let mut list = filled_list();
        list.set_item_spacing(i32::MAX);
        assert_eq!(list.content_height(), i32::MAX);
        list.scroll_by(-1.0e12);
        assert_in_bounds(&list);

        let mut backend = HeadlessBackend::new();
        let window = backend.create_window("list", 400, 400);
        let theme = crate::theme::Theme::default();
        list.draw(&mut Painter::new(&mut backend, &theme, window));
    }

    #[test]
    fn test_thumb_width_clamped() {
        let mut list = filled_list();
        list.set_thumb_width(i32::MIN);
        assert_eq!(list.thumb_width(), 1);
        list.set_thumb_width(10_000);
        assert_eq!(list.thumb_width(), 300);
    }

    #[test]
    fn test_offset_stays_in_bounds() {
        let mut backend = HeadlessBackend::new();
        let mut lists = vec![filled_list()];
        let deltas = [-3, 7, -40, 12, -100, 100, -1, 5];

        for (step, delta) in deltas.iter().enumerate() {
            handle_scroll(&mut lists, 10, 10, *delta);
            assert_in_bounds(&lists[0]);

            let thumb_y = lists[0].thumb_y() + 1;
            if handle_thumb_grab(&mut lists, &mut backend, 295, thumb_y) {
                handle_thumb_drag(&mut lists, thumb_y + delta * (step as i32 + 1));
                assert_in_bounds(&lists[0]);
                handle_thumb_release(&mut lists, &mut backend);
            }
            lists[0].add_item("more", "");
            assert_in_bounds(&lists[0]);
        }
    }
}
