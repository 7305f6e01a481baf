//! Window menu bar with one level of drop-down rows

use super::{WidgetHeader, WidgetKind};
use crate::backend::{Backend, Painter, DEFAULT_FONT_SIZE};
use crate::callback::{fire, Callback};
use crate::error::{GooeyError, GooeyResult};

/// Maximum number of top-bar entries
pub const MAX_MENU_CHILDREN: usize = 10;

/// Maximum number of rows under one entry
pub const MAX_MENU_ELEMENTS: usize = 10;

/// Height of the bar and of every drop-down row
pub const MENU_HEIGHT: i32 = 20;

/// Horizontal padding added around each entry title
const PADDING: i32 = 20;

/// Minimum width of a drop-down column
const MIN_DROPDOWN_WIDTH: i32 = 150;

/// Index of a top-bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuChildId(usize);

impl MenuChildId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One clickable row of a drop-down
#[derive(Debug)]
pub struct MenuElement {
    pub title: String,
    pub(crate) on_click: Option<Callback<()>>,
}

/// A top-bar entry and its rows
#[derive(Debug)]
pub struct MenuChild {
    pub title: String,
    pub elements: Vec<MenuElement>,
    /// Whether the rows are shown
    pub is_open: bool,
}

/// Outcome of a press evaluated against the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClick {
    /// Menu was closed and the press missed it
    Ignored,
    /// Press missed the menu but closed an open entry
    Closed,
    /// Press landed on the bar or on a row
    Hit,
}

impl MenuClick {
    /// Whether the window needs a redraw
    #[must_use]
    pub fn changed(self) -> bool {
        self != Self::Ignored
    }
}

/// Horizontal extent of one bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x: i32,
    pub width: i32,
}

/// Menu bar spanning the top of its window
#[derive(Debug)]
pub struct Menu {
    pub(crate) header: WidgetHeader,
    children: Vec<MenuChild>,
}

impl Menu {
    /// Create an empty bar as wide as the window
    #[must_use]
    pub fn new(window_width: i32) -> Self {
        Self {
            header: WidgetHeader::new(WidgetKind::Menu, 0, 0, window_width, MENU_HEIGHT),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn header(&self) -> &WidgetHeader {
        &self.header
    }

    #[must_use]
    pub fn children(&self) -> &[MenuChild] {
        &self.children
    }

    /// Append a top-bar entry
    pub fn add_child(&mut self, title: impl Into<String>) -> GooeyResult<MenuChildId> {
        if self.children.len() >= MAX_MENU_CHILDREN {
            log::warn!("Menu already has {MAX_MENU_CHILDREN} entries");
            return Err(GooeyError::CapacityExceeded {
                kind: WidgetKind::Menu,
                capacity: MAX_MENU_CHILDREN,
            });
        }
        self.children.push(MenuChild {
            title: title.into(),
            elements: Vec::new(),
            is_open: false,
        });
        Ok(MenuChildId(self.children.len() - 1))
    }

    /// Append a row under `child`
    pub fn add_element(
        &mut self,
        child: MenuChildId,
        title: impl Into<String>,
        on_click: impl FnMut(()) + 'static,
    ) -> GooeyResult<()> {
        let entry = self
            .children
            .get_mut(child.0)
            .ok_or(GooeyError::InvalidHandle(WidgetKind::Menu))?;
        if entry.elements.len() >= MAX_MENU_ELEMENTS {
            log::warn!("Menu entry '{}' already has {MAX_MENU_ELEMENTS} rows", entry.title);
            return Err(GooeyError::CapacityExceeded {
                kind: WidgetKind::Menu,
                capacity: MAX_MENU_ELEMENTS,
            });
        }
        entry.elements.push(MenuElement {
            title: title.into(),
            on_click: Some(Callback::new(on_click)),
        });
        Ok(())
    }

    /// Close every entry; returns whether any was open
    pub fn close_all(&mut self) -> bool {
        let mut was_open = false;
        for child in &mut self.children {
            was_open |= child.is_open;
            child.is_open = false;
        }
        was_open
    }

    /// Bar extents of every entry, left to right
    pub fn spans(&self, measure: impl Fn(&str) -> f32) -> Vec<Span> {
        let mut cursor = 0;
        self.children
            .iter()
            .map(|child| {
                let width = measure(&child.title) as i32 + PADDING;
                let span = Span { x: cursor, width };
                cursor += width;
                span
            })
            .collect()
    }

    fn dropdown_width(child: &MenuChild, measure: &impl Fn(&str) -> f32) -> i32 {
        child
            .elements
            .iter()
            .map(|e| measure(&e.title) as i32 + PADDING)
            .fold(MIN_DROPDOWN_WIDTH, i32::max)
    }

    /// Evaluate a press at `(x, y)`
    pub fn handle_click(&mut self, backend: &dyn Backend, x: i32, y: i32) -> MenuClick {
        let measure = |text: &str| backend.text_width(text);
        let spans = self.spans(measure);

        if (0..=MENU_HEIGHT).contains(&y) {
            if let Some(hit) = spans.iter().position(|s| x >= s.x && x < s.x + s.width) {
                for (i, child) in self.children.iter_mut().enumerate() {
                    child.is_open = if i == hit { !child.is_open } else { false };
                }
                return MenuClick::Hit;
            }
        }

        let Some(open) = self.children.iter().position(|c| c.is_open) else {
            return MenuClick::Ignored;
        };
        let span = spans[open];
        let width = Self::dropdown_width(&self.children[open], &measure);
        let rows = self.children[open].elements.len() as i32;
        let top = MENU_HEIGHT;

        if x >= span.x && x < span.x + width && y >= top && y < top + rows * MENU_HEIGHT {
            let row = ((y - top) / MENU_HEIGHT) as usize;
            self.close_all();
            if let Some(element) = self.children[open].elements.get_mut(row) {
                log::debug!("Menu row '{}' activated", element.title);
                fire(&mut element.on_click, ());
            }
            return MenuClick::Hit;
        }

        self.close_all();
        MenuClick::Closed
    }

    /// Paint the bar and the open drop-down, if any
    pub fn draw(&self, painter: &mut Painter<'_>) {
        let theme = *painter.theme();
        let h = self.header;
        let spans = self.spans(|text| painter.text_width(text));
        let text_offset = (MENU_HEIGHT + painter.text_height("A") as i32) / 2;

        painter.fill_rect(h.x, h.y, h.width, MENU_HEIGHT, theme.widget_base);
        painter.draw_line(h.x, MENU_HEIGHT, h.x + h.width, MENU_HEIGHT, theme.neutral);

        for (child, span) in self.children.iter().zip(&spans) {
            if child.is_open {
                painter.fill_rect(span.x, 0, span.width, MENU_HEIGHT, theme.primary);
            }
            painter.draw_text(span.x + PADDING / 2, text_offset, &child.title, theme.neutral, DEFAULT_FONT_SIZE);
        }

        let Some((child, span)) = self.children.iter().zip(&spans).find(|(c, _)| c.is_open) else {
            return;
        };
        let width = Self::dropdown_width(child, &|text: &str| painter.text_width(text));
        for (i, element) in child.elements.iter().enumerate() {
            let row_y = MENU_HEIGHT * (i as i32 + 1);
            painter.fill_rect(span.x, row_y, width, MENU_HEIGHT, theme.base);
            painter.draw_rect(span.x, row_y, width, MENU_HEIGHT, theme.widget_base);
            painter.draw_text(span.x + PADDING / 2, row_y + text_offset, &element.title, theme.neutral, DEFAULT_FONT_SIZE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{HeadlessBackend, CHAR_WIDTH};
    use std::cell::Cell;
    use std::rc::Rc;

    fn menu_with_rows(counter: &Rc<Cell<u32>>) -> Menu {
        let mut menu = Menu::new(640);
        let file = menu.add_child("File").unwrap();
        menu.add_child("Help").unwrap();
        let sink = Rc::clone(counter);
        menu.add_element(file, "Open", move |()| sink.set(sink.get() + 1)).unwrap();
        menu.add_element(file, "Quit", |()| {}).unwrap();
        menu
    }

    #[test]
    fn test_spans_follow_text_width() {
        let menu = menu_with_rows(&Rc::new(Cell::new(0)));
        let backend = HeadlessBackend::new();
        let spans = menu.spans(|t| backend.text_width(t));

        let file_width = (4.0 * CHAR_WIDTH) as i32 + 20;
        assert_eq!(spans[0], Span { x: 0, width: file_width });
        assert_eq!(spans[1].x, file_width);
    }

    #[test]
    fn test_toggle_and_activate() {
        let counter = Rc::new(Cell::new(0));
        let mut menu = menu_with_rows(&counter);
        let backend = HeadlessBackend::new();

        assert_eq!(menu.handle_click(&backend, 5, 10), MenuClick::Hit);
        assert!(menu.children()[0].is_open);

        // Opening a sibling closes the first entry
        let help_x = menu.spans(|t| backend.text_width(t))[1].x + 2;
        assert_eq!(menu.handle_click(&backend, help_x, 10), MenuClick::Hit);
        assert!(!menu.children()[0].is_open);
        assert!(menu.children()[1].is_open);

        // Reopen File and pick its first row
        menu.handle_click(&backend, 5, 10);
        assert_eq!(menu.handle_click(&backend, 10, 30), MenuClick::Hit);
        assert_eq!(counter.get(), 1);
        assert!(menu.children().iter().all(|c| !c.is_open));
    }

    #[test]
    fn test_click_elsewhere_closes() {
        let counter = Rc::new(Cell::new(0));
        let mut menu = menu_with_rows(&counter);
        let backend = HeadlessBackend::new();

        assert_eq!(menu.handle_click(&backend, 300, 300), MenuClick::Ignored);
        menu.handle_click(&backend, 5, 10);
        assert_eq!(menu.handle_click(&backend, 300, 300), MenuClick::Closed);
        assert!(!menu.children()[0].is_open);
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_capacities() {
        let mut menu = Menu::new(100);
        for i in 0..MAX_MENU_CHILDREN {
            menu.add_child(i.to_string()).unwrap();
        }
        assert!(matches!(
            menu.add_child("extra"),
            Err(GooeyError::CapacityExceeded { kind: WidgetKind::Menu, .. })
        ));

        let first = MenuChildId(0);
        for i in 0..MAX_MENU_ELEMENTS {
            menu.add_element(first, i.to_string(), |()| {}).unwrap();
        }
        assert!(menu.add_element(first, "extra", |()| {}).is_err());
        assert!(matches!(
            menu.add_element(MenuChildId(42), "x", |()| {}),
            Err(GooeyError::InvalidHandle(WidgetKind::Menu))
        ));
    }
}
