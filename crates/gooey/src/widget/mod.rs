//! Widget model
//!
//! Every concrete widget embeds one [`WidgetHeader`] carrying its kind and
//! geometry. Widgets are owned by their [`Window`](crate::Window) in one pool
//! per kind; callers hold typed [`Handle`]s into those pools, and the window
//! keeps an insertion-ordered registry of [`WidgetRef`]s for generic
//! hit-testing. Pools are append-only: a handle stays valid for the lifetime
//! of the window.

use std::marker::PhantomData;

use crate::backend::{Painter, WindowId};

mod button;
mod canvas;
mod checkbox;
mod dropdown;
mod label;
pub mod list;
pub mod menu;
pub mod plot;
mod radio;
mod slider;
mod textbox;

pub use button::Button;
pub use canvas::{Canvas, CanvasCommand};
pub use checkbox::Checkbox;
pub use dropdown::Dropdown;
pub use label::Label;
pub use list::{List, ListItem};
pub use menu::{Menu, MenuChild, MenuChildId, MenuElement};
pub use plot::{Plot, PlotData, PlotKind};
pub use radio::{RadioButton, RadioGroup};
pub use slider::Slider;
pub use textbox::Textbox;

pub(crate) use button::{handle_click as handle_button_click, handle_hover as handle_button_hover};
pub(crate) use checkbox::handle_click as handle_checkbox_click;
pub(crate) use dropdown::handle_click as handle_dropdown_click;
pub(crate) use radio::{handle_click as handle_radio_click, handle_group_click};
pub(crate) use slider::{handle_drag as handle_slider_drag, handle_key as handle_slider_key};
pub(crate) use textbox::{handle_click as handle_textbox_click, handle_key as handle_textbox_key};

/// Maximum number of widgets of one kind per window
pub const MAX_WIDGETS: usize = 100;

/// Maximum number of plots per window
pub const MAX_PLOT_COUNT: usize = 8;

/// Widget type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Label,
    Slider,
    RadioButton,
    Checkbox,
    Button,
    Textbox,
    Dropdown,
    Layout,
    List,
    Canvas,
    Plot,
    Menu,
}

/// Kind and geometry shared by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetHeader {
    /// Type tag
    pub kind: WidgetKind,
    /// Left edge in window pixels
    pub x: i32,
    /// Top edge in window pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl WidgetHeader {
    /// Create a header
    #[must_use]
    pub const fn new(kind: WidgetKind, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
        }
    }

    /// Whether a point lies inside the rectangle (edges inclusive)
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Behavior shared by all pooled widgets
pub trait Widget: Sized {
    /// Type tag of this widget
    const KIND: WidgetKind;

    /// Pool capacity per window
    const CAPACITY: usize = MAX_WIDGETS;

    /// Registry entry for the widget stored at `index`
    fn slot(index: usize) -> WidgetRef;

    fn header(&self) -> &WidgetHeader;

    fn header_mut(&mut self) -> &mut WidgetHeader;

    /// Paint the widget
    fn draw(&self, painter: &mut Painter<'_>);
}

/// Typed index of a widget inside its window's pool
///
/// A handle remembers the window that issued it; lookups through any other
/// window fail.
pub struct Handle<T> {
    window: WindowId,
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) const fn new(window: WindowId, index: usize) -> Self {
        Self {
            window,
            index,
            _marker: PhantomData,
        }
    }

    /// Window owning the widget
    #[must_use]
    pub const fn window(self) -> WindowId {
        self.window
    }

    /// Position in the pool
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.window == other.window && self.index == other.index
    }
}

impl<T> Eq for Handle<T> {}

impl<T> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Handle<{}>({:?}, {})",
            std::any::type_name::<T>(),
            self.window,
            self.index
        )
    }
}

/// Untyped reference to a widget in any pool
///
/// Unlike [`Handle`], a `WidgetRef` carries no window; it is only meaningful
/// for the window it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetRef {
    Label(usize),
    Slider(usize),
    RadioButton(usize),
    RadioGroup(usize),
    Checkbox(usize),
    Button(usize),
    Textbox(usize),
    Dropdown(usize),
    Layout(usize),
    List(usize),
    Canvas(usize),
    Plot(usize),
}

impl WidgetRef {
    /// Type tag of the referenced widget
    #[must_use]
    pub fn kind(self) -> WidgetKind {
        match self {
            Self::Label(_) => WidgetKind::Label,
            Self::Slider(_) => WidgetKind::Slider,
            Self::RadioButton(_) | Self::RadioGroup(_) => WidgetKind::RadioButton,
            Self::Checkbox(_) => WidgetKind::Checkbox,
            Self::Button(_) => WidgetKind::Button,
            Self::Textbox(_) => WidgetKind::Textbox,
            Self::Dropdown(_) => WidgetKind::Dropdown,
            Self::Layout(_) => WidgetKind::Layout,
            Self::List(_) => WidgetKind::List,
            Self::Canvas(_) => WidgetKind::Canvas,
            Self::Plot(_) => WidgetKind::Plot,
        }
    }
}

impl<T: Widget> From<Handle<T>> for WidgetRef {
    fn from(handle: Handle<T>) -> Self {
        T::slot(handle.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: WindowId = WindowId::new(1);

    #[test]
    fn test_header_contains() {
        let header = WidgetHeader::new(WidgetKind::Button, 10, 20, 100, 30);
        assert!(header.contains(10, 20));
        assert!(header.contains(110, 50));
        assert!(header.contains(60, 35));
        assert!(!header.contains(9, 35));
        assert!(!header.contains(60, 51));
    }

    #[test]
    fn test_handle_into_ref() {
        let handle: Handle<Button> = Handle::new(WINDOW, 4);
        assert_eq!(WidgetRef::from(handle), WidgetRef::Button(4));
        assert_eq!(WidgetRef::from(handle).kind(), WidgetKind::Button);

        let group: Handle<RadioGroup> = Handle::new(WINDOW, 0);
        assert_eq!(WidgetRef::from(group).kind(), WidgetKind::RadioButton);
    }

    #[test]
    fn test_handle_is_copy_and_debug() {
        let a: Handle<Label> = Handle::new(WINDOW, 2);
        let b = a;
        assert_eq!(a, b);
        assert!(format!("{a:?}").contains("Label"));
    }

    #[test]
    fn test_handles_from_different_windows_differ() {
        let a: Handle<Label> = Handle::new(WINDOW, 0);
        let b: Handle<Label> = Handle::new(WindowId::new(2), 0);
        assert_ne!(a, b);
        assert_eq!(b.window(), WindowId::new(2));
        assert_eq!(WidgetRef::from(a), WidgetRef::from(b));
    }
}
