//! Windows and the widgets they own
//!
//! A [`Window`] owns one pool per widget kind plus an insertion-ordered
//! registry of every widget it holds. Adding a widget pushes it onto its pool
//! and appends its [`WidgetRef`] to the registry in the same call, so the two
//! always agree. Pools never shrink.

use std::cell::Cell;
use std::rc::Rc;

use crate::backend::{Backend, CursorShape, Painter, WindowId};
use crate::callback::{fire, Callback};
use crate::error::{GooeyError, GooeyResult};
use crate::layout::{Arranger, Layout, LayoutChild, LayoutKind, MAX_LAYOUT_DEPTH};
use crate::theme::Theme;
use crate::widget::menu::MenuChildId;
use crate::widget::{
    Button, Canvas, Checkbox, Dropdown, Handle, Label, List, Menu, Plot, PlotData, PlotKind, RadioButton,
    RadioGroup, Slider, Textbox, Widget, WidgetHeader, WidgetKind, WidgetRef,
};

/// Window role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowKind {
    /// Application window
    #[default]
    Regular,
    /// Child window spawned for a message box
    MessageBox,
}

/// Widgets stored in a window pool
pub trait Pooled: Widget {
    #[doc(hidden)]
    fn pool(window: &Window) -> &[Self];

    #[doc(hidden)]
    fn pool_mut(window: &mut Window) -> &mut Vec<Self>;
}

macro_rules! pooled {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl Pooled for $ty {
                fn pool(window: &Window) -> &[Self] {
                    &window.$field
                }

                fn pool_mut(window: &mut Window) -> &mut Vec<Self> {
                    &mut window.$field
                }
            }
        )*
    };
}

pooled! {
    Label => labels,
    Slider => sliders,
    RadioButton => radio_buttons,
    RadioGroup => radio_groups,
    Checkbox => checkboxes,
    Button => buttons,
    Textbox => textboxes,
    Dropdown => dropdowns,
    Layout => layouts,
    List => lists,
    Canvas => canvases,
    Plot => plots,
}

/// A backend window and the widgets drawn in it
#[derive(Debug)]
pub struct Window {
    id: WindowId,
    title: String,
    width: i32,
    height: i32,
    kind: WindowKind,
    visible: bool,
    resizable: bool,
    pub(crate) labels: Vec<Label>,
    pub(crate) sliders: Vec<Slider>,
    pub(crate) radio_buttons: Vec<RadioButton>,
    pub(crate) radio_groups: Vec<RadioGroup>,
    pub(crate) checkboxes: Vec<Checkbox>,
    pub(crate) buttons: Vec<Button>,
    pub(crate) textboxes: Vec<Textbox>,
    pub(crate) dropdowns: Vec<Dropdown>,
    pub(crate) layouts: Vec<Layout>,
    pub(crate) lists: Vec<List>,
    pub(crate) canvases: Vec<Canvas>,
    pub(crate) plots: Vec<Plot>,
    pub(crate) menu: Option<Menu>,
    widgets: Vec<WidgetRef>,
    pub(crate) pointer: (i32, i32),
    cursor: CursorShape,
    dismiss_requested: Option<Rc<Cell<bool>>>,
    on_dismiss: Option<Callback<()>>,
}

impl Window {
    /// Open a top-level window
    pub fn create(backend: &mut dyn Backend, title: &str, width: i32, height: i32, visible: bool) -> GooeyResult<Self> {
        Self::validate_size(title, width, height)?;
        let id = backend.create_window(title, width, height);
        if !visible {
            backend.set_window_visible(id, false);
        }
        log::debug!("Created window '{title}' ({width}x{height}) as {id:?}");
        Ok(Self::empty(id, title, width, height, WindowKind::Regular, visible))
    }

    /// Open an owned child window (dialogs, message boxes)
    pub fn create_child(
        backend: &mut dyn Backend,
        title: &str,
        width: i32,
        height: i32,
        visible: bool,
    ) -> GooeyResult<Self> {
        Self::validate_size(title, width, height)?;
        let id = backend.spawn_window(title, width, height, visible);
        log::debug!("Spawned child window '{title}' ({width}x{height}) as {id:?}");
        Ok(Self::empty(id, title, width, height, WindowKind::Regular, visible))
    }

    fn validate_size(title: &str, width: i32, height: i32) -> GooeyResult<()> {
        if width <= 0 || height <= 0 {
            log::error!("Window '{title}' has invalid size {width}x{height}");
            return Err(GooeyError::WindowCreation(format!(
                "window '{title}' must have a positive size, got {width}x{height}"
            )));
        }
        Ok(())
    }

    fn empty(id: WindowId, title: &str, width: i32, height: i32, kind: WindowKind, visible: bool) -> Self {
        Self {
            id,
            title: title.to_string(),
            width,
            height,
            kind,
            visible,
            resizable: false,
            labels: Vec::new(),
            sliders: Vec::new(),
            radio_buttons: Vec::new(),
            radio_groups: Vec::new(),
            checkboxes: Vec::new(),
            buttons: Vec::new(),
            textboxes: Vec::new(),
            dropdowns: Vec::new(),
            layouts: Vec::new(),
            lists: Vec::new(),
            canvases: Vec::new(),
            plots: Vec::new(),
            menu: None,
            widgets: Vec::new(),
            pointer: (0, 0),
            cursor: CursorShape::Arrow,
            dismiss_requested: None,
            on_dismiss: None,
        }
    }

    /// Backend id used to route events
    #[must_use]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Size as `(width, height)`
    #[must_use]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    /// Last pointer shape requested from the backend
    #[must_use]
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Last known pointer position
    #[must_use]
    pub fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    /// Show or hide the window
    pub fn make_visible(&mut self, backend: &mut dyn Backend, visible: bool) {
        self.visible = visible;
        backend.set_window_visible(self.id, visible);
    }

    /// Allow or forbid user resizing
    pub fn make_resizable(&mut self, backend: &mut dyn Backend, resizable: bool) {
        self.resizable = resizable;
        backend.set_window_resizable(self.id, resizable);
    }

    // Widget storage

    /// Store a widget and register it
    pub fn add<T: Pooled>(&mut self, widget: T) -> GooeyResult<Handle<T>> {
        let pool = T::pool_mut(self);
        if pool.len() >= T::CAPACITY {
            log::warn!("{:?} pool is full ({} widgets)", T::KIND, T::CAPACITY);
            return Err(GooeyError::CapacityExceeded {
                kind: T::KIND,
                capacity: T::CAPACITY,
            });
        }
        pool.push(widget);
        let index = pool.len() - 1;
        self.widgets.push(T::slot(index));
        Ok(Handle::new(self.id, index))
    }

    /// Whether `handle` was issued by this window
    #[must_use]
    pub fn owns<T>(&self, handle: Handle<T>) -> bool {
        handle.window() == self.id
    }

    /// Borrow a widget; `None` for handles of other windows
    #[must_use]
    pub fn get<T: Pooled>(&self, handle: Handle<T>) -> Option<&T> {
        if !self.owns(handle) {
            return None;
        }
        T::pool(self).get(handle.index())
    }

    /// Mutably borrow a widget; `None` for handles of other windows
    pub fn get_mut<T: Pooled>(&mut self, handle: Handle<T>) -> Option<&mut T> {
        if !self.owns(handle) {
            return None;
        }
        T::pool_mut(self).get_mut(handle.index())
    }

    fn require<T: Pooled>(&mut self, handle: Handle<T>) -> GooeyResult<&mut T> {
        if !self.owns(handle) {
            log::warn!("{handle:?} belongs to another window than '{}'", self.title);
            return Err(GooeyError::InvalidHandle(T::KIND));
        }
        T::pool_mut(self).get_mut(handle.index()).ok_or_else(|| {
            log::warn!("Stale {:?} handle {}", T::KIND, handle.index());
            GooeyError::InvalidHandle(T::KIND)
        })
    }

    /// Every widget of one kind, in insertion order
    #[must_use]
    pub fn pool<T: Pooled>(&self) -> &[T] {
        T::pool(self)
    }

    /// Every registered widget, in insertion order
    #[must_use]
    pub fn registry(&self) -> &[WidgetRef] {
        &self.widgets
    }

    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Geometry of any registered widget
    #[must_use]
    pub fn header(&self, widget: WidgetRef) -> Option<&WidgetHeader> {
        match widget {
            WidgetRef::Label(i) => self.labels.get(i).map(Widget::header),
            WidgetRef::Slider(i) => self.sliders.get(i).map(Widget::header),
            WidgetRef::RadioButton(i) => self.radio_buttons.get(i).map(Widget::header),
            WidgetRef::RadioGroup(i) => self.radio_groups.get(i).map(Widget::header),
            WidgetRef::Checkbox(i) => self.checkboxes.get(i).map(Widget::header),
            WidgetRef::Button(i) => self.buttons.get(i).map(Widget::header),
            WidgetRef::Textbox(i) => self.textboxes.get(i).map(Widget::header),
            WidgetRef::Dropdown(i) => self.dropdowns.get(i).map(Widget::header),
            WidgetRef::Layout(i) => self.layouts.get(i).map(Widget::header),
            WidgetRef::List(i) => self.lists.get(i).map(Widget::header),
            WidgetRef::Canvas(i) => self.canvases.get(i).map(Widget::header),
            WidgetRef::Plot(i) => self.plots.get(i).map(Widget::header),
        }
    }

    /// Mutable geometry of any registered widget
    pub fn header_mut(&mut self, widget: WidgetRef) -> Option<&mut WidgetHeader> {
        match widget {
            WidgetRef::Label(i) => self.labels.get_mut(i).map(Widget::header_mut),
            WidgetRef::Slider(i) => self.sliders.get_mut(i).map(Widget::header_mut),
            WidgetRef::RadioButton(i) => self.radio_buttons.get_mut(i).map(Widget::header_mut),
            WidgetRef::RadioGroup(i) => self.radio_groups.get_mut(i).map(Widget::header_mut),
            WidgetRef::Checkbox(i) => self.checkboxes.get_mut(i).map(Widget::header_mut),
            WidgetRef::Button(i) => self.buttons.get_mut(i).map(Widget::header_mut),
            WidgetRef::Textbox(i) => self.textboxes.get_mut(i).map(Widget::header_mut),
            WidgetRef::Dropdown(i) => self.dropdowns.get_mut(i).map(Widget::header_mut),
            WidgetRef::Layout(i) => self.layouts.get_mut(i).map(Widget::header_mut),
            WidgetRef::List(i) => self.lists.get_mut(i).map(Widget::header_mut),
            WidgetRef::Canvas(i) => self.canvases.get_mut(i).map(Widget::header_mut),
            WidgetRef::Plot(i) => self.plots.get_mut(i).map(Widget::header_mut),
        }
    }

    /// Topmost visible widget under the pointer (latest added wins)
    #[must_use]
    pub fn widget_at(&self, x: i32, y: i32) -> Option<WidgetRef> {
        self.widgets
            .iter()
            .rev()
            .copied()
            .filter(|w| w.kind() != WidgetKind::Layout)
            .find(|&w| self.header(w).is_some_and(|h| h.contains(x, y)))
    }

    /// Pointer shape for the widget under `(x, y)`
    #[must_use]
    pub fn cursor_at(&self, x: i32, y: i32) -> CursorShape {
        match self.widget_at(x, y).map(WidgetRef::kind) {
            Some(WidgetKind::Textbox) => CursorShape::IBeam,
            Some(
                WidgetKind::Button
                | WidgetKind::Checkbox
                | WidgetKind::RadioButton
                | WidgetKind::Dropdown
                | WidgetKind::Slider
                | WidgetKind::List,
            ) => CursorShape::Hand,
            _ => CursorShape::Arrow,
        }
    }

    /// Track the pointer and update the backend cursor when its shape changes
    pub(crate) fn track_pointer(&mut self, backend: &mut dyn Backend, x: i32, y: i32) {
        self.pointer = (x, y);
        let shape = self.cursor_at(x, y);
        if shape != self.cursor {
            self.cursor = shape;
            backend.set_cursor(self.id, shape);
        }
    }

    // Per-kind constructors

    pub fn add_label(&mut self, x: i32, y: i32, text: impl Into<String>) -> GooeyResult<Handle<Label>> {
        self.add(Label::new(x, y, text))
    }

    pub fn add_button(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        label: impl Into<String>,
        on_click: impl FnMut(()) + 'static,
    ) -> GooeyResult<Handle<Button>> {
        self.add(Button::new(x, y, width, height, label).on_click(on_click))
    }

    pub fn add_checkbox(
        &mut self,
        x: i32,
        y: i32,
        label: impl Into<String>,
        on_toggle: impl FnMut(bool) + 'static,
    ) -> GooeyResult<Handle<Checkbox>> {
        self.add(Checkbox::new(x, y, label).on_toggle(on_toggle))
    }

    pub fn add_radio_button(
        &mut self,
        x: i32,
        y: i32,
        label: impl Into<String>,
        on_select: impl FnMut(bool) + 'static,
    ) -> GooeyResult<Handle<RadioButton>> {
        self.add(RadioButton::new(x, y, label).on_select(on_select))
    }

    pub fn add_radio_group(&mut self) -> GooeyResult<Handle<RadioGroup>> {
        self.add(RadioGroup::new())
    }

    /// Append a member to a radio group, returning its position in the group
    pub fn radio_group_add(&mut self, group: Handle<RadioGroup>, button: RadioButton) -> GooeyResult<usize> {
        self.require(group)?.add_button(button)
    }

    /// Add a slider; `max <= min` is rejected
    pub fn add_slider(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        min: i64,
        max: i64,
        show_hints: bool,
        on_change: impl FnMut(i64) + 'static,
    ) -> GooeyResult<Handle<Slider>> {
        let slider = Slider::new(x, y, width, min, max, show_hints)?;
        self.add(slider.on_change(on_change))
    }

    pub fn add_dropdown<S: Into<String>>(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        options: impl IntoIterator<Item = S>,
        on_select: impl FnMut(usize) + 'static,
    ) -> GooeyResult<Handle<Dropdown>> {
        let dropdown = Dropdown::new(x, y, width, height, options)?;
        self.add(dropdown.on_select(on_select))
    }

    pub fn add_textbox(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        placeholder: impl Into<String>,
        on_change: impl FnMut(String) + 'static,
    ) -> GooeyResult<Handle<Textbox>> {
        self.add(Textbox::new(x, y, width, height, placeholder).on_change(on_change))
    }

    pub fn add_canvas(&mut self, x: i32, y: i32, width: i32, height: i32) -> GooeyResult<Handle<Canvas>> {
        self.add(Canvas::new(x, y, width, height))
    }

    pub fn add_list(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        on_item_selected: impl FnMut(usize) + 'static,
    ) -> GooeyResult<Handle<List>> {
        self.add(List::new(x, y, width, height).on_select(on_item_selected))
    }

    /// Append an item to a list
    pub fn list_add_item(
        &mut self,
        list: Handle<List>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> GooeyResult<()> {
        self.require(list)?.add_item(title, description);
        Ok(())
    }

    /// Add a plot; its data is normalized before storage
    pub fn add_plot(
        &mut self,
        kind: PlotKind,
        data: PlotData,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> GooeyResult<Handle<Plot>> {
        if self.plots.len() >= Plot::CAPACITY {
            log::warn!("Plot pool is full ({} plots)", Plot::CAPACITY);
            return Err(GooeyError::CapacityExceeded {
                kind: WidgetKind::Plot,
                capacity: Plot::CAPACITY,
            });
        }
        let plot = Plot::new(kind, data, x, y, width, height).map_err(|e| {
            log::warn!("Rejected plot data: {e}");
            e
        })?;
        self.add(plot)
    }

    /// Replace a plot's data
    pub fn update_plot(&mut self, plot: Handle<Plot>, data: PlotData) -> GooeyResult<()> {
        self.require(plot)?.update(data).map_err(|e| {
            log::warn!("Rejected plot update: {e}");
            e
        })
    }

    // Layouts

    pub fn create_layout(
        &mut self,
        kind: LayoutKind,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> GooeyResult<Handle<Layout>> {
        self.add(Layout::new(kind, x, y, width, height))
    }

    /// Append a child to a layout
    pub fn layout_add_child(&mut self, layout: Handle<Layout>, child: impl LayoutChild) -> GooeyResult<()> {
        if child.owner().is_some_and(|owner| owner != self.id) {
            log::warn!("Layout child {:?} belongs to another window", child.widget_ref());
            return Err(GooeyError::InvalidHandle(child.widget_ref().kind()));
        }
        let child = child.widget_ref();
        if self.header(child).is_none() {
            log::warn!("Layout child {child:?} does not exist");
            return Err(GooeyError::InvalidHandle(child.kind()));
        }
        if child == WidgetRef::Layout(layout.index()) {
            log::warn!("Layout {} cannot contain itself", layout.index());
            return Err(GooeyError::InvalidArgument("a layout cannot contain itself".to_string()));
        }
        let target = self.require(layout)?;
        if target.children().len() >= MAX_WIDGETS_PER_LAYOUT {
            log::warn!("Layout {} is full", layout.index());
            return Err(GooeyError::CapacityExceeded {
                kind: WidgetKind::Layout,
                capacity: MAX_WIDGETS_PER_LAYOUT,
            });
        }
        target.push_child(child);
        Ok(())
    }

    /// Position the children of a layout, recursing into nested layouts
    pub fn build_layout(&mut self, layout: Handle<Layout>) -> GooeyResult<()> {
        let Some(root) = self.get(layout) else {
            log::warn!("Stale layout handle {}", layout.index());
            return Err(GooeyError::InvalidHandle(WidgetKind::Layout));
        };
        if root.children().is_empty() {
            log::warn!("Layout {} has no children to build", layout.index());
            return Err(GooeyError::EmptyLayout);
        }
        self.build_layout_at(layout.index(), 0)?;
        log::debug!("Built layout {}", layout.index());
        Ok(())
    }

    fn build_layout_at(&mut self, index: usize, depth: usize) -> GooeyResult<()> {
        if depth >= MAX_LAYOUT_DEPTH {
            log::error!("Layout nesting exceeds {MAX_LAYOUT_DEPTH} levels");
            return Err(GooeyError::LayoutDepth(MAX_LAYOUT_DEPTH));
        }
        let Some(layout) = self.layouts.get(index) else {
            return Err(GooeyError::InvalidHandle(WidgetKind::Layout));
        };
        let children = layout.children().to_vec();
        let mut arranger = Arranger::new(layout);

        for child in children {
            if let Some(header) = self.header_mut(child) {
                arranger.place(header);
            }
            if let WidgetRef::Layout(nested) = child {
                if self.layouts.get(nested).is_some_and(|l| !l.children().is_empty()) {
                    self.build_layout_at(nested, depth + 1)?;
                }
            }
        }
        Ok(())
    }

    // Menu

    /// Give the window an empty menu bar, replacing any previous one
    pub fn set_menu(&mut self) {
        self.menu = Some(Menu::new(self.width));
    }

    #[must_use]
    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    fn require_menu(&mut self) -> GooeyResult<&mut Menu> {
        self.menu.as_mut().ok_or_else(|| {
            log::warn!("Window '{}' has no menu", self.title);
            GooeyError::InvalidHandle(WidgetKind::Menu)
        })
    }

    /// Append a top-bar entry
    pub fn menu_add_child(&mut self, title: impl Into<String>) -> GooeyResult<MenuChildId> {
        self.require_menu()?.add_child(title)
    }

    /// Append a row under a top-bar entry
    pub fn menu_add_element(
        &mut self,
        child: MenuChildId,
        title: impl Into<String>,
        on_click: impl FnMut(()) + 'static,
    ) -> GooeyResult<()> {
        self.require_menu()?.add_element(child, title, on_click)
    }

    // Message boxes

    pub(crate) fn arm_dismissal(&mut self, requested: Rc<Cell<bool>>, on_dismiss: Callback<()>) {
        self.kind = WindowKind::MessageBox;
        self.dismiss_requested = Some(requested);
        self.on_dismiss = Some(on_dismiss);
    }

    /// Show a hidden message box
    pub fn show(&mut self, backend: &mut dyn Backend) {
        self.make_visible(backend, true);
    }

    /// Hide the window and notify if its OK button was pressed
    pub(crate) fn settle_dismissal(&mut self, backend: &mut dyn Backend) -> bool {
        let requested = self.dismiss_requested.as_ref().is_some_and(|flag| flag.replace(false));
        if !requested {
            return false;
        }
        log::debug!("Message box '{}' dismissed", self.title);
        self.make_visible(backend, false);
        fire(&mut self.on_dismiss, ());
        true
    }

    // Drawing

    /// Paint every widget and present the frame
    pub fn redraw(&mut self, backend: &mut dyn Backend, theme: &Theme) {
        for list in &mut self.lists {
            list.update_scrollbar();
        }

        backend.clear(self.id);
        let mut painter = Painter::new(backend, theme, self.id);
        draw_all(&self.canvases, &mut painter);
        draw_all(&self.labels, &mut painter);
        draw_all(&self.checkboxes, &mut painter);
        draw_all(&self.radio_buttons, &mut painter);
        draw_all(&self.radio_groups, &mut painter);
        draw_all(&self.sliders, &mut painter);
        draw_all(&self.buttons, &mut painter);
        draw_all(&self.textboxes, &mut painter);
        draw_all(&self.lists, &mut painter);
        draw_all(&self.plots, &mut painter);
        draw_all(&self.dropdowns, &mut painter);
        if let Some(menu) = &self.menu {
            menu.draw(&mut painter);
        }
        backend.render(self.id);
    }
}

/// Maximum number of children per layout
const MAX_WIDGETS_PER_LAYOUT: usize = crate::widget::MAX_WIDGETS;

fn draw_all<T: Widget>(widgets: &[T], painter: &mut Painter<'_>) {
    for widget in widgets {
        widget.draw(painter);
    }
}
