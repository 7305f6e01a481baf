//! Layout engine
//!
//! A [`Layout`] is an invisible widget holding an ordered list of child
//! references. Children keep whatever geometry they were authored with until
//! [`Window::build_layout`](crate::Window::build_layout) runs, at which point
//! the engine overwrites their position (and usually their width) according
//! to the layout's [`LayoutKind`]. Nested layouts are positioned like any
//! other child and then built in turn.

use crate::backend::{Painter, WindowId};
use crate::widget::{Handle, Widget, WidgetHeader, WidgetKind, WidgetRef};

/// Fixed gap between consecutive children of vertical and horizontal layouts
pub const SPACING: i32 = 30;

/// Maximum nesting depth followed by a build
pub const MAX_LAYOUT_DEPTH: usize = 16;

/// Largest grid column count; cell math runs in `i32`
pub const MAX_GRID_COLUMNS: usize = i32::MAX as usize;

/// Placement rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    /// Children stacked top to bottom, centered horizontally
    #[default]
    Vertical,
    /// Children side by side with equal widths, centered vertically
    Horizontal,
    /// Children in row-major cells
    Grid,
}

/// Something that can be added to a layout
pub trait LayoutChild {
    /// Window that issued the reference, when it is known
    fn owner(&self) -> Option<WindowId>;

    fn widget_ref(&self) -> WidgetRef;
}

impl<T: Widget> LayoutChild for Handle<T> {
    fn owner(&self) -> Option<WindowId> {
        Some(self.window())
    }

    fn widget_ref(&self) -> WidgetRef {
        WidgetRef::from(*self)
    }
}

impl LayoutChild for WidgetRef {
    fn owner(&self) -> Option<WindowId> {
        None
    }

    fn widget_ref(&self) -> WidgetRef {
        *self
    }
}

/// Rectangle that positions its children on build
#[derive(Debug, Clone)]
pub struct Layout {
    pub(crate) header: WidgetHeader,
    /// Placement rule
    pub kind: LayoutKind,
    children: Vec<WidgetRef>,
    columns: Option<usize>,
}

impl Layout {
    /// Create an empty layout
    #[must_use]
    pub fn new(kind: LayoutKind, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            header: WidgetHeader::new(WidgetKind::Layout, x, y, width, height),
            kind,
            children: Vec::new(),
            columns: None,
        }
    }

    /// Fix the number of grid columns (ignored by other kinds)
    ///
    /// Zero restores the automatic count; larger values are capped at
    /// [`MAX_GRID_COLUMNS`].
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = (columns > 0).then_some(columns.min(MAX_GRID_COLUMNS));
        self
    }

    /// Children in insertion order
    #[must_use]
    pub fn children(&self) -> &[WidgetRef] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: WidgetRef) {
        self.children.push(child);
    }

    /// Grid columns used for `n` children
    #[must_use]
    pub fn grid_columns(&self, n: usize) -> usize {
        self.columns.unwrap_or_else(|| {
            let mut columns = 1;
            while columns * columns < n {
                columns += 1;
            }
            columns
        })
    }
}

impl Widget for Layout {
    const KIND: WidgetKind = WidgetKind::Layout;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::Layout(index)
    }

    fn header(&self) -> &WidgetHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut WidgetHeader {
        &mut self.header
    }

    fn draw(&self, _painter: &mut Painter<'_>) {}
}

/// Running placement state for one build of one layout
#[derive(Debug)]
pub(crate) struct Arranger {
    kind: LayoutKind,
    bounds: WidgetHeader,
    count: i32,
    columns: i32,
    rows: i32,
    cursor: i32,
    placed: i32,
}

impl Arranger {
    pub(crate) fn new(layout: &Layout) -> Self {
        let n = layout.children.len().max(1);
        let columns = layout.grid_columns(n).max(1);
        let rows = n.div_ceil(columns);
        let bounds = layout.header;
        let cursor = match layout.kind {
            LayoutKind::Horizontal => bounds.x,
            LayoutKind::Vertical | LayoutKind::Grid => bounds.y,
        };
        Self {
            kind: layout.kind,
            bounds,
            count: i32::try_from(n).unwrap_or(i32::MAX),
            columns: i32::try_from(columns).unwrap_or(i32::MAX),
            rows: i32::try_from(rows).unwrap_or(i32::MAX),
            cursor,
            placed: 0,
        }
    }

    /// Assign the next child's geometry
    pub(crate) fn place(&mut self, child: &mut WidgetHeader) {
        let b = self.bounds;
        let keeps_width = child.kind == WidgetKind::Checkbox;

        match self.kind {
            LayoutKind::Vertical => {
                if !keeps_width {
                    child.width = b.width;
                }
                child.x = b.x + (b.width - child.width) / 2;
                child.y = self.cursor;
                self.cursor += child.height + SPACING;
            }
            LayoutKind::Horizontal => {
                child.width = b.width / self.count;
                child.x = self.cursor;
                child.y = b.y + (b.height - child.height) / 2;
                self.cursor += child.width + SPACING;
            }
            LayoutKind::Grid => {
                let cell_width = b.width / self.columns;
                let cell_height = b.height / self.rows;
                let column = self.placed % self.columns;
                let row = self.placed / self.columns;

                if child.kind == WidgetKind::Layout {
                    child.height = cell_height;
                }
                if !keeps_width {
                    child.width = cell_width;
                }
                child.x = b.x + column * cell_width;
                child.y = b.y + row * cell_height + (cell_height - child.height) / 2;
            }
        }
        self.placed += 1;
    }
}
