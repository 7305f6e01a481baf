//! Backend abstraction
//!
//! The core never draws or reads input directly. Everything platform-specific
//! goes through [`Backend`]: window creation, drawing primitives, text
//! metrics and event polling. Concrete X11/GL backends live outside this
//! crate; [`HeadlessBackend`] ships here as the reference implementation.

mod headless;

pub use headless::{DrawCommand, HeadlessBackend, HeadlessWindow, CHAR_WIDTH, LINE_HEIGHT};

use crate::error::GooeyResult;
use crate::event::Event;
use crate::theme::{Color, Theme};

/// Backend-issued window identifier, used to route events
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WindowId(u64);

impl WindowId {
    /// Create a window id from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Pointer shape requested while hovering widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    /// Default pointer
    #[default]
    Arrow,
    /// Clickable widget
    Hand,
    /// Editable text
    IBeam,
}

/// Compiled backends that [`crate::Gooey::init`] can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// In-memory backend (no display required)
    #[default]
    Headless,
}

impl BackendKind {
    /// Instantiate the selected backend
    #[must_use]
    pub fn create(self) -> Box<dyn Backend> {
        match self {
            Self::Headless => Box::new(HeadlessBackend::new()),
        }
    }
}

/// Capability set the toolkit consumes from a platform backend
///
/// All calls are best-effort and expected to be cheap; the core performs no
/// retries. Only [`Backend::init`] may fail.
pub trait Backend {
    /// One-time backend setup
    fn init(&mut self) -> GooeyResult<()>;

    /// Create a top-level window and return its id
    fn create_window(&mut self, title: &str, width: i32, height: i32) -> WindowId;

    /// Create an owned child window (message boxes, dialogs)
    fn spawn_window(&mut self, title: &str, width: i32, height: i32, visible: bool) -> WindowId;

    /// Clear a window to its background before drawing a frame
    fn clear(&mut self, window: WindowId);

    /// Fill a rectangle
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color, window: WindowId);

    /// Outline a rectangle
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color, window: WindowId);

    /// Draw a line segment
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, window: WindowId);

    /// Fill an arc inside the given bounding box; angles in degrees
    fn fill_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        angle1: i32,
        angle2: i32,
        color: Color,
        window: WindowId,
    );

    /// Draw text with its baseline at `y`
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color, font_size: f32, window: WindowId);

    /// Width of `text` in backend units
    fn text_width(&self, text: &str) -> f32;

    /// Height of `text` in backend units
    fn text_height(&self, text: &str) -> f32;

    /// Return the next pending event, or [`Event::none`] when idle
    fn poll_events(&mut self) -> Event;

    /// Present the frame drawn since the last `clear`
    fn render(&mut self, window: WindowId);

    /// Keep the event buffer between polls (used during drag gestures)
    fn inhibit_reset_events(&mut self, inhibit: bool);

    /// Window that received the most recent click
    fn current_clicked_window(&self) -> Option<WindowId>;

    /// Show or hide a window
    fn set_window_visible(&mut self, window: WindowId, visible: bool);

    /// Allow or forbid user resizing
    fn set_window_resizable(&mut self, window: WindowId, resizable: bool);

    /// Change the pointer shape over a window
    fn set_cursor(&mut self, window: WindowId, shape: CursorShape);

    /// Destroy platform windows
    fn destroy_windows(&mut self, windows: &[WindowId]);

    /// Release every backend resource
    fn cleanup(&mut self);
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn init(&mut self) -> GooeyResult<()> {
        (**self).init()
    }

    fn create_window(&mut self, title: &str, width: i32, height: i32) -> WindowId {
        (**self).create_window(title, width, height)
    }

    fn spawn_window(&mut self, title: &str, width: i32, height: i32, visible: bool) -> WindowId {
        (**self).spawn_window(title, width, height, visible)
    }

    fn clear(&mut self, window: WindowId) {
        (**self).clear(window);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color, window: WindowId) {
        (**self).fill_rect(x, y, width, height, color, window);
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color, window: WindowId) {
        (**self).draw_rect(x, y, width, height, color, window);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, window: WindowId) {
        (**self).draw_line(x1, y1, x2, y2, color, window);
    }

    fn fill_arc(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        angle1: i32,
        angle2: i32,
        color: Color,
        window: WindowId,
    ) {
        (**self).fill_arc(x, y, width, height, angle1, angle2, color, window);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color, font_size: f32, window: WindowId) {
        (**self).draw_text(x, y, text, color, font_size, window);
    }

    fn text_width(&self, text: &str) -> f32 {
        (**self).text_width(text)
    }

    fn text_height(&self, text: &str) -> f32 {
        (**self).text_height(text)
    }

    fn poll_events(&mut self) -> Event {
        (**self).poll_events()
    }

    fn render(&mut self, window: WindowId) {
        (**self).render(window);
    }

    fn inhibit_reset_events(&mut self, inhibit: bool) {
        (**self).inhibit_reset_events(inhibit);
    }

    fn current_clicked_window(&self) -> Option<WindowId> {
        (**self).current_clicked_window()
    }

    fn set_window_visible(&mut self, window: WindowId, visible: bool) {
        (**self).set_window_visible(window, visible);
    }

    fn set_window_resizable(&mut self, window: WindowId, resizable: bool) {
        (**self).set_window_resizable(window, resizable);
    }

    fn set_cursor(&mut self, window: WindowId, shape: CursorShape) {
        (**self).set_cursor(window, shape);
    }

    fn destroy_windows(&mut self, windows: &[WindowId]) {
        (**self).destroy_windows(windows);
    }

    fn cleanup(&mut self) {
        (**self).cleanup();
    }
}

/// Default font size for widget text
pub const DEFAULT_FONT_SIZE: f32 = 18.0;

/// Drawing context handed to widgets: one backend, one theme, one window
pub struct Painter<'a> {
    backend: &'a mut dyn Backend,
    theme: &'a Theme,
    window: WindowId,
}

impl<'a> Painter<'a> {
    /// Bind a backend and theme to a target window
    pub fn new(backend: &'a mut dyn Backend, theme: &'a Theme, window: WindowId) -> Self {
        Self {
            backend,
            theme,
            window,
        }
    }

    /// Active theme
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// Target window
    #[must_use]
    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.backend.fill_rect(x, y, width, height, color, self.window);
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.backend.draw_rect(x, y, width, height, color, self.window);
    }

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.backend.draw_line(x1, y1, x2, y2, color, self.window);
    }

    pub fn fill_arc(&mut self, x: i32, y: i32, width: i32, height: i32, angle1: i32, angle2: i32, color: Color) {
        self.backend
            .fill_arc(x, y, width, height, angle1, angle2, color, self.window);
    }

    /// Filled circle centered at `(cx, cy)`
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.fill_arc(cx - radius, cy - radius, radius * 2, radius * 2, 0, 360, color);
    }

    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color, font_size: f32) {
        self.backend.draw_text(x, y, text, color, font_size, self.window);
    }

    #[must_use]
    pub fn text_width(&self, text: &str) -> f32 {
        self.backend.text_width(text)
    }

    #[must_use]
    pub fn text_height(&self, text: &str) -> f32 {
        self.backend.text_height(text)
    }
}
