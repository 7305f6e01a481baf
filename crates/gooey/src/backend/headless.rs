//! In-memory backend
//!
//! Records draw calls per window instead of rasterizing them and serves
//! events from a scripted queue. Text metrics are a fixed-width
//! approximation so layout math stays deterministic.

use std::collections::{BTreeMap, VecDeque};

use super::{Backend, CursorShape, WindowId};
use crate::error::{GooeyError, GooeyResult};
use crate::event::{Event, EventKind};
use crate::theme::Color;

/// Advance of one character in headless text metrics
pub const CHAR_WIDTH: f32 = 8.0;

/// Height of one line in headless text metrics
pub const LINE_HEIGHT: f32 = 14.0;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { x: i32, y: i32, width: i32, height: i32, color: Color },
    DrawRect { x: i32, y: i32, width: i32, height: i32, color: Color },
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: Color },
    FillArc {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        angle1: i32,
        angle2: i32,
        color: Color,
    },
    Text { x: i32, y: i32, text: String, color: Color },
}

/// State of one headless window
#[derive(Debug, Clone, Default)]
pub struct HeadlessWindow {
    /// Title passed at creation
    pub title: String,
    /// Width passed at creation
    pub width: i32,
    /// Height passed at creation
    pub height: i32,
    /// Current visibility
    pub visible: bool,
    /// Whether user resizing is allowed
    pub resizable: bool,
    /// Whether the window was spawned as a child
    pub child: bool,
    /// Current pointer shape
    pub cursor: CursorShape,
    /// Number of frames presented
    pub frames: usize,
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
}

/// Backend that draws into memory
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    windows: BTreeMap<WindowId, HeadlessWindow>,
    events: VecDeque<Event>,
    next_id: u64,
    initialized: bool,
    fail_init: bool,
    reset_inhibited: bool,
    clicked_window: Option<WindowId>,
}

impl HeadlessBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Create a backend whose `init` fails
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_init: true,
            ..Self::new()
        }
    }

    /// Queue an event for a later `poll_events`
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Queue several events in order
    pub fn push_events(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.extend(events);
    }

    /// Number of queued events
    #[must_use]
    pub fn queued(&self) -> usize {
        self.events.len()
    }

    /// Inspect a window
    #[must_use]
    pub fn window(&self, id: WindowId) -> Option<&HeadlessWindow> {
        self.windows.get(&id)
    }

    /// Draw calls issued since the window was last cleared
    #[must_use]
    pub fn pending(&self, id: WindowId) -> &[DrawCommand] {
        self.windows.get(&id).map_or(&[][..], |w| w.pending.as_slice())
    }

    /// Draw calls of the last presented frame
    #[must_use]
    pub fn presented(&self, id: WindowId) -> &[DrawCommand] {
        self.windows.get(&id).map_or(&[][..], |w| w.presented.as_slice())
    }

    /// Number of frames presented for a window
    #[must_use]
    pub fn frames(&self, id: WindowId) -> usize {
        self.windows.get(&id).map_or(0, |w| w.frames)
    }

    /// Whether a drag gesture currently holds the event buffer
    #[must_use]
    pub fn is_reset_inhibited(&self) -> bool {
        self.reset_inhibited
    }

    /// Whether `init` succeeded and `cleanup` has not run yet
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn open(&mut self, title: &str, width: i32, height: i32, visible: bool, child: bool) -> WindowId {
        let id = WindowId::new(self.next_id);
        self.next_id += 1;
        self.windows.insert(
            id,
            HeadlessWindow {
                title: title.to_string(),
                width,
                height,
                visible,
                child,
                ..Default::default()
            },
        );
        id
    }

    fn record(&mut self, window: WindowId, command: DrawCommand) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.pending.push(command);
        }
    }
}

impl Backend for HeadlessBackend {
    fn init(&mut self) -> GooeyResult<()> {
        if self.fail_init {
            return Err(GooeyError::BackendInit("headless init disabled".to_string()));
        }
        self.initialized = true;
        Ok(())
    }

    fn create_window(&mut self, title: &str, width: i32, height: i32) -> WindowId {
        self.open(title, width, height, true, false)
    }

    fn spawn_window(&mut self, title: &str, width: i32, height: i32, visible: bool) -> WindowId {
        self.open(title, width, height, visible, true)
    }

    fn clear(&mut self, window: WindowId) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.pending.clear();
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color, window: WindowId) {
        self.record(window, DrawCommand::FillRect { x, y, width, height, color });
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color, window: WindowId) {
        self.record(window, DrawCommand::DrawRect { x, y, width, height, color });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, window: WindowId) {
        self.record(window, DrawCommand::Line { x1, y1, x2, y2, color });
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
        self.record(
            window,
            DrawCommand::FillArc {
                x,
                y,
                width,
                height,
                angle1,
                angle2,
                color,
            },
        );
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color, _font_size: f32, window: WindowId) {
        self.record(
            window,
            DrawCommand::Text {
                x,
                y,
                text: text.to_string(),
                color,
            },
        );
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * CHAR_WIDTH
    }

    fn text_height(&self, _text: &str) -> f32 {
        LINE_HEIGHT
    }

    fn poll_events(&mut self) -> Event {
        let event = self.events.pop_front().unwrap_or_default();
        if let EventKind::ClickPress { .. } = event.kind {
            self.clicked_window = Some(event.attached_window);
        }
        event
    }

    fn render(&mut self, window: WindowId) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.presented = w.pending.clone();
            w.frames += 1;
        }
    }

    fn inhibit_reset_events(&mut self, inhibit: bool) {
        self.reset_inhibited = inhibit;
    }

    fn current_clicked_window(&self) -> Option<WindowId> {
        self.clicked_window
    }

    fn set_window_visible(&mut self, window: WindowId, visible: bool) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.visible = visible;
        }
    }

    fn set_window_resizable(&mut self, window: WindowId, resizable: bool) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.resizable = resizable;
        }
    }

    fn set_cursor(&mut self, window: WindowId, shape: CursorShape) {
        if let Some(w) = self.windows.get_mut(&window) {
            w.cursor = shape;
        }
    }

    fn destroy_windows(&mut self, windows: &[WindowId]) {
        for id in windows {
            self.windows.remove(id);
        }
    }

    fn cleanup(&mut self) {
        self.windows.clear();
        self.events.clear();
        self.initialized = false;
    }
}
