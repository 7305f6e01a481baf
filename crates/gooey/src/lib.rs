//! Gooey - a retained-mode widget toolkit core
//!
//! Applications declare windows and widgets; the toolkit owns their storage,
//! arranges them, renders them through a pluggable [`Backend`] and
//! dispatches input events to them.
//!
//! # Architecture
//!
//! - **Context**: [`Gooey`] owns the active backend, the active [`Theme`] and
//!   the loop state. There is no global state.
//! - **Windows**: a [`Window`] owns one append-only pool per widget kind and a
//!   registry of every widget it holds. Widgets are addressed through typed
//!   [`Handle`]s.
//! - **Layout**: a [`Layout`] positions its children when
//!   [`Window::build_layout`] runs.
//! - **Dispatch**: [`Gooey::run`] polls one event per tick, routes it to the
//!   window it is attached to, runs the handler chain and redraws that window
//!   at most once.
//!
//! # Example
//!
//! ```
//! use gooey::{AppConfig, Event, EventKind, Gooey, HeadlessBackend, LayoutKind};
//! use std::time::Duration;
//!
//! let config = AppConfig::new().with_frame_interval(Duration::ZERO);
//! let mut gooey = Gooey::with_backend(HeadlessBackend::new(), config)?;
//! let mut window = gooey.create_window("Hello", 400, 300, true)?;
//!
//! let layout = window.create_layout(LayoutKind::Vertical, 20, 20, 360, 260)?;
//! let label = window.add_label(0, 0, "Welcome")?;
//! let button = window.add_button(0, 0, 120, 40, "Quit", |()| {})?;
//! window.layout_add_child(layout, label)?;
//! window.layout_add_child(layout, button)?;
//! window.build_layout(layout)?;
//!
//! let id = window.id();
//! gooey.backend_mut().push_event(Event::new(id, EventKind::WindowClose));
//! gooey.run(&mut [&mut window]);
//! gooey.cleanup(vec![window]);
//! # Ok::<(), gooey::GooeyError>(())
//! ```

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types
pub mod error;

/// Color themes
pub mod theme;

/// Input events
pub mod event;

/// Backend trait, painter and the headless backend
pub mod backend;

/// Boxed user callbacks
pub mod callback;

/// Widget model and concrete widgets
pub mod widget;

/// Layout engine
pub mod layout;

/// Windows and widget storage
pub mod window;

/// Message box windows
pub mod message_box;

/// Per-window event dispatch
pub mod dispatch;

/// Run-loop states
pub mod lifecycle;

/// Application context and run loop
pub mod app;

pub use app::{AppConfig, Gooey, DEFAULT_FRAME_INTERVAL};
pub use backend::{Backend, BackendKind, CursorShape, DrawCommand, HeadlessBackend, Painter, WindowId};
pub use callback::Callback;
pub use error::{GooeyError, GooeyResult};
pub use event::{Event, EventKind, Key, MouseButton};
pub use layout::{Layout, LayoutChild, LayoutKind};
pub use lifecycle::LoopState;
pub use message_box::{MessageBoxConfig, MessageBoxKind};
pub use theme::{Color, Theme};
pub use widget::{
    Button, Canvas, CanvasCommand, Checkbox, Dropdown, Handle, Label, List, ListItem, Menu, MenuChildId, Plot,
    PlotData, PlotKind, RadioButton, RadioGroup, Slider, Textbox, Widget, WidgetHeader, WidgetKind, WidgetRef,
    MAX_PLOT_COUNT, MAX_WIDGETS,
};
pub use window::{Window, WindowKind};
