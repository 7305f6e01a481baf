//! Application context and run loop
//!
//! [`Gooey`] owns the active backend and theme. Windows are created through
//! it, and [`Gooey::run`] drives them: each tick polls one event, hands it to
//! the window it belongs to, redraws that window if anything changed and
//! then sleeps for the frame interval.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::backend::{Backend, BackendKind};
use crate::dispatch::{dispatch, Outcome};
use crate::error::GooeyResult;
use crate::lifecycle::LoopState;
use crate::message_box::MessageBoxConfig;
use crate::theme::Theme;
use crate::window::Window;

/// Default pause between ticks (about 60 Hz)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_600);

/// Configuration for initializing the toolkit
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend to instantiate in [`Gooey::init`]
    pub backend: BackendKind,
    /// Initial theme, unless `theme_path` is set
    pub theme: Theme,
    /// Theme file loaded at init, taking precedence over `theme`
    pub theme_path: Option<PathBuf>,
    /// Pause after every loop tick
    pub frame_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            theme: Theme::default(),
            theme_path: None,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl AppConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend kind
    #[must_use]
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Set the initial theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Load the theme from a JSON file at init
    #[must_use]
    pub fn with_theme_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme_path = Some(path.into());
        self
    }

    /// Set the pause between loop ticks
    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }
}

/// Toolkit context: the active backend, theme and loop state
pub struct Gooey<B: Backend = Box<dyn Backend>> {
    backend: B,
    theme: Theme,
    config: AppConfig,
    state: LoopState,
}

impl Gooey {
    /// Instantiate and initialize the backend selected by `config`
    pub fn init(config: AppConfig) -> GooeyResult<Self> {
        let backend = config.backend.create();
        Self::with_backend(backend, config)
    }
}

impl<B: Backend> Gooey<B> {
    /// Initialize a caller-provided backend
    pub fn with_backend(mut backend: B, config: AppConfig) -> GooeyResult<Self> {
        backend.init().map_err(|e| {
            log::error!("Backend initialization failed: {e}");
            e
        })?;

        let theme = match &config.theme_path {
            Some(path) => Theme::load(path)?,
            None => config.theme,
        };
        log::info!("Gooey initialized");

        Ok(Self {
            backend,
            theme,
            config,
            state: LoopState::Initializing,
        })
    }

    /// Active theme
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme; windows pick it up on their next redraw
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current loop state
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Open a top-level window
    pub fn create_window(&mut self, title: &str, width: i32, height: i32, visible: bool) -> GooeyResult<Window> {
        Window::create(&mut self.backend, title, width, height, visible)
    }

    /// Open an owned child window
    pub fn create_child_window(&mut self, title: &str, width: i32, height: i32, visible: bool) -> GooeyResult<Window> {
        Window::create_child(&mut self.backend, title, width, height, visible)
    }

    /// Build a hidden message box; call [`Window::show`] to display it
    pub fn create_message_box(
        &mut self,
        config: &MessageBoxConfig,
        on_dismiss: impl FnMut(()) + 'static,
    ) -> GooeyResult<Window> {
        config.open(&mut self.backend, &self.theme, on_dismiss)
    }

    /// Show a message box window
    pub fn show(&mut self, window: &mut Window) {
        window.show(&mut self.backend);
    }

    /// Repaint one window with the active theme
    pub fn redraw(&mut self, window: &mut Window) {
        window.redraw(&mut self.backend, &self.theme);
    }

    /// Process at most one pending event
    ///
    /// The event is handled only by the window it is attached to; the other
    /// windows are neither queried nor redrawn. A close request for a window
    /// of this set stops the loop.
    pub fn pump(&mut self, windows: &mut [&mut Window]) -> LoopState {
        if self.state == LoopState::Initializing {
            self.state = self.state.start();
        }

        let event = self.backend.poll_events();
        if event.is_none() {
            return self.state;
        }

        let Some(window) = windows.iter_mut().find(|w| w.id() == event.attached_window) else {
            log::trace!("Dropping event for unknown window {:?}", event.attached_window);
            return self.state;
        };

        match dispatch(window, &mut self.backend, &event) {
            Outcome::Ignored => {}
            Outcome::Redraw => window.redraw(&mut self.backend, &self.theme),
            Outcome::Close => {
                log::info!("Window '{}' closed", window.title());
                self.state = self.state.stop();
            }
        }
        self.state
    }

    /// Draw every visible window, then dispatch events until a window of
    /// the set is closed
    pub fn run(&mut self, windows: &mut [&mut Window]) {
        self.state = self.state.start();
        for window in windows.iter_mut().filter(|w| w.is_visible()) {
            window.redraw(&mut self.backend, &self.theme);
        }

        while self.state.is_running() {
            if self.pump(windows).is_stopped() {
                break;
            }
            if !self.config.frame_interval.is_zero() {
                thread::sleep(self.config.frame_interval);
            }
        }
    }

    /// Destroy the windows, release the backend and hand it back
    pub fn cleanup(mut self, windows: Vec<Window>) -> B {
        let ids: Vec<_> = windows.iter().map(Window::id).collect();
        drop(windows);
        self.backend.destroy_windows(&ids);
        self.backend.cleanup();
        log::debug!("Released {} windows", ids.len());
        self.backend
    }
}

impl<B: Backend + std::fmt::Debug> std::fmt::Debug for Gooey<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gooey")
            .field("backend", &self.backend)
            .field("theme", &self.theme)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
