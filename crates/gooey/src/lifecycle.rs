//! Run-loop lifecycle

use std::fmt;

/// Phase of the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Context created, loop not started
    #[default]
    Initializing,
    /// Polling and dispatching events
    Running,
    /// A window of the run set was closed
    Stopped,
}

impl LoopState {
    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    #[must_use]
    pub fn is_stopped(self) -> bool {
        self == Self::Stopped
    }

    /// State after the loop starts; a stopped loop can be restarted
    #[must_use]
    pub fn start(self) -> Self {
        if self != Self::Running {
            log::debug!("Event loop: {self} -> running");
        }
        Self::Running
    }

    #[must_use]
    pub fn stop(self) -> Self {
        if self != Self::Stopped {
            log::debug!("Event loop: {self} -> stopped");
        }
        Self::Stopped
    }
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initializing => "initializing",
            Self::Running => "running",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let state = LoopState::default();
        assert_eq!(state, LoopState::Initializing);
        assert!(!state.is_running());

        let state = state.start();
        assert!(state.is_running());

        let state = state.stop();
        assert!(state.is_stopped());
        assert!(state.start().is_running());
    }

    #[test]
    fn test_display() {
        assert_eq!(LoopState::Running.to_string(), "running");
        assert_eq!(LoopState::Stopped.to_string(), "stopped");
    }
}
