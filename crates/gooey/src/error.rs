//! Error types for the Gooey toolkit

use thiserror::Error;

use crate::widget::WidgetKind;

/// Toolkit errors
///
/// Only boundary operations (backend init, window creation, `add_*`
/// constructors, layout building, theme loading) produce these. Event
/// handlers never fail; unexpected widget state is a no-op there.
#[derive(Debug, Error)]
pub enum GooeyError {
    /// The backend failed to initialize
    #[error("Failed to initialize backend: {0}")]
    BackendInit(String),

    /// Window creation failed
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// A widget pool is full
    #[error("Cannot add {kind:?}: capacity of {capacity} reached")]
    CapacityExceeded { kind: WidgetKind, capacity: usize },

    /// A handle does not refer to a live widget in this window
    #[error("Invalid {0:?} handle")]
    InvalidHandle(WidgetKind),

    /// An argument was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A layout was built with no children
    #[error("Layout has no children to arrange")]
    EmptyLayout,

    /// Nested layouts are too deep (or form a cycle)
    #[error("Layout nesting exceeds {0} levels")]
    LayoutDepth(usize),

    /// Slider bounds are inverted or empty
    #[error("Invalid slider range: min {min} must be below max {max}")]
    InvalidSlider { min: i64, max: i64 },

    /// Theme definition error
    #[error("Theme error: {0}")]
    Theme(String),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for toolkit operations
pub type GooeyResult<T> = Result<T, GooeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GooeyError::CapacityExceeded {
            kind: WidgetKind::Button,
            capacity: 100,
        };
        assert_eq!(err.to_string(), "Cannot add Button: capacity of 100 reached");

        let err = GooeyError::InvalidSlider { min: 10, max: 5 };
        assert!(err.to_string().contains("min 10"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GooeyError = json_err.into();
        assert!(matches!(err, GooeyError::Json(_)));
    }
}
