//! Error types.
//!
//! Out-of-bounds coordinates are never errors: reads return `None` and
//! writes are dropped. The only failures are a canvas that cannot exist and
//! a polygon that cannot be drawn.

use thiserror::Error;

/// Failure of a canvas operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// Output size outside `1..=32767` × `1..=16383` cells.
    #[error("invalid canvas size {width}×{height}: minimal size is 1×1, maximal is 32767×16383")]
    InvalidSize { width: i32, height: i32 },

    /// Regular polygon with fewer than three sides.
    #[error("a polygon needs at least 3 sides, got {0}")]
    InvalidSides(u32),
}

/// Failure to size a canvas from `WIDTH` and `HEIGHT`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutoSizeError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {var} is not a number: {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

pub type Result<T> = std::result::Result<T, CanvasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            CanvasError::InvalidSides(2).to_string(),
            "a polygon needs at least 3 sides, got 2"
        );
        assert_eq!(
            AutoSizeError::Missing("WIDTH").to_string(),
            "environment variable WIDTH is not set"
        );
        assert_eq!(
            AutoSizeError::NotANumber { var: "HEIGHT", value: "ten".into() }.to_string(),
            "environment variable HEIGHT is not a number: \"ten\""
        );
    }

    #[test]
    fn canvas_error_converts() {
        let err: AutoSizeError = CanvasError::InvalidSize { width: 0, height: 1 }.into();
        assert!(matches!(err, AutoSizeError::Canvas(CanvasError::InvalidSize { .. })));
        assert!(err.to_string().starts_with("invalid canvas size 0×1"));
    }
}
