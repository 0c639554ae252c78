//! Error types.
//!
//! Construction is the only fallible step for shapes; once a tree exists,
//! width/height/render are total. Replay and page assembly have their own
//! small error enums.

use crate::shape::Layout;

/// Rejected shape construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },
    #[error("{what} must not be negative, got {value}")]
    Negative { what: &'static str, value: f64 },
    #[error("{what} must be finite")]
    NonFinite { what: &'static str },
    #[error("a polygon needs at least 3 sides, got {sides}")]
    TooFewSides { sides: usize },
    #[error("{layout:?} compound needs at least one child")]
    EmptyCompound { layout: Layout },
}

/// Failure while replaying a command list.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("relative move or line with no current point (command #{index})")]
    NoCurrentPoint { index: usize },
    #[error("grestore without matching gsave (command #{index})")]
    UnbalancedRestore { index: usize },
}

/// Rejected page setup or placement.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("page {what} must be positive and finite, got {value}")]
    BadDimension { what: &'static str, value: f64 },
    #[error("placement #{index} is not a finite point")]
    BadPlacement { index: usize },
}

/// Positive and finite.
pub(crate) fn check_positive(what: &'static str, value: f64) -> Result<f64, ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::NonFinite { what });
    }
    if value <= 0.0 {
        return Err(ShapeError::NonPositive { what, value });
    }
    Ok(value)
}

/// Zero allowed.
pub(crate) fn check_non_negative(what: &'static str, value: f64) -> Result<f64, ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::NonFinite { what });
    }
    if value < 0.0 {
        return Err(ShapeError::Negative { what, value });
    }
    Ok(value)
}
