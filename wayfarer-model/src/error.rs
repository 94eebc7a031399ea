//! Model validation errors.

use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Snap offsets must satisfy `collapsed > half > expanded`.
    #[error(
        "invalid snap points: expected collapsed ({collapsed}) > half ({half}) > expanded ({expanded})"
    )]
    SnapOrder {
        /// Offset given for the collapsed state.
        collapsed: f32,
        /// Offset given for the half state.
        half: f32,
        /// Offset given for the expanded state.
        expanded: f32,
    },
    /// A snap offset was NaN or infinite.
    #[error("snap offset for {0} is not finite")]
    NonFiniteOffset(&'static str),
}

/// Result alias for model constructors.
pub type Result<T> = std::result::Result<T, ModelError>;
