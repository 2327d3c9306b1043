/// All errors returned by `ndfuse-core`.
///
/// The lazy nodes themselves never fail at runtime; these errors come from
/// leaf construction and the bounds-checked driver helpers in [`crate::eval`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Operand shapes do not agree.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A shape does not fit the supplied data.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// An axis index is out of bounds for the expression's rank.
    #[error("axis {axis} out of bounds for expression of rank {rank}")]
    AxisOutOfBounds { axis: usize, rank: usize },

    /// A multi-dimensional index is out of bounds.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },
}

/// Convenience alias used throughout `ndfuse-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
