use thiserror::Error;

/// Errors returned by path operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// Inverse evaluation needs a search domain spanning at least two handles.
    #[error("not enough handles to compute time: need at least 2, found {found}")]
    InsufficientHandles { found: usize },

    #[error("handle index {index} out of bounds for path of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
