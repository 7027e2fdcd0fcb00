//! # Error Types

/// Errors from wordloom operations.
#[derive(Debug, thiserror::Error)]
pub enum WordloomError {
    /// Requested embedding dimension has no published vector table.
    #[error("unsupported embedding dimension ({dim}); supported: {supported:?}")]
    UnsupportedDimension {
        /// The requested dimension.
        dim: usize,

        /// The dimensions a table is published for.
        supported: &'static [usize],
    },

    /// Vocab size exceeds the capacity of the target index type.
    #[error("vocab size ({size}) exceeds index type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for wordloom operations.
pub type WLResult<T> = core::result::Result<T, WordloomError>;
