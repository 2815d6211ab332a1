//! Common error types for xcolorpick-core.

use thiserror::Error;

/// Core-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown template directive '%{0}' (expected %d, %x, %X or %%)")]
    UnknownDirective(char),
    #[error("template ends with a lone '%'")]
    TrailingPercent,
    #[error("template uses {0} channel placeholders but only red, green and blue are available")]
    TooManyPlaceholders(usize),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
