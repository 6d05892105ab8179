use thiserror::Error;

/// Error type for size formatting.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The input was NaN or infinite.
    #[error("expected a finite number, got f64: {0}")]
    InvalidInput(f64),
}
