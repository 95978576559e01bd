use thiserror::Error;

/// Errors raised at construction time. Mid-stream operations (`feed`,
/// `resize`) stay infallible, clamping bad input instead — see the module
/// docs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerminalError {
    #[error("invalid screen dimensions: {cols}x{rows} (both must be nonzero)")]
    InvalidDimensions { cols: usize, rows: usize },
}

pub type Result<T> = std::result::Result<T, TerminalError>;
