//! Error types for the sorting engine.

use thiserror::Error;

/// Errors surfaced to callers of the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A caller-supplied dataset failed validation. The sequence store is
    /// left untouched when this is returned.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The operation is not allowed while a run is active.
    #[error("engine is busy with an active run")]
    Busy,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unexpected fault inside an algorithm. The controller returns to a
    /// start-enabled state after reporting this.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Why a caller-supplied dataset was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// An entry could not be parsed as a number.
    #[error("`{0}` is not a number")]
    NotANumber(String),

    /// A value falls outside the supported range.
    #[error("value {value} out of bounds ({min}..={max})")]
    ValueOutOfBounds { value: i64, min: u32, max: u32 },

    /// Too few entries.
    #[error("too few entries: got {got}, need at least {min}")]
    TooFew { got: usize, min: usize },

    /// Too many entries.
    #[error("too many entries: got {got}, maximum is {max}")]
    TooMany { got: usize, max: usize },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Outcome channel for an in-flight run.
///
/// `Interrupted` is the cooperative-pause signal: it unwinds the running
/// algorithm at its next suspension point and is mapped to a normal
/// `RunOutcome::Paused` by the controller, never surfaced as an error.
/// The remaining variants are faults and surface as [`EngineError::Internal`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum StepError {
    #[error("run interrupted by pause")]
    Interrupted,

    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("cycle rotation ran past the end of the sequence at position {pos}")]
    CycleStalled { pos: usize },
}

impl StepError {
    /// True for the cooperative-pause signal, false for genuine faults.
    pub(crate) fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

/// Result type used by instrumented primitives and algorithms.
pub(crate) type StepResult<T> = std::result::Result<T, StepError>;
