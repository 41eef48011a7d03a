//! The two failure kinds the engine surfaces.
//!
//! The core never retries and never catches its own errors; they propagate
//! with `?` to whichever caller asked for something the engine cannot give
//! it (a `PreconditionError`), or they indicate a bug in the engine itself
//! (an `InvariantError`, which test suites should assert never fires).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    /// The caller asked for something outside the engine's documented
    /// preconditions (too few points, an aperture outside `(0°, 180°)`, an
    /// empty `CircularList` backing, ...).
    #[error("precondition violated: {what}")]
    Precondition { what: String },

    /// An invariant this specification claims should always hold failed at
    /// runtime. Reaching this arm means the algorithm has a bug.
    #[error("invariant violated: {what}")]
    Invariant { what: String },
}

impl EngineError {
    pub fn precondition(what: impl Into<String>) -> Self {
        EngineError::Precondition { what: what.into() }
    }

    pub fn invariant(what: impl Into<String>) -> Self {
        EngineError::Invariant { what: what.into() }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
