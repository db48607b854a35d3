use thiserror::Error;

/// Errors that can occur when creating or operating on a pool.
///
/// Running out of vacant slots is not an error - [`activate()`][crate::Pool::activate] signals
/// exhaustion by returning `None`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The pool could not be created with the requested configuration.
    #[error("invalid argument: {problem}")]
    InvalidArgument {
        /// A human-readable description of the problem.
        problem: String,
    },

    /// The caller referred to a slot that does not exist in the pool.
    #[error("slot index {index} is out of range for a pool with capacity {capacity}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,

        /// The number of slots in the pool. Valid indexes are below this.
        capacity: usize,
    },

    /// The caller tried to deactivate a slot that is already vacant.
    #[error("slot {index} cannot be deactivated because it is not active")]
    NotActive {
        /// The index of the vacant slot.
        index: usize,
    },
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
