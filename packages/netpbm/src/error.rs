use std::io;

use thiserror::Error;

/// Errors that can occur when assembling or writing an image.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested image size cannot be represented.
    #[error("image dimensions {width}x{height} are invalid: {problem}")]
    InvalidDimensions {
        /// The requested width in pixels.
        width: usize,

        /// The requested height in pixels.
        height: usize,

        /// A human-readable description of the problem.
        problem: String,
    },

    /// The number of pixels provided does not match the image size.
    #[error("image of {width}x{height} needs {expected} pixels but {actual} were provided")]
    PixelCountMismatch {
        /// The image width in pixels.
        width: usize,

        /// The image height in pixels.
        height: usize,

        /// `width * height`.
        expected: usize,

        /// The number of pixels actually provided.
        actual: usize,
    },

    /// Writing the image data failed.
    #[error("failed to write image data: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for image operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
