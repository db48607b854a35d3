//! Color value types and a writer for the plain-text Netpbm pixmap format (PPM, `P3`).
//!
//! * [`Rgba`] is a single-precision color with alpha, as used by rendering code.
//! * [`Rgb`] is a double-precision color with the arithmetic needed to compute pixel values.
//! * [`PpmImage`] holds a grid of [`Rgb`] pixels and writes it as a PPM file.
//! * [`write_pixel()`] writes a single pixel line, for callers that stream their own output.
//!
//! Channel values are nominally in `[0, 1]` and are clamped when written, so out of range values
//! never produce an invalid file.
//!
//! # Example
//!
//! ```rust
//! use netpbm::PpmImage;
//!
//! let image = PpmImage::test_pattern(256, 256)?;
//!
//! let mut out = Vec::new();
//! image.write_to(&mut out)?;
//!
//! assert!(out.starts_with(b"P3\n256 256\n255\n"));
//! # Ok::<(), netpbm::Error>(())
//! ```

mod color;
mod error;
mod ppm;

pub use color::*;
pub use error::Error;
pub(crate) use error::Result;
pub use ppm::*;
