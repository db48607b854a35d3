use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::{Error, Result, Rgb};

/// Maximum channel value declared in the header of every image we write.
const MAX_CHANNEL_VALUE: u16 = 255;

/// Limits `x` to `[min, max]`.
///
/// Defined for every input. `min` wins over `max` when the bounds are inverted and NaN is
/// passed through unchanged.
#[must_use]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Maps a channel in `[0, 1]` to `[0, 255]`. Values outside the range are clamped first.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the clamped value is in [0, 255.744), NaN saturates to 0"
)]
fn channel_to_byte(channel: f64) -> u16 {
    (256.0 * clamp(channel, 0.0, 0.999)) as u16
}

/// Writes one pixel as a `"r g b\n"` line of decimal channel values in `[0, 255]`.
///
/// # Errors
///
/// Returns any error reported by `out`.
///
/// # Example
///
/// ```rust
/// use netpbm::{Rgb, write_pixel};
///
/// let mut out = Vec::new();
/// write_pixel(&mut out, Rgb::new(1.0, 0.5, 0.0))?;
///
/// assert_eq!(out, b"255 128 0\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_pixel<W>(out: &mut W, color: Rgb) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(
        out,
        "{} {} {}",
        channel_to_byte(color.r),
        channel_to_byte(color.g),
        channel_to_byte(color.b)
    )
}

/// An image in the plain-text Netpbm pixmap format (PPM, magic number `P3`).
///
/// Pixels are stored row by row, starting at the top left corner.
///
/// # Example
///
/// ```rust
/// use netpbm::{PpmImage, Rgb};
///
/// let image = PpmImage::new(2, 1, vec![Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0)])?;
///
/// let mut out = Vec::new();
/// image.write_to(&mut out)?;
///
/// assert_eq!(out, b"P3\n2 1\n255\n255 0 0\n0 0 255\n");
/// # Ok::<(), netpbm::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PpmImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PpmImage {
    /// Creates an image from `width * height` pixels in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero or the pixel count
    /// overflows, and [`Error::PixelCountMismatch`] if `pixels` has the wrong length.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = Self::pixel_count(width, height)?;

        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Generates a gradient useful for checking that image output works: red grows from left
    /// to right, green grows from bottom to top and blue is a constant 0.25.
    ///
    /// A dimension of 1 has no gradient along it and uses 0.0 for the matching channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero or the pixel count
    /// overflows.
    pub fn test_pattern(width: usize, height: usize) -> Result<Self> {
        let mut pixels = Vec::with_capacity(Self::pixel_count(width, height)?);

        for row in (0..height).rev() {
            trace!(scanlines_remaining = row, "generating test pattern");

            for col in 0..width {
                pixels.push(Rgb::new(
                    fraction(col, width),
                    fraction(row, height),
                    0.25,
                ));
            }
        }

        debug!(width, height, "generated test pattern");

        Self::new(width, height, pixels)
    }

    fn pixel_count(width: usize, height: usize) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width,
                height,
                problem: "both dimensions must be greater than zero".to_string(),
            });
        }

        width
            .checked_mul(height)
            .ok_or_else(|| Error::InvalidDimensions {
                width,
                height,
                problem: "pixel count does not fit in usize".to_string(),
            })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixels in row-major order, starting at the top left corner.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Writes the image in plain-text PPM format: a `P3` header followed by one pixel per line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing to `out` fails.
    pub fn write_to<W>(&self, mut out: W) -> Result<()>
    where
        W: Write,
    {
        write!(
            out,
            "P3\n{} {}\n{MAX_CHANNEL_VALUE}\n",
            self.width, self.height
        )?;

        let total = self.pixels.len();
        let mut last_percent = 0;

        for (index, pixel) in self.pixels.iter().enumerate() {
            write_pixel(&mut out, *pixel)?;

            let percent = percent_of(index, total);
            if percent != last_percent {
                last_percent = percent;
                debug!(percent, "writing PPM pixels");
            }
        }

        out.flush()?;

        Ok(())
    }

    /// Writes the image to a file at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;

        debug!(
            path = %path.display(),
            width = self.width,
            height = self.height,
            "wrote PPM file"
        );

        Ok(())
    }
}

/// `n / (len - 1)`, or 0.0 if there is only one position.
#[expect(
    clippy::cast_precision_loss,
    reason = "image dimensions are far below the 2^52 limit of exact conversion"
)]
fn fraction(n: usize, len: usize) -> f64 {
    match len.checked_sub(1) {
        Some(last) if last > 0 => n as f64 / last as f64,
        _ => 0.0,
    }
}

#[expect(
    clippy::integer_division,
    reason = "progress is reported in whole percent"
)]
fn percent_of(index: usize, total: usize) -> usize {
    index.saturating_mul(100) / total.max(1)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, reason = "all compared values are exactly representable")]

    use super::*;

    #[test]
    fn channel_mapping_clamps() {
        assert_eq!(channel_to_byte(0.0), 0);
        assert_eq!(channel_to_byte(-3.0), 0);
        assert_eq!(channel_to_byte(0.5), 128);
        assert_eq!(channel_to_byte(1.0), 255);
        assert_eq!(channel_to_byte(42.0), 255);
        assert_eq!(channel_to_byte(f64::NAN), 0);
    }

    #[test]
    fn clamp_limits_to_range() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn clamp_accepts_any_bounds() {
        // Inverted bounds: checked against `min` first, then `max`.
        assert_eq!(clamp(5.0, 3.0, 1.0), 1.0);
        assert_eq!(clamp(0.0, 3.0, 1.0), 3.0);
        assert_eq!(clamp(2.0, 3.0, 1.0), 3.0);

        // NaN bounds never compare, so they let `x` through.
        assert_eq!(clamp(0.5, f64::NAN, 1.0), 0.5);
        assert_eq!(clamp(0.5, 0.0, f64::NAN), 0.5);
    }

    #[test]
    fn write_pixel_format() {
        let mut out = Vec::new();
        write_pixel(&mut out, Rgb::new(0.0, 0.25, 0.999)).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0 64 255\n");
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            PpmImage::new(0, 3, Vec::new()),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            PpmImage::test_pattern(3, 0),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(matches!(
            PpmImage::new(usize::MAX, 2, Vec::new()),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn pixel_count_must_match() {
        let result = PpmImage::new(2, 2, vec![Rgb::default(); 3]);

        assert!(matches!(
            result,
            Err(Error::PixelCountMismatch {
                expected: 4,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_pattern_gradient() {
        let image = PpmImage::test_pattern(3, 2).unwrap();

        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(
            image.pixels(),
            &[
                Rgb::new(0.0, 1.0, 0.25),
                Rgb::new(0.5, 1.0, 0.25),
                Rgb::new(1.0, 1.0, 0.25),
                Rgb::new(0.0, 0.0, 0.25),
                Rgb::new(0.5, 0.0, 0.25),
                Rgb::new(1.0, 0.0, 0.25),
            ]
        );
    }

    #[test]
    fn test_pattern_single_pixel() {
        let image = PpmImage::test_pattern(1, 1).unwrap();

        assert_eq!(image.pixels(), &[Rgb::new(0.0, 0.0, 0.25)]);
    }

    #[test]
    fn percent_progress() {
        assert_eq!(percent_of(0, 10), 0);
        assert_eq!(percent_of(5, 10), 50);
        assert_eq!(percent_of(9, 10), 90);
        assert_eq!(percent_of(0, 0), 0);
    }

    #[test]
    fn write_errors_propagate() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let image = PpmImage::test_pattern(2, 2).unwrap();

        assert!(matches!(
            image.write_to(FailingWriter),
            Err(Error::Io(_))
        ));
    }
}
