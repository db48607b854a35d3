use std::ops::{Add, Div, Mul, Sub};

/// An RGBA color with `f32` channels, each nominally in `[0, 1]`.
///
/// The default is opaque black.
///
/// # Example
///
/// ```rust
/// use netpbm::Rgba;
///
/// let orange = Rgba::from_rgba8(255, 128, 0, 255);
/// assert_eq!(orange.r, 1.0);
/// assert_eq!(orange.b, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "a color is exactly its channels, adding one would make it a different type"
)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha, where 1.0 is fully opaque.
    pub a: f32,
}

impl Rgba {
    /// The factor that maps an 8-bit channel value to `[0, 1]`.
    pub const INV_255: f32 = 1.0 / 255.0;

    /// A color with the given channels, used as-is.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color.
    #[must_use]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Converts 8-bit channel values by scaling with [`INV_255`][Self::INV_255], so 255 maps
    /// to 1.0.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) * Self::INV_255,
            f32::from(g) * Self::INV_255,
            f32::from(b) * Self::INV_255,
            f32::from(a) * Self::INV_255,
        )
    }

    /// Converts opaque 8-bit channel values, where 255 maps to 1.0.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, u8::MAX)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0)
    }
}

/// An RGB color with `f64` channels, each nominally in `[0, 1]`, as written to PPM images.
///
/// Supports the arithmetic typically used when computing pixel values: addition and subtraction
/// of colors, and scaling by a factor.
///
/// # Example
///
/// ```rust
/// use netpbm::Rgb;
///
/// let sky = Rgb::new(0.5, 0.75, 1.0);
/// let white = Rgb::new(1.0, 1.0, 1.0);
///
/// let blend = 0.5 * sky + white * 0.5;
/// assert_eq!(blend, Rgb::new(0.75, 0.875, 1.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "a color is exactly its channels, adding one would make it a different type"
)]
pub struct Rgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Rgb {
    /// A color with the given channels, used as-is.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgba> for Rgb {
    /// Drops the alpha channel.
    fn from(color: Rgba) -> Self {
        Self::new(f64::from(color.r), f64::from(color.g), f64::from(color.b))
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Rgb {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, t: f64) -> Self {
        Self::new(self.r * t, self.g * t, self.b * t)
    }
}

impl Mul<Rgb> for f64 {
    type Output = Rgb;

    fn mul(self, color: Rgb) -> Rgb {
        color * self
    }
}

impl Div<f64> for Rgb {
    type Output = Self;

    fn div(self, t: f64) -> Self {
        (1.0 / t) * self
    }
}
