use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    convert, format, from_24bit, normalize, parse, to_24bit, to_eq_coordinates, ColorSpace,
};

use crate::Float;

/// Create an sRGB [`Color`] from three bytes, in const contexts too.
///
/// ```
/// # use prettyramp::{rgb, Color};
/// const ORANGE: Color = rgb!(0xff, 0x80, 0);
/// assert_eq!(ORANGE, Color::from_24bit(0xff, 0x80, 0));
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Srgb,
            [
                $r as $crate::Float / 255.0,
                $g as $crate::Float / 255.0,
                $b as $crate::Float / 255.0,
            ],
        )
    };
}

/// A color: one [`ColorSpace`] plus three coordinates.
///
/// Color stops are colors, and so are the results of
/// [`Gradient::colors`](crate::gradient::Gradient::colors). A stop may use
/// any color space. Each [`GradientSpace`](crate::gradient::GradientSpace)
/// converts its stops into its own working representation.
///
/// # Coordinates
///
/// sRGB and linear sRGB coordinates of displayable colors lie in `0..=1`.
/// HSL and HSV hold a hue in degrees and two percentages. XYZ, CIELAB,
/// CIELCh, Oklab, and Oklch are unbounded.
///
/// A hue may be not-a-number when it carries no information, as for grays
/// converted into a polar space. [`Color::normalize`] zeroes such
/// coordinates and every conversion normalizes first.
///
/// # Equality
///
/// Two colors are equal when they share a color space and their normalized
/// coordinates agree after rounding off the last few digits. Hues compare
/// modulo 360. [`Hash`](std::hash::Hash) uses the same rounded bits, so
/// colors work as hash set entries.
///
/// # Indexing
///
/// `color[0]`, `color[1]`, and `color[2]` read the coordinates.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "prettyramp.color")
)]
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// Create a color from a space and coordinates.
    ///
    /// ```
    /// # use prettyramp::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Oklch, [0.7, 0.22, 3.0]);
    /// assert_eq!(pink[1], 0.22);
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Create a color from a space and coordinates.
    ///
    /// ```
    /// # use prettyramp::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Oklch, [0.7, 0.22, 3.0]);
    /// assert_eq!(pink[1], 0.22);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Parse a color name, hashed hex color, or color function. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, crate::error::ColorFormatError> {
        Color::from_str(s)
    }

    /// Create an sRGB color from bytes. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    /// Create an sRGB color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::Srgb, [r, g, b])
    }

    /// Create a linear sRGB color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn linear_srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::LinearSrgb, [r, g, b])
    }

    /// Create an HSL color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn hsl(h: Float, s: Float, l: Float) -> Self {
        Self::new(ColorSpace::Hsl, [h, s, l])
    }

    /// Create an HSV color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn hsv(h: Float, s: Float, v: Float) -> Self {
        Self::new(ColorSpace::Hsv, [h, s, v])
    }

    /// Create a D65 XYZ color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn xyz(x: Float, y: Float, z: Float) -> Self {
        Self::new(ColorSpace::Xyz, [x, y, z])
    }

    /// Create a D65 CIELAB color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn lab(l: Float, a: Float, b: Float) -> Self {
        Self::new(ColorSpace::Lab, [l, a, b])
    }

    /// Create a D65 CIELCh color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn lch(l: Float, c: Float, h: Float) -> Self {
        Self::new(ColorSpace::Lch, [l, c, h])
    }

    /// Create an Oklab color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklab(l: Float, a: Float, b: Float) -> Self {
        Self::new(ColorSpace::Oklab, [l, a, b])
    }

    /// Create an Oklch color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklch(l: Float, c: Float, h: Float) -> Self {
        Self::new(ColorSpace::Oklch, [l, c, h])
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Get the three coordinates. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Always 3. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        3
    }

    /// Read one coordinate, counting from the end for negative indices. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        let slot = if index < 0 { index + 3 } else { index };
        usize::try_from(slot)
            .ok()
            .and_then(|slot| self.coordinates.get(slot).copied())
            .ok_or_else(|| pyo3::exceptions::PyIndexError::new_err("no such coordinate"))
    }

    /// Replace missing coordinates with zero and clamp the rest into range.
    ///
    /// A not-a-number hue also zeroes chroma or saturation, since such a
    /// color is gray. Lightness of Oklab and Oklch clamps to `0..=1`.
    ///
    /// ```
    /// # use prettyramp::{Color, Float};
    /// let gray = Color::oklch(0.5, 0.1, Float::NAN).normalize();
    /// assert_eq!(gray, Color::oklch(0.5, 0, 0));
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn normalize(&self) -> Self {
        Self::new(self.space, normalize(self.space, &self.coordinates))
    }

    /// Convert into the target color space.
    ///
    /// The coordinates are normalized first. Conversions between unrelated
    /// spaces pass through D65 XYZ, whereas HSL and HSV reach XYZ through
    /// sRGB and the polar spaces through their Cartesian twins.
    ///
    /// ```
    /// # use prettyramp::{Color, ColorSpace};
    /// let green = Color::srgb(0, 1, 0);
    /// assert_eq!(green.to(ColorSpace::Hsl), Color::hsl(120, 100, 50));
    /// assert_eq!(green.to(ColorSpace::Hsv), Color::hsv(120, 100, 100));
    ///
    /// let gray = Color::from_24bit(0x80, 0x80, 0x80).to(ColorSpace::Hsl);
    /// assert!(gray[0].is_nan());
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the pixel bytes for this color.
    ///
    /// Out-of-gamut colors clamp to the sRGB cube. Every gradient renders
    /// through this method.
    ///
    /// ```
    /// # use prettyramp::Color;
    /// let red = Color::oklch(0.627955, 0.257683, 29.2339);
    /// assert_eq!(red.to_24bit(), [255, 0, 0]);
    /// assert_eq!(Color::srgb(1.2, 0.5, -0.1).to_24bit(), [255, 128, 0]);
    /// ```
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(ColorSpace::Srgb, self.to(ColorSpace::Srgb).as_ref())
    }

    /// Format as `#rrggbb`.
    ///
    /// ```
    /// # use prettyramp::Color;
    /// assert_eq!(Color::hsl(210, 100, 50).to_hex_format(), "#0080ff");
    /// ```
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Same as [`Debug`](std::fmt::Debug). <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Same as [`Display`](std::fmt::Display). <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Rust-only constructors accept integers as well as floats.
#[cfg(not(feature = "pyffi"))]
impl Color {
    /// Create an sRGB color from bytes. The [`rgb!`](crate::rgb) macro does
    /// the same in const contexts.
    ///
    /// ```
    /// # use prettyramp::Color;
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::srgb(1.0, 0.5764705882352941, 0.0));
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    /// Create an sRGB color.
    pub fn srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Srgb, [r.into(), g.into(), b.into()])
    }

    /// Create a linear sRGB color.
    pub fn linear_srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::LinearSrgb, [r.into(), g.into(), b.into()])
    }

    /// Create an HSL color from a hue in degrees plus saturation and
    /// lightness in percent.
    ///
    /// ```
    /// # use prettyramp::Color;
    /// assert_eq!(Color::hsl(30, 100, 50).to_24bit(), [255, 128, 0]);
    /// ```
    pub fn hsl(h: impl Into<Float>, s: impl Into<Float>, l: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Hsl, [h.into(), s.into(), l.into()])
    }

    /// Create an HSV color from a hue in degrees plus saturation and value
    /// in percent.
    pub fn hsv(h: impl Into<Float>, s: impl Into<Float>, v: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Hsv, [h.into(), s.into(), v.into()])
    }

    /// Create a D65 XYZ color.
    pub fn xyz(x: impl Into<Float>, y: impl Into<Float>, z: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Xyz, [x.into(), y.into(), z.into()])
    }

    /// Create a D65 CIELAB color.
    pub fn lab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Lab, [l.into(), a.into(), b.into()])
    }

    /// Create a D65 CIELCh color.
    pub fn lch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Lch, [l.into(), c.into(), h.into()])
    }

    /// Create an Oklab color.
    pub fn oklab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklab, [l.into(), a.into(), b.into()])
    }

    /// Create an Oklch color.
    ///
    /// ```
    /// # use prettyramp::{Color, ColorSpace};
    /// let olive = Color::oklch(0.59, 0.1351, 126);
    /// assert_eq!(olive.space(), ColorSpace::Oklch);
    /// ```
    pub fn oklch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklch, [l.into(), c.into(), h.into()])
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Parse a color, ignoring case and surrounding white space.
    ///
    /// Accepted notations:
    ///
    ///   * a CSS color name, e.g., `rebeccapurple`;
    ///   * `#rgb` or `#rrggbb`;
    ///   * `rgb()`, `hsl()`, `lab()`, `lch()`, `oklab()`, `oklch()`, and
    ///     `cmyk()` with four arguments;
    ///   * `color()` with `srgb`, `linear-srgb`, `xyz`, `xyz-d65`, `xyz-d50`,
    ///     or `--hsv`.
    ///
    /// Arguments are separated by spaces or commas. `none` stands for a
    /// missing coordinate. A trailing `%` scales by the coordinate's
    /// reference range, e.g., 255 for `rgb()` bytes, and hues accept `deg`,
    /// `grad`, `rad`, or `turn`.
    ///
    /// ```
    /// # use prettyramp::Color;
    /// # use prettyramp::error::ColorFormatError;
    /// let navy: Color = "navy".parse()?;
    /// assert_eq!(navy, Color::from_24bit(0, 0, 128));
    /// assert_eq!("rgb(0, 0, 128)".parse::<Color>()?, navy);
    /// assert_eq!("#000080".parse::<Color>()?, navy);
    ///
    /// let teal: Color = "hsl(0.5turn 100% 25%)".parse()?;
    /// assert_eq!(teal, Color::hsl(180, 100, 25));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (space, coordinates) = parse(s)?;
        Ok(Self::new(space, coordinates))
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Read one coordinate.
    ///
    /// # Panics
    ///
    /// If `index` is 3 or more.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);
        to_eq_coordinates(self.space, &self.coordinates).hash(state);
    }
}

impl PartialEq for Color {
    /// Compare space and rounded, normalized coordinates.
    ///
    /// ```
    /// # use prettyramp::{Color, Float};
    /// let delta = 2.0 * (10.0 as Float).powi(-(Float::DIGITS as i32));
    /// assert_eq!(
    ///     Color::srgb(Float::NAN, 4.0 * delta, 0.12 + delta),
    ///     Color::srgb(0,          5.0 * delta, 0.12        )
    /// );
    ///
    /// assert_eq!(Color::oklch(0.5, 0.1, 665), Color::oklch(0.5, 0.1, 305));
    /// assert_eq!(Color::hsl(-90, 50, 50), Color::hsl(270, 50, 50));
    /// assert_ne!(Color::srgb(0, 0, 0), Color::xyz(0, 0, 0));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        self.space == other.space
            && (self.coordinates == other.coordinates
                || to_eq_coordinates(self.space, &self.coordinates)
                    == to_eq_coordinates(other.space, &other.coordinates))
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        write!(f, "Color({:?}, [{}, {}, {}])", self.space, c1, c2, c3)
    }
}

impl std::fmt::Display for Color {
    /// Write CSS notation.
    ///
    /// The formatter's precision sets the number of fractional digits, 5 by
    /// default and two fewer for hues. Trailing zeros are dropped and a
    /// missing coordinate prints as `none`.
    ///
    /// ```
    /// # use prettyramp::{Color, ColorSpace::*, Float};
    /// # use prettyramp::error::ColorFormatError;
    /// let lime: Color = "#a1d2ae".parse()?;
    /// assert_eq!(format!("{}", lime), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", lime), "color(srgb 0.631 0.824 0.682)");
    /// assert_eq!(format!("{}", lime.to(Oklch)), "oklch(0.81945 0.07179 152.812)");
    ///
    /// let gray = Color::oklch(0.665, 0, Float::NAN);
    /// assert_eq!(format!("{}", gray), "oklch(0.665 0 none)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// ====================================================================================================================
