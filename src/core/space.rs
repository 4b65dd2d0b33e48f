#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// The enumeration of supported color spaces.
///
/// # RGB and Its Cylinders
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) has long served as the default
/// color space for the web and is the color space of 24-bit pixels. It comes
/// in gamma-corrected and linear form; for both, in-gamut coordinates range
/// from 0 to 1, inclusive.
///
/// [HSL and HSV](https://en.wikipedia.org/wiki/HSL_and_HSV) are cylindrical
/// reshufflings of gamma-corrected sRGB. Their first coordinate is the hue in
/// degrees, their second and third coordinates are saturation and
/// lightness/value in percent, i.e., ranging `0..=100`. That matches the
/// notation familiar from CSS.
///
/// # CIE Color Spaces
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as
/// foundational color space. All conversions between unrelated color spaces go
/// through XYZ with the D65 standard illuminant. XYZ with the D50 standard
/// illuminant is available, too. Chromatic adaptation between the two uses the
/// (linear) Bradford method.
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) and its polar
/// form CIELCh use lightness `0..=100` and two colorness coordinates. This
/// crate relates them to the D65 [`Whitepoint`]. Gradients may interpolate
/// relative to another whitepoint, but their results are always reported
/// relative to D65.
///
/// # The Oklab Variations
///
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) improve on CIELAB by
/// using the D65 standard illuminant and by avoiding visible distortions around
/// the blues. Lightness ranges `0..=1`, a/b in practice `-0.4..=0.4`, and
/// chroma `0..=0.4`.
///
/// # Hues
///
/// HSL, HSV, CIELCh, and Oklch are polar color spaces. Their hue may be
/// not-a-number, which indicates a powerless component, i.e., a gray tone. For
/// HSL and HSV, the hue is the first coordinate, for CIELCh and Oklch the
/// third one, as reported by [`ColorSpace::hue_index`].
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettyramp.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Hsl,
    Hsv,
    Xyz,
    XyzD50,
    Lab,
    Lch,
    Oklab,
    Oklch,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space is polar.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Hsv | Self::Lch | Self::Oklch)
    }

    /// Determine the index of the hue coordinate, if this color space has one.
    pub const fn hue_index(&self) -> Option<usize> {
        match *self {
            Self::Hsl | Self::Hsv => Some(0),
            Self::Lch | Self::Oklch => Some(2),
            _ => None,
        }
    }

    /// Determine whether this color space is Oklab or Oklch, whose lightness
    /// is bounded by `0..=1`.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Oklab | Self::Oklch)
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Hsl => "HSL",
            Hsv => "HSV",
            Xyz => "XYZ D65",
            XyzD50 => "XYZ D50",
            Lab => "CIELAB",
            Lch => "CIELCh",
            Oklab => "Oklab",
            Oklch => "Oklch",
        };

        f.write_str(s)
    }
}

// ====================================================================================================================

/// A reference white.
///
/// The whitepoint determines which XYZ tristimulus values CIELAB considers
/// white. Its coordinates use the same scale as [`ColorSpace::Xyz`], i.e., the
/// luminance Y of white is 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Whitepoint([Float; 3]);

impl Whitepoint {
    /// The D65 standard illuminant, which is the reference white of sRGB and
    /// Oklab and hence the default.
    #[allow(clippy::excessive_precision)]
    pub const D65: Whitepoint = Whitepoint([
        0.9504559270516717 as Float,
        1.0,
        1.0890577507598784 as Float,
    ]);

    /// The D50 standard illuminant, which is the reference white of print.
    #[allow(clippy::excessive_precision)]
    pub const D50: Whitepoint = Whitepoint([
        0.9642956764295678 as Float,
        1.0,
        0.8251046025104604 as Float,
    ]);

    /// Create a new whitepoint with the given XYZ coordinates.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }

    /// Determine whether this whitepoint is D65.
    pub fn is_d65(&self) -> bool {
        *self == Self::D65
    }
}

impl Default for Whitepoint {
    fn default() -> Self {
        Self::D65
    }
}

impl AsRef<[Float; 3]> for Whitepoint {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}
