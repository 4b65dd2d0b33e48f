//! Print colors with cyan, magenta, yellow, and key percentages.
//!
//! [`Cmyk`] is a conversion target only. No gradient interpolates in it.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{cmyk_to_srgb, srgb_to_cmyk};
use crate::{Color, ColorSpace, Float};

/// A CMYK color with integral percentages.
///
/// Conversion from a [`Color`] goes through gamut-clamped sRGB. Black is
/// `cmyk(0% 0% 0% 100%)`, i.e., all key.
///
/// ```
/// # use prettyramp::{Cmyk, Color};
/// let olive = Cmyk::new(25, 0, 76, 20);
/// assert_eq!(Color::from(olive).to_hex_format(), "#99cc31");
/// assert_eq!(Cmyk::from(&Color::from_24bit(0, 0, 255)), Cmyk::new(100, 100, 0, 0));
/// assert_eq!(olive.to_string(), "cmyk(25% 0% 76% 20%)");
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "prettyramp.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cmyk([u8; 4]);

const fn percent(value: u8) -> u8 {
    if value > 100 {
        100
    } else {
        value
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Cmyk {
    /// Create a new CMYK color from percentages, which saturate at 100. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self([percent(c), percent(m), percent(y), percent(k)])
    }

    /// Create a new CMYK color from the given color. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    pub fn from_color(color: &Color) -> Self {
        Self::from(color)
    }

    /// Convert to an sRGB color. <i class=python-only>Python only!</i>
    pub fn to_color(&self) -> Color {
        Color::from(*self)
    }

    /// Get the four percentages. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [u8; 4] {
        self.0
    }

    /// Get the length, which is 4. <i class=python-only>Python only!</i>
    pub fn __len__(&self) -> usize {
        4
    }

    /// Get the percentage at the given index. <i class=python-only>Python
    /// only!</i>
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -4..=-1 => Ok(self.0[(4 + index) as usize]),
            0..=3 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid percentage index",
            )),
        }
    }

    /// Convert to a debug representation. <i class=python-only>Python
    /// only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert to CSS-like notation. <i class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Cmyk {
    /// Create a new CMYK color from percentages, which saturate at 100.
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self([percent(c), percent(m), percent(y), percent(k)])
    }
}

impl AsRef<[u8; 4]> for Cmyk {
    fn as_ref(&self) -> &[u8; 4] {
        &self.0
    }
}

impl std::ops::Index<usize> for Cmyk {
    type Output = u8;

    /// Access the percentage with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `3 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<&Color> for Cmyk {
    fn from(value: &Color) -> Self {
        let srgb = value.to(ColorSpace::Srgb);
        let [c, m, y, k] = srgb_to_cmyk(srgb.as_ref()).map(|v| (v * 100.0).round() as u8);
        Self::new(c, m, y, k)
    }
}

impl From<Color> for Cmyk {
    fn from(value: Color) -> Self {
        Cmyk::from(&value)
    }
}

impl From<Cmyk> for Color {
    fn from(value: Cmyk) -> Self {
        let fractions = value.0.map(|v| v as Float / 100.0);
        Color::new(ColorSpace::Srgb, cmyk_to_srgb(&fractions))
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c, m, y, k] = self.0;
        write!(f, "cmyk({}% {}% {}% {}%)", c, m, y, k)
    }
}

// ====================================================================================================================
