//! Utility module with prettyramp's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An invalid gradient configuration.
///
/// [`GradientOptions::finalize`](crate::gradient::GradientOptions::finalize)
/// and hence every gradient shape's constructor return this error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GradientError {
    /// A gradient with fewer than two color stops. The variant records the
    /// number of stops actually given.
    TooFewStops { count: usize },
}

impl std::fmt::Display for GradientError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::TooFewStops { .. } => {
                f.write_str("gradient must contain at least two color stops")
            }
        }
    }
}

impl std::error::Error for GradientError {}

#[cfg(feature = "pyffi")]
impl From<GradientError> for PyErr {
    fn from(value: GradientError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// A string that does not parse as a color.
///
/// All variants are unit variants so that they map onto a PyO3 enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// Neither a hashed hexadecimal color, a color name, nor a function.
    UnknownFormat,

    /// A word that is not one of the CSS color names, e.g., `nemo`.
    UnknownColorName,

    /// A hashed color with a wrong number of digits, e.g., `#00`, or with
    /// non-ASCII characters.
    UnexpectedCharacters,

    /// A closing parenthesis without an opening one, e.g., `rgb 0 0 0)`.
    NoOpeningParenthesis,

    /// An opening parenthesis without a closing one, e.g., `oklab(1 2 3`.
    NoClosingParenthesis,

    /// A `color()` function naming an unsupported space, e.g.,
    /// `color(display-p3 1 1 1)`.
    UnknownColorSpace,

    /// Too few arguments, e.g., `lab(50 0)` or `cmyk(0 0 0)`.
    MissingCoordinate,

    /// A hashed color with a non-hexadecimal digit, e.g., `#efg`.
    MalformedHex,

    /// An argument that is not a number with an acceptable unit, e.g.,
    /// `rgb(r g b)` or `hsl(120% 1 1)`.
    MalformedFloat,

    /// Too many arguments, e.g., `rgb(11 22 33 44)`.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        let message = match self {
            UnknownFormat => "color should be a name, `#` plus hex digits, or a function such as `rgb()`",
            UnknownColorName => "color name is not a CSS named color",
            UnexpectedCharacters => "hashed color should have 3 or 6 ASCII hex digits",
            NoOpeningParenthesis => "color function is missing its opening parenthesis",
            NoClosingParenthesis => "color function is missing its closing parenthesis",
            UnknownColorSpace => "color() names an unsupported color space",
            MissingCoordinate => "color function has too few arguments",
            MalformedHex => "hashed color contains a digit that is not hexadecimal",
            MalformedFloat => "color function argument is not a valid number",
            TooManyCoordinates => "color function has too many arguments",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
