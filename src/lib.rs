//! # Pretty 🌈 Ramp
//!
//! Prettyramp computes color gradients and renders them into pixel buffers.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Prettyramp's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates. It converts between
//!     sRGB, linear sRGB, HSL, HSV, XYZ, CIELAB, CIELCh, Oklab, and Oklch. It
//!     parses CSS color names, hashed hexadecimal, and function notations,
//!     and it formats CSS-like notations. [`Cmyk`] converts to and from print
//!     percentages.
//!   * The [`gradient`] module combines **color stops** with a
//!     [`GradientSpace`](gradient::GradientSpace) for interpolating between
//!     them. The interpolation spaces include byte-wise RGB, HSL and HSV with
//!     integral coordinates, floating point XYZ, CIELAB, and Oklab, as well as
//!     CIELCh and Oklch. Cylindrical spaces take one of four arcs around the
//!     hue circle as selected by a [`HueInterpolation`].
//!   * The four **gradient shapes**
//!     [`LinearGradient`](gradient::LinearGradient),
//!     [`RadialGradient`](gradient::RadialGradient),
//!     [`DiamondGradient`](gradient::DiamondGradient), and
//!     [`ConicGradient`](gradient::ConicGradient) render into any
//!     [`Canvas`](gradient::Canvas), notably `image`'s RGB and RGBA buffers.
//!
//!
//! ## 2. One-Two-Three: Gradients!
//!
//! First, assemble the [`GradientOptions`](gradient::GradientOptions):
//!
//! ```
//! # use prettyramp::{Color, HueInterpolation};
//! # use prettyramp::gradient::{Direction, GradientOptions};
//! let options = GradientOptions::new()
//!     .with_color_stop(Color::from_24bit(255, 94, 98), 0.0)
//!     .with_color_stop(Color::from_24bit(36, 123, 160), 1.0)
//!     .with_direction(Direction::Right)
//!     .in_oklch(HueInterpolation::Shorter);
//! # let _ = options;
//! ```
//!
//! Second, create the gradient. Creation fails with a
//! [`GradientError`](error::GradientError) if there are fewer than two color
//! stops:
//!
//! ```
//! # use prettyramp::{Color, HueInterpolation};
//! # use prettyramp::gradient::{Direction, GradientOptions, LinearGradient};
//! # let options = GradientOptions::new()
//! #     .with_color_stop(Color::from_24bit(255, 94, 98), 0.0)
//! #     .with_color_stop(Color::from_24bit(36, 123, 160), 1.0)
//! #     .with_direction(Direction::Right)
//! #     .in_oklch(HueInterpolation::Shorter);
//! let gradient = LinearGradient::new(options)?;
//! # Ok::<(), prettyramp::error::GradientError>(())
//! ```
//!
//! Third, render the gradient:
//!
//! ```
//! # use prettyramp::{Color, HueInterpolation};
//! # use prettyramp::gradient::{Direction, Gradient, GradientOptions, LinearGradient};
//! # use image::RgbaImage;
//! # let options = GradientOptions::new()
//! #     .with_color_stop(Color::from_24bit(255, 94, 98), 0.0)
//! #     .with_color_stop(Color::from_24bit(36, 123, 160), 1.0)
//! #     .with_direction(Direction::Right)
//! #     .in_oklch(HueInterpolation::Shorter);
//! # let gradient = LinearGradient::new(options)?;
//! let mut image = RgbaImage::new(64, 16);
//! gradient.render(&mut image);
//! assert_eq!(image.get_pixel(0, 8).0, [255, 94, 98, 255]);
//! assert_eq!(image.get_pixel(63, 8).0, [36, 123, 160, 255]);
//! # Ok::<(), prettyramp::error::GradientError>(())
//! ```
//!
//! Gradients also produce colors without rendering, with
//! [`Gradient::colors`](gradient::Gradient::colors).
//!
//!
//! ## 3. Feature Flags
//!
//!   * **`f64`** (default) selects `f64` as [`Float`] and `u64` as [`Bits`].
//!     Without it, they are `f32` and `u32`.
//!   * **`pyffi`** exposes [`Cmyk`], [`Color`], [`ColorSpace`], and
//!     [`HueInterpolation`] to Python through PyO3.
//!
//! Prettyramp logs through the `log` facade but never installs a logger.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod cmyk;
mod core;
pub mod error;
pub mod gradient;
mod object;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use cmyk::Cmyk;
pub use core::{ColorSpace, HueInterpolation, Whitepoint};
pub use object::Color;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Cmyk>()?;
    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<HueInterpolation>()?;
    Ok(())
}
