//! Color gradients and their rendering into pixel canvases.
//!
//! A gradient is configured through [`GradientOptions`], which collects
//! [`ColorStop`]s, the [`GradientSpace`] for interpolating between them, and
//! the deferred geometry of [`AngleSpec`] and [`PointSpec`]. One of the four
//! shapes, [`LinearGradient`], [`RadialGradient`], [`DiamondGradient`], or
//! [`ConicGradient`], then validates the options. Thereafter, a gradient is
//! immutable. It computes color ramps with [`Gradient::colors`] and fills
//! [`Canvas`]es, which include `image`'s RGB and RGBA buffers as well as
//! [`Viewport`]s, with [`Gradient::render`].
//!
//! ```
//! # use prettyramp::gradient::{must, Gradient, GradientOptions, RadialGradient};
//! # use prettyramp::Color;
//! # use image::RgbaImage;
//! let gradient = must(RadialGradient::new(
//!     GradientOptions::new()
//!         .with_color_stop(Color::from_24bit(255, 0, 0), 0.0)
//!         .with_color_stop(Color::from_24bit(0, 0, 255), 1.0),
//! ));
//!
//! let mut image = RgbaImage::new(4, 4);
//! gradient.render(&mut image);
//! assert_eq!(image.get_pixel(2, 2).0, [255, 0, 0, 255]);
//! assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255, 255]);
//! ```

mod canvas;
mod conic;
mod diamond;
mod geometry;
mod linear;
mod options;
mod radial;
mod space;
mod stop;

pub use canvas::{Canvas, Viewport};
pub use conic::ConicGradient;
pub use diamond::DiamondGradient;
pub use geometry::{AngleSpec, Direction, Point, PointSpec, Rect};
pub use linear::LinearGradient;
pub use options::{Finalized, GradientOptions, Ramp};
pub use radial::RadialGradient;
pub use space::GradientSpace;
pub use stop::ColorStop;

pub use crate::core::{lerp, lerp_int, lerp_u8};

use crate::error::GradientError;
use crate::Color;

/// A gradient shape.
pub trait Gradient {
    /// Access the sorted color stops and interpolation space.
    fn ramp(&self) -> &Ramp;

    /// Compute about `steps` colors spanning the gradient.
    fn colors(&self, steps: usize) -> Vec<Color> {
        self.ramp().colors(steps)
    }

    /// Fill the canvas with this gradient.
    ///
    /// The gradient's geometry resolves against the canvas's bounds, and every
    /// pixel within those bounds is written exactly once, fully opaque.
    fn render<C: Canvas + ?Sized>(&self, canvas: &mut C);
}

/// Unwrap the result of creating a gradient.
///
/// This function is intended for gradients whose options are known to be
/// valid, for example, because they are literals.
///
/// # Panics
///
/// This function panics if the result is an error.
pub fn must<G>(result: Result<G, GradientError>) -> G {
    match result {
        Ok(gradient) => gradient,
        Err(error) => panic!("invalid gradient: {}", error),
    }
}

// ====================================================================================================================

/// A ramp materialized as opaque pixels.
///
/// Lookups clamp the index into the palette. An empty palette falls back on
/// the first stop's color.
#[derive(Debug)]
pub(crate) struct Palette {
    pixels: Vec<[u8; 4]>,
    fallback: [u8; 4],
}

impl Palette {
    pub fn new(ramp: &Ramp, steps: usize) -> Self {
        let pixels = ramp.colors(steps).iter().map(to_pixel).collect();
        let fallback = ramp.first_color().map_or([0, 0, 0, 255], to_pixel);
        Self { pixels, fallback }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn at(&self, index: i64) -> [u8; 4] {
        let Some(last) = self.pixels.len().checked_sub(1) else {
            return self.fallback;
        };

        let index = usize::try_from(index.max(0)).map_or(last, |i| i.min(last));
        self.pixels[index]
    }
}

fn to_pixel(color: &Color) -> [u8; 4] {
    let [r, g, b] = color.to_24bit();
    [r, g, b, 255]
}

/// The most colors a distance-based ramp materializes. Larger extents are
/// scaled down onto this many entries.
pub(crate) const MAX_PALETTE: i64 = 1 << 20;

/// Render a ramp by distance from the center, with the given metric.
///
/// The metric must saturate instead of overflowing.
pub(crate) fn render_by_distance<C, F>(
    ramp: &Ramp,
    center: PointSpec,
    canvas: &mut C,
    distance: F,
) where
    C: Canvas + ?Sized,
    F: Fn(i64, i64) -> i64,
{
    let bounds = canvas.bounds();
    let center = center.resolve(&bounds);
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    let extent = bounds
        .corners()
        .iter()
        .map(|p| distance(i64::from(p.x) - cx, i64::from(p.y) - cy))
        .fold(0, i64::max);
    let steps = extent.saturating_add(1).min(MAX_PALETTE);
    let palette = Palette::new(ramp, usize::try_from(steps).unwrap_or(1));
    let index = |d: i64| {
        if extent < MAX_PALETTE {
            d
        } else {
            let scaled = i128::from(d) * i128::from(MAX_PALETTE - 1) / i128::from(extent);
            i64::try_from(scaled).unwrap_or(MAX_PALETTE - 1)
        }
    };

    log::trace!(
        "rendering {} pixels from center {:?} of {:?}",
        palette.len(),
        center,
        bounds
    );

    for y in bounds.min_y..bounds.max_y {
        for x in bounds.min_x..bounds.max_x {
            let d = distance(i64::from(x) - cx, i64::from(y) - cy);
            canvas.set_pixel(x, y, palette.at(index(d)));
        }
    }
}

#[cfg(test)]
mod test {
    use super::{must, GradientOptions, Palette, RadialGradient};
    use crate::Color;

    fn options() -> GradientOptions {
        GradientOptions::new()
            .with_color_stop(Color::from_24bit(255, 0, 0), 0.0)
            .with_color_stop(Color::from_24bit(0, 0, 255), 1.0)
    }

    #[test]
    fn test_palette() -> Result<(), crate::error::GradientError> {
        let finalized = options().finalize()?;

        let palette = Palette::new(finalized.ramp(), 3);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.at(-5), [255, 0, 0, 255]);
        assert_eq!(palette.at(1), [128, 0, 128, 255]);
        assert_eq!(palette.at(2), [0, 0, 255, 255]);
        assert_eq!(palette.at(i64::MAX), [0, 0, 255, 255]);

        let empty = Palette::new(finalized.ramp(), 0);
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.at(0), [255, 0, 0, 255]);
        assert_eq!(empty.at(7), [255, 0, 0, 255]);
        Ok(())
    }

    #[test]
    fn test_must() {
        let gradient = must(RadialGradient::new(options()));
        assert_eq!(gradient.center(), Default::default());
    }

    #[test]
    #[should_panic(expected = "invalid gradient: gradient must contain at least two color stops")]
    fn test_must_panic() {
        let _ = must(RadialGradient::new(GradientOptions::new()));
    }

    #[test]
    fn test_send_sync() {
        fn is_send_sync<T: Send + Sync>() {}

        is_send_sync::<super::LinearGradient>();
        is_send_sync::<super::RadialGradient>();
        is_send_sync::<super::DiamondGradient>();
        is_send_sync::<super::ConicGradient>();
    }
}
