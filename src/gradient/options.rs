use log::debug;

use super::{AngleSpec, ColorStop, Direction, GradientSpace, PointSpec};
use crate::core::{HueInterpolation, Whitepoint};
use crate::error::GradientError;
use crate::{Color, Float};

/// The configuration of a gradient.
///
/// Options start out empty and are assembled fluently. Each `with_` or `in_`
/// method consumes and returns the options. Angles and directions replace
/// each other, as do absolute and relative centers, and the different
/// interpolation spaces. The most recent invocation wins.
///
/// ```
/// # use prettyramp::gradient::{Direction, GradientOptions, GradientSpace};
/// # use prettyramp::{Color, HueInterpolation};
/// let options = GradientOptions::new()
///     .with_color_stop(Color::from_24bit(255, 0, 0), 0.2)
///     .with_color_stop(Color::from_24bit(0, 0, 255), 1.5)
///     .with_direction(Direction::Left)
///     .in_oklch(HueInterpolation::Longer);
///
/// let finalized = options.finalize()?;
/// let stops = finalized.ramp().stops();
/// assert_eq!(stops.len(), 3);
/// assert_eq!(stops[0].position(), 0.0);
/// assert_eq!(stops[2].position(), 1.0);
/// assert_eq!(
///     finalized.ramp().space(),
///     GradientSpace::Oklch(HueInterpolation::Longer)
/// );
/// # Ok::<(), prettyramp::error::GradientError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct GradientOptions {
    stops: Vec<ColorStop>,
    space: Option<GradientSpace>,
    angle: Option<AngleSpec>,
    center: Option<PointSpec>,
}

impl GradientOptions {
    /// Create new, empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a color stop. The position is clamped to `0..=1`.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn with_color_stop(mut self, color: Color, position: Float) -> Self {
        self.stops.push(ColorStop::new(color, position));
        self
    }

    /// Use the given angle in degrees, with 0° pointing to the top and angles
    /// increasing clockwise. For linear gradients, the angle is the direction
    /// of the color transition. For conic gradients, it is the baseline.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn with_angle(mut self, degrees: Float) -> Self {
        self.angle = Some(AngleSpec::Degrees(degrees.rem_euclid(360.0)));
        self
    }

    /// Use the given direction.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.angle = Some(AngleSpec::Direction(direction));
        self
    }

    /// Center radial, diamond, and conic gradients at the given pixel.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn with_center_at(mut self, x: i32, y: i32) -> Self {
        self.center = Some(PointSpec::Absolute { x, y });
        self
    }

    /// Center radial, diamond, and conic gradients at the given fractions of
    /// the canvas's width and height.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn with_relative_center(mut self, x: Float, y: Float) -> Self {
        self.center = Some(PointSpec::Relative { x, y });
        self
    }

    /// Interpolate 24-bit sRGB.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn in_rgb(self) -> Self {
        self.in_colorspace(GradientSpace::Rgb)
    }

    /// Interpolate HSL with the given hue interpolation.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn in_hsl(self, strategy: HueInterpolation) -> Self {
        self.in_colorspace(GradientSpace::Hsl(strategy))
    }

    /// Interpolate HSV with the given hue interpolation.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn in_hsv(self, strategy: HueInterpolation) -> Self {
        self.in_colorspace(GradientSpace::Hsv(strategy))
    }

    /// Interpolate XYZ relative to the given whitepoint.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn in_xyz(self, white: Whitepoint) -> Self {
        self.in_colorspace(GradientSpace::Xyz(white))
    }

    /// Interpolate CIELAB relative to the given whitepoint.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn in_lab(self, white: Whitepoint) -> Self {
        self.in_colorspace(GradientSpace::Lab(white))
    }

    /// Interpolate CIELCh with the given hue interpolation and relative to the
    /// given whitepoint.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn in_lch(self, strategy: HueInterpolation, white: Whitepoint) -> Self {
        self.in_colorspace(GradientSpace::Lch(strategy, white))
    }

    /// Interpolate Oklab.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn in_oklab(self) -> Self {
        self.in_colorspace(GradientSpace::Oklab)
    }

    /// Interpolate Oklch with the given hue interpolation.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn in_oklch(self, strategy: HueInterpolation) -> Self {
        self.in_colorspace(GradientSpace::Oklch(strategy))
    }

    /// Interpolate in the given space.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub fn in_colorspace(mut self, space: GradientSpace) -> Self {
        self.space = Some(space);
        self
    }

    /// Validate and normalize these options.
    ///
    /// This method fails if there are fewer than two color stops. Otherwise,
    /// it sorts the stops by position, retaining the order of stops with the
    /// same position. If the first stop is not at position 0 or the last stop
    /// not at position 1, it adds a stop there with the same color. Finally,
    /// it falls back on RGB, the top, and the center.
    pub fn finalize(self) -> Result<Finalized, GradientError> {
        let Self {
            mut stops,
            space,
            angle,
            center,
        } = self;

        if stops.len() < 2 {
            return Err(GradientError::TooFewStops { count: stops.len() });
        }

        stops.sort_by(|s1, s2| s1.position().total_cmp(&s2.position()));

        if let Some(first) = stops.first() {
            if 0.0 < first.position() {
                debug!("adding color stop at 0 for {}", first.color());
                stops.insert(0, ColorStop::new(first.color().clone(), 0.0));
            }
        }

        if let Some(last) = stops.last() {
            if last.position() < 1.0 {
                debug!("adding color stop at 1 for {}", last.color());
                stops.push(ColorStop::new(last.color().clone(), 1.0));
            }
        }

        let space = space.unwrap_or_else(|| {
            debug!("interpolating gradient in default RGB");
            GradientSpace::default()
        });

        Ok(Finalized {
            ramp: Ramp { stops, space },
            angle: angle.unwrap_or_default(),
            center: center.unwrap_or_default(),
        })
    }
}

// ====================================================================================================================

/// A sorted and complete list of color stops together with the space for
/// interpolating between them.
///
/// Ramps are created by [`GradientOptions::finalize`] and hence always have
/// at least two stops, with the first stop at position 0 and the last stop at
/// position 1.
#[derive(Clone, Debug, PartialEq)]
pub struct Ramp {
    stops: Vec<ColorStop>,
    space: GradientSpace,
}

impl Ramp {
    /// Access the color stops.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Access the interpolation space.
    pub fn space(&self) -> GradientSpace {
        self.space
    }

    /// Compute about `steps` colors covering the entire ramp.
    pub fn colors(&self, steps: usize) -> Vec<Color> {
        self.space.colors(&self.stops, steps)
    }

    /// Access the color of the first stop.
    pub(crate) fn first_color(&self) -> Option<&Color> {
        self.stops.first().map(ColorStop::color)
    }
}

/// Validated and normalized gradient options.
#[derive(Clone, Debug, PartialEq)]
pub struct Finalized {
    pub(crate) ramp: Ramp,
    pub(crate) angle: AngleSpec,
    pub(crate) center: PointSpec,
}

impl Finalized {
    /// Access the ramp.
    pub fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    /// Access the angle.
    pub fn angle(&self) -> AngleSpec {
        self.angle
    }

    /// Access the center.
    pub fn center(&self) -> PointSpec {
        self.center
    }
}

#[cfg(test)]
mod test {
    use super::GradientOptions;
    use crate::core::{HueInterpolation, Whitepoint};
    use crate::error::GradientError;
    use crate::gradient::{AngleSpec, Direction, GradientSpace, PointSpec};
    use crate::Color;

    fn red() -> Color {
        Color::from_24bit(255, 0, 0)
    }

    fn blue() -> Color {
        Color::from_24bit(0, 0, 255)
    }

    #[test]
    fn test_too_few_stops() {
        assert_eq!(
            GradientOptions::new().finalize(),
            Err(GradientError::TooFewStops { count: 0 })
        );
        assert_eq!(
            GradientOptions::new().with_color_stop(red(), 0.0).finalize(),
            Err(GradientError::TooFewStops { count: 1 })
        );
    }

    #[test]
    fn test_defaults() -> Result<(), GradientError> {
        let finalized = GradientOptions::new()
            .with_color_stop(red(), 0.0)
            .with_color_stop(blue(), 1.0)
            .finalize()?;

        assert_eq!(finalized.ramp().stops().len(), 2);
        assert_eq!(finalized.ramp().space(), GradientSpace::Rgb);
        assert_eq!(finalized.angle(), AngleSpec::Direction(Direction::Top));
        assert_eq!(finalized.center(), PointSpec::Relative { x: 0.5, y: 0.5 });
        Ok(())
    }

    #[test]
    fn test_sorting_and_boundaries() -> Result<(), GradientError> {
        let green = Color::from_24bit(0, 255, 0);
        let finalized = GradientOptions::new()
            .with_color_stop(blue(), 0.8)
            .with_color_stop(red(), 0.3)
            .with_color_stop(green.clone(), 0.3)
            .finalize()?;

        let stops = finalized.ramp().stops();
        let positions: Vec<_> = stops.iter().map(|s| s.position()).collect();
        assert_eq!(positions, vec![0.0, 0.3, 0.3, 0.8, 1.0]);
        assert_eq!(stops[0].color(), &red());
        assert_eq!(stops[1].color(), &red());
        assert_eq!(stops[2].color(), &green);
        assert_eq!(stops[4].color(), &blue());
        Ok(())
    }

    #[test]
    fn test_last_writer_wins() -> Result<(), GradientError> {
        let finalized = GradientOptions::new()
            .with_color_stop(red(), 0.0)
            .with_color_stop(blue(), 1.5)
            .with_angle(-90.0)
            .with_center_at(3, 4)
            .in_hsl(HueInterpolation::Decreasing)
            .with_direction(Direction::BottomLeft)
            .with_relative_center(0.25, 0.75)
            .in_lch(HueInterpolation::Longer, Whitepoint::D50)
            .finalize()?;

        assert_eq!(finalized.ramp().stops()[1].position(), 1.0);
        assert_eq!(finalized.angle(), AngleSpec::Direction(Direction::BottomLeft));
        assert_eq!(finalized.center(), PointSpec::Relative { x: 0.25, y: 0.75 });
        assert_eq!(
            finalized.ramp().space(),
            GradientSpace::Lch(HueInterpolation::Longer, Whitepoint::D50)
        );

        let finalized = GradientOptions::new()
            .with_color_stop(red(), 0.0)
            .with_color_stop(blue(), 1.0)
            .with_angle(-90.0)
            .finalize()?;
        assert_eq!(finalized.angle(), AngleSpec::Degrees(270.0));
        Ok(())
    }
}
