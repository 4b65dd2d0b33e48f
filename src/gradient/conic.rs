use super::{AngleSpec, Canvas, Gradient, GradientOptions, Palette, PointSpec, Ramp};
use crate::error::GradientError;
use crate::Float;

/// A conic gradient.
///
/// The gradient sweeps clockwise around its center, starting at the baseline
/// given by its angle, which defaults to the top. Since the gradient is
/// periodic, the ramp always has one color per degree, independent of the
/// canvas's size.
#[derive(Clone, Debug, PartialEq)]
pub struct ConicGradient {
    ramp: Ramp,
    angle: AngleSpec,
    center: PointSpec,
}

impl ConicGradient {
    /// The number of colors in the ramp.
    pub const DEGREES: usize = 360;

    /// Create a new conic gradient.
    pub fn new(options: GradientOptions) -> Result<Self, GradientError> {
        let finalized = options.finalize()?;
        Ok(Self {
            ramp: finalized.ramp,
            angle: finalized.angle,
            center: finalized.center,
        })
    }

    /// Get the angle of the baseline.
    pub fn angle(&self) -> AngleSpec {
        self.angle
    }

    /// Get the center.
    pub fn center(&self) -> PointSpec {
        self.center
    }
}

impl Gradient for ConicGradient {
    fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let bounds = canvas.bounds();
        let center = self.center.resolve(&bounds);
        let baseline = self.angle.resolve_around(&bounds, center);
        let palette = Palette::new(&self.ramp, Self::DEGREES);

        log::trace!(
            "rendering {} pixels around {:?} from {:.3} across {:?}",
            palette.len(),
            center,
            baseline,
            bounds
        );

        for y in bounds.min_y..bounds.max_y {
            for x in bounds.min_x..bounds.max_x {
                let dx = (i64::from(x) - i64::from(center.x)) as Float;
                let dy = (i64::from(y) - i64::from(center.y)) as Float;
                let index = degree_index(dy.atan2(dx) + baseline);
                canvas.set_pixel(x, y, palette.at(index as i64));
            }
        }
    }
}

/// Slack for whole degrees that land a rounding error short after adding
/// full turns.
const DEGREE_SLACK: Float = 1e-9;

/// Map an angle in radians to a whole degree in `0..360`.
fn degree_index(radians: Float) -> usize {
    let degrees = radians.to_degrees().rem_euclid(ConicGradient::DEGREES as Float);
    (degrees + DEGREE_SLACK).floor() as usize % ConicGradient::DEGREES
}
