use super::{render_by_distance, Canvas, Gradient, GradientOptions, PointSpec, Ramp};
use crate::error::GradientError;

/// A radial gradient.
///
/// The gradient radiates from its center, which defaults to the center of the
/// canvas, and ends at the furthest corner. Pixels are indexed by their
/// squared distance from the center, which avoids square roots and devotes
/// more colors to the area around the center. Very distant corners exceed
/// the largest supported ramp, which is then stretched over the distances.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    ramp: Ramp,
    center: PointSpec,
}

impl RadialGradient {
    /// Create a new radial gradient.
    ///
    /// This method ignores the angle.
    pub fn new(options: GradientOptions) -> Result<Self, GradientError> {
        let finalized = options.finalize()?;
        Ok(Self {
            ramp: finalized.ramp,
            center: finalized.center,
        })
    }

    /// Get the center.
    pub fn center(&self) -> PointSpec {
        self.center
    }
}

impl Gradient for RadialGradient {
    fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        render_by_distance(&self.ramp, self.center, canvas, |dx, dy| {
            dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
        });
    }
}
