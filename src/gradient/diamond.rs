use super::{render_by_distance, Canvas, Gradient, GradientOptions, PointSpec, Ramp};
use crate::error::GradientError;

/// A diamond gradient.
///
/// Like a [`RadialGradient`](super::RadialGradient), but measuring Manhattan
/// distance, which results in diamond-shaped contours.
#[derive(Clone, Debug, PartialEq)]
pub struct DiamondGradient {
    ramp: Ramp,
    center: PointSpec,
}

impl DiamondGradient {
    /// Create a new diamond gradient.
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

impl Gradient for DiamondGradient {
    fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        render_by_distance(&self.ramp, self.center, canvas, |dx, dy| {
            dx.saturating_abs().saturating_add(dy.saturating_abs())
        });
    }
}
