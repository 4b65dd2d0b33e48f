use crate::{Color, Float};

/// A color anchored at a position along a gradient's axis.
///
/// Positions range `0..=1`. The constructor clamps positions outside that
/// range and treats not-a-number as 0. Several stops may share the same
/// position, which results in an abrupt transition.
///
/// ```
/// # use prettyramp::{gradient::ColorStop, Color};
/// let stop = ColorStop::new(Color::srgb(1, 0, 0), 1.5);
/// assert_eq!(stop.position(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    color: Color,
    position: Float,
}

impl ColorStop {
    /// Create a new color stop.
    pub fn new(color: Color, position: Float) -> Self {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };

        Self { color, position }
    }

    /// Access the color.
    #[inline]
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Access the position.
    #[inline]
    pub fn position(&self) -> Float {
        self.position
    }
}

#[cfg(test)]
mod test {
    use super::ColorStop;
    use crate::{Color, Float};

    #[test]
    fn test_clamping() {
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert_eq!(ColorStop::new(red.clone(), 1.5).position(), 1.0);
        assert_eq!(ColorStop::new(red.clone(), -0.5).position(), 0.0);
        assert_eq!(ColorStop::new(red.clone(), 0.25).position(), 0.25);
        assert_eq!(ColorStop::new(red.clone(), Float::NAN).position(), 0.0);
        assert_eq!(ColorStop::new(red.clone(), 0.5).color(), &red);
    }
}
