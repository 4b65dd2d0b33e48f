#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// A choice of strategy for interpolating hues.
///
/// Since hues are expressed as angles, the same perceptual hue has an infinite
/// number of representations modulo 360. Furthermore, there are two ways of
/// traveling between two hues, clockwise and counter-clockwise. Consistent
/// with [CSS Color 4](https://www.w3.org/TR/css-color-4/#hue-interpolation),
/// the interpolation strategy selects the arc based either on its length,
/// [`HueInterpolation::Shorter`] and [`HueInterpolation::Longer`], or on its
/// direction, [`HueInterpolation::Increasing`] and
/// [`HueInterpolation::Decreasing`].
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettyramp.color")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HueInterpolation {
    /// Take the shorter arc between the two hue angles.
    #[default]
    Shorter,
    /// Take the longer arc between the two hue angles.
    Longer,
    /// Keep increasing hue angles.
    Increasing,
    /// Keep decreasing hue angles.
    Decreasing,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl HueInterpolation {
    /// Determine the arc from the start to the end hue.
    ///
    /// This method returns the direction, `1.0` for increasing and `-1.0` for
    /// decreasing hues, and the angle of the arc in degrees. Walking the arc
    /// from the start hue in the given direction ends up at the end hue modulo
    /// 360. Hues need not be normalized, but they must be numbers.
    ///
    /// ```
    /// # use prettyramp::HueInterpolation;
    /// assert_eq!(HueInterpolation::Shorter.arc(350.0, 10.0), (1.0, 20.0));
    /// assert_eq!(HueInterpolation::Longer.arc(350.0, 10.0), (-1.0, 340.0));
    /// ```
    pub fn arc(&self, start: Float, end: Float) -> (Float, Float) {
        let diff = (end - start).rem_euclid(360.0);

        match self {
            Self::Shorter => {
                if diff <= 180.0 {
                    (1.0, diff)
                } else {
                    (-1.0, 360.0 - diff)
                }
            }
            Self::Longer => {
                if diff <= 180.0 {
                    (-1.0, 360.0 - diff)
                } else {
                    (1.0, diff)
                }
            }
            Self::Increasing => (1.0, diff),
            Self::Decreasing => (-1.0, (start - end).rem_euclid(360.0)),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Linearly interpolate between two quantities.
///
/// A fraction outside `0..=1` extrapolates.
#[inline]
pub fn lerp(start: Float, end: Float, fraction: Float) -> Float {
    start * (1.0 - fraction) + end * fraction
}

/// Linearly interpolate between two bytes, rounding to the nearest byte.
///
/// Results outside the byte range saturate.
#[inline]
pub fn lerp_u8(start: u8, end: u8, fraction: Float) -> u8 {
    lerp(start as Float, end as Float, fraction).round() as u8
}

/// Linearly interpolate between two integers, rounding to the nearest integer.
#[inline]
pub fn lerp_int(start: i32, end: i32, fraction: Float) -> i32 {
    lerp(start as Float, end as Float, fraction).round() as i32
}

#[cfg(test)]
mod test {
    use super::{lerp, lerp_int, lerp_u8, HueInterpolation};
    use crate::Float;

    fn lands_on_end(strategy: HueInterpolation, start: Float, end: Float) {
        let (direction, angle) = strategy.arc(start, end);
        assert!((0.0..=360.0).contains(&angle), "{:?} {}", strategy, angle);
        let landing = (start + direction * angle).rem_euclid(360.0);
        let delta = (landing - end.rem_euclid(360.0)).abs();
        assert!(delta < 1e-9 || (360.0 - delta) < 1e-9, "{} vs {}", landing, end);
    }

    #[test]
    fn test_arc() {
        use HueInterpolation::*;

        assert_eq!(Shorter.arc(350.0, 10.0), (1.0, 20.0));
        assert_eq!(Shorter.arc(10.0, 350.0), (-1.0, 20.0));
        assert_eq!(Shorter.arc(0.0, 180.0), (1.0, 180.0));
        assert_eq!(Longer.arc(350.0, 10.0), (-1.0, 340.0));
        assert_eq!(Longer.arc(10.0, 350.0), (1.0, 340.0));
        assert_eq!(Longer.arc(0.0, 0.0), (-1.0, 360.0));
        assert_eq!(Increasing.arc(350.0, 10.0), (1.0, 20.0));
        assert_eq!(Increasing.arc(10.0, 350.0), (1.0, 340.0));
        assert_eq!(Decreasing.arc(350.0, 10.0), (-1.0, 340.0));
        assert_eq!(Decreasing.arc(10.0, 350.0), (-1.0, 20.0));
        assert_eq!(Shorter.arc(-30.0, 390.0), (1.0, 60.0));
    }

    #[test]
    fn test_arc_lands_on_end() {
        use HueInterpolation::*;

        for strategy in [Shorter, Longer, Increasing, Decreasing] {
            for (start, end) in [(0.0, 0.0), (0.0, 90.0), (270.0, 45.0), (123.0, 303.0), (-45.0, 700.0)] {
                lands_on_end(strategy, start, end);
            }
        }
    }

    #[test]
    fn test_shorter_and_longer_complement() {
        for (start, end) in [(0.0, 90.0), (350.0, 10.0), (120.0, 240.0), (5.0, 200.0)] {
            let (d1, a1) = HueInterpolation::Shorter.arc(start, end);
            let (d2, a2) = HueInterpolation::Longer.arc(start, end);
            assert!(a1 <= 180.0);
            assert_eq!(a1 + a2, 360.0);
            assert_eq!(d1, -d2);
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 8.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 8.0, 1.0), 8.0);
        assert_eq!(lerp(2.0, 8.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 8.0, 1.5), 11.0);
        assert_eq!(lerp_u8(255, 0, 0.5), 128);
        assert_eq!(lerp_u8(0, 255, 0.0), 0);
        assert_eq!(lerp_u8(0, 255, 1.0), 255);
        assert_eq!(lerp_u8(10, 20, 0.25), 13);
        assert_eq!(lerp_int(-10, 10, 0.5), 0);
        assert_eq!(lerp_int(100, 0, 0.3), 70);
    }
}
