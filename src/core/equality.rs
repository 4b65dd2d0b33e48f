use super::ColorSpace;
use crate::core::FloatExt;
use crate::{Bits, Float};

/// Assert that two floats agree once both go through [`to_eq_bits`].
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert_eq!(
            $crate::to_eq_bits(f1),
            $crate::to_eq_bits(f2),
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Assert that two coordinate arrays in one color space denote the same
/// color, comparing the same bits that color equality compares.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        assert_eq!(
            $crate::core::to_eq_coordinates(space, cs1),
            $crate::core::to_eq_coordinates(space, cs2),
            "color coordinates differ:\n{:?}\n{:?}",
            cs1,
            cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Make coordinates safe to compute with.
///
/// Not-a-number becomes zero. In polar spaces a missing hue also zeroes the
/// second coordinate and a negative chroma or saturation becomes zero. Oklab
/// and Oklch lightness clamps to `0..=1`.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let mut result = *coordinates;

    if space.hue_index().is_some_and(|hue| result[hue].is_nan()) {
        result[1] = 0.0;
    }
    for c in result.iter_mut().filter(|c| c.is_nan()) {
        *c = 0.0;
    }

    if space.is_ok() {
        result[0] = result[0].clamp(0.0, 1.0);
    }
    if space.is_polar() {
        result[1] = result[1].max(0.0);
    }
    result
}

/// Map coordinates onto the bits that [`Color`](crate::Color) compares and
/// hashes. Hues become turns in `0..1`.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let mut cs = normalize(space, coordinates);
    if let Some(hue) = space.hue_index() {
        cs[hue] = cs[hue].rem_euclid(360.0) / 360.0;
    }
    cs.map(to_eq_bits)
}

// --------------------------------------------------------------------------------------------------------------------

/// Round a float to fewer digits and return its bits, with not-a-number and
/// negative zero both mapped to the bits of zero.
///
/// Public only for [`assert_close_enough`].
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    let f = if f.is_nan() { 0.0 } else { f };
    let rounded = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();
    // -0.0 == 0.0, so this also drops the sign.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    rounded.to_bits()
}
