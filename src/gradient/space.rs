use super::ColorStop;
use crate::core::{
    lab_to_lch, lab_to_xyz, lch_to_lab, lerp, lerp_int, lerp_u8, xyz_to_lab, HueInterpolation,
    Whitepoint,
};
use crate::{Color, ColorSpace, Float};

/// The color space in which a gradient interpolates between stops.
///
/// Each variant has its own working representation:
///
///   * [`GradientSpace::Rgb`] blends 24-bit sRGB bytes and rounds to the
///     nearest byte.
///   * [`GradientSpace::Hsl`] and [`GradientSpace::Hsv`] use integral hues as
///     well as integral percentages. They take an arc around the hue circle as
///     selected by the [`HueInterpolation`] and blend the percentages.
///   * [`GradientSpace::Xyz`], [`GradientSpace::Lab`], and
///     [`GradientSpace::Oklab`] blend three floating point coordinates.
///   * [`GradientSpace::Lch`] and [`GradientSpace::Oklch`] take an arc around
///     the hue circle and blend lightness and chroma.
///
/// A powerless hue, i.e., the not-a-number hue of a gray, takes on the other
/// color's hue, or 0 if both hues are powerless. Interpolated hues are
/// reduced to `0..360`.
///
/// XYZ, CIELAB, and CIELCh accept a [`Whitepoint`]. For XYZ, the endpoints are
/// re-expressed relative to that whitepoint by way of CIELAB. CIELAB and
/// CIELCh interpolate relative to that whitepoint, but the resulting colors
/// are always relative to D65.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum GradientSpace {
    #[default]
    Rgb,
    Hsl(HueInterpolation),
    Hsv(HueInterpolation),
    Xyz(Whitepoint),
    Lab(Whitepoint),
    Lch(HueInterpolation, Whitepoint),
    Oklab,
    Oklch(HueInterpolation),
}

impl GradientSpace {
    /// Compute the colors between consecutive stops.
    ///
    /// Every pair of consecutive stops contributes `steps` times the distance
    /// between their positions, rounded to the nearest integer. Since each
    /// pair rounds independently, the result may be a few colors longer or
    /// shorter than `steps`.
    ///
    /// ```
    /// # use prettyramp::gradient::{ColorStop, GradientSpace};
    /// # use prettyramp::Color;
    /// let stops = [
    ///     ColorStop::new(Color::from_24bit(255, 0, 0), 0.0),
    ///     ColorStop::new(Color::from_24bit(0, 0, 255), 1.0),
    /// ];
    /// let colors = GradientSpace::Rgb.colors(&stops, 2);
    /// assert_eq!(colors, vec![Color::from_24bit(255, 0, 0), Color::from_24bit(0, 0, 255)]);
    /// ```
    pub fn colors(&self, stops: &[ColorStop], steps: usize) -> Vec<Color> {
        let mut colors = Vec::with_capacity(steps);

        for pair in stops.windows(2) {
            let fraction = pair[1].position() - pair[0].position();
            let segment = (steps as Float * fraction).round() as usize;
            colors.extend(self.intermediate(pair[0].color(), pair[1].color(), segment));
        }

        colors
    }

    /// Compute `steps` colors from the start towards the end color.
    ///
    /// The first color is the start color in this space's working
    /// representation. The last color is the end color only if there are at
    /// least two steps.
    pub fn intermediate(&self, start: &Color, end: &Color, steps: usize) -> Vec<Color> {
        if steps == 0 {
            return Vec::new();
        }

        match *self {
            Self::Rgb => {
                let [r1, g1, b1] = start.to_24bit();
                let [r2, g2, b2] = end.to_24bit();

                fractions(steps)
                    .map(|t| {
                        Color::from_24bit(lerp_u8(r1, r2, t), lerp_u8(g1, g2, t), lerp_u8(b1, b2, t))
                    })
                    .collect()
            }
            Self::Hsl(strategy) => cylinder(ColorSpace::Hsl, strategy, start, end, steps),
            Self::Hsv(strategy) => cylinder(ColorSpace::Hsv, strategy, start, end, steps),
            Self::Xyz(white) => {
                let project = |color: &Color| {
                    let xyz = *color.to(ColorSpace::Xyz).as_ref();
                    if white.is_d65() {
                        xyz
                    } else {
                        lab_to_xyz(&xyz_to_lab(&xyz, &Whitepoint::D65), &white)
                    }
                };

                cartesian(ColorSpace::Xyz, project(start), project(end), steps, |c| c)
            }
            Self::Lab(white) => {
                let project = |color: &Color| {
                    if white.is_d65() {
                        *color.to(ColorSpace::Lab).as_ref()
                    } else {
                        xyz_to_lab(color.to(ColorSpace::Xyz).as_ref(), &white)
                    }
                };

                cartesian(ColorSpace::Lab, project(start), project(end), steps, |lab| {
                    rebase(&lab, &white)
                })
            }
            Self::Lch(strategy, white) => {
                let project = |color: &Color| {
                    if white.is_d65() {
                        to_polar(color, ColorSpace::Lch)
                    } else {
                        lab_to_lch(&xyz_to_lab(color.to(ColorSpace::Xyz).as_ref(), &white))
                    }
                };

                polar(ColorSpace::Lch, strategy, project(start), project(end), steps, |lch| {
                    if white.is_d65() {
                        lch
                    } else {
                        lab_to_lch(&rebase(&lch_to_lab(&lch), &white))
                    }
                })
            }
            Self::Oklab => {
                let start = *start.to(ColorSpace::Oklab).as_ref();
                let end = *end.to(ColorSpace::Oklab).as_ref();
                cartesian(ColorSpace::Oklab, start, end, steps, |c| c)
            }
            Self::Oklch(strategy) => {
                let start = to_polar(start, ColorSpace::Oklch);
                let end = to_polar(end, ColorSpace::Oklch);
                polar(ColorSpace::Oklch, strategy, start, end, steps, |c| c)
            }
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Iterate over the interpolation fractions for the given number of steps.
/// A single step has fraction 0.
fn fractions(steps: usize) -> impl Iterator<Item = Float> {
    let denominator = if steps <= 1 { 1.0 } else { (steps - 1) as Float };
    (0..steps).map(move |index| index as Float / denominator)
}

/// Re-express CIELAB coordinates relative to the given whitepoint as CIELAB
/// coordinates relative to D65.
fn rebase(lab: &[Float; 3], white: &Whitepoint) -> [Float; 3] {
    if white.is_d65() {
        *lab
    } else {
        xyz_to_lab(&lab_to_xyz(lab, white), &Whitepoint::D65)
    }
}

/// Convert the color to the polar color space while preserving a powerless
/// hue that would otherwise be normalized away.
fn to_polar(color: &Color, space: ColorSpace) -> [Float; 3] {
    let mut coordinates = *color.to(space).as_ref();
    if let Some(hue) = space.hue_index() {
        if color.space() == space && color[hue].is_nan() {
            coordinates[hue] = Float::NAN;
        }
    }
    coordinates
}

/// Fill in powerless hues from the other hue, falling back on 0.
fn fill_hues(start: Float, end: Float) -> (Float, Float) {
    match (start.is_nan(), end.is_nan()) {
        (true, true) => (0.0, 0.0),
        (true, false) => (end, end),
        (false, true) => (start, start),
        (false, false) => (start, end),
    }
}

/// Blend Cartesian coordinates and post-process each result.
fn cartesian<F>(
    space: ColorSpace,
    start: [Float; 3],
    end: [Float; 3],
    steps: usize,
    finish: F,
) -> Vec<Color>
where
    F: Fn([Float; 3]) -> [Float; 3],
{
    fractions(steps)
        .map(|t| {
            let coordinates = [
                lerp(start[0], end[0], t),
                lerp(start[1], end[1], t),
                lerp(start[2], end[2], t),
            ];
            Color::new(space, finish(coordinates))
        })
        .collect()
}

/// Blend lightness, chroma, and hue coordinates and post-process each result.
fn polar<F>(
    space: ColorSpace,
    strategy: HueInterpolation,
    start: [Float; 3],
    end: [Float; 3],
    steps: usize,
    finish: F,
) -> Vec<Color>
where
    F: Fn([Float; 3]) -> [Float; 3],
{
    let (h1, h2) = fill_hues(start[2], end[2]);
    let (direction, angle) = strategy.arc(h1, h2);

    fractions(steps)
        .map(|t| {
            let coordinates = [
                lerp(start[0], end[0], t),
                lerp(start[1], end[1], t),
                (h1 + direction * angle * t).rem_euclid(360.0),
            ];
            Color::new(space, finish(coordinates))
        })
        .collect()
}

/// Blend HSL or HSV colors with integral coordinates.
fn cylinder(
    space: ColorSpace,
    strategy: HueInterpolation,
    start: &Color,
    end: &Color,
    steps: usize,
) -> Vec<Color> {
    let [h1, s1, l1] = to_polar(start, space);
    let [h2, s2, l2] = to_polar(end, space);

    let (h1, h2) = fill_hues(h1, h2);
    let h1 = h1.round().rem_euclid(360.0);
    let h2 = h2.round().rem_euclid(360.0);
    let (direction, angle) = strategy.arc(h1, h2);

    let [s1, l1, s2, l2] = [s1, l1, s2, l2].map(|c| c.round() as i32);

    fractions(steps)
        .map(|t| {
            let hue = (h1 + direction * angle * t).round().rem_euclid(360.0);
            Color::new(
                space,
                [
                    hue,
                    lerp_int(s1, s2, t) as Float,
                    lerp_int(l1, l2, t) as Float,
                ],
            )
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{fill_hues, GradientSpace};
    use crate::core::{HueInterpolation, Whitepoint};
    use crate::gradient::ColorStop;
    use crate::{Color, ColorSpace, Float};

    fn red_to_blue() -> [ColorStop; 2] {
        [
            ColorStop::new(Color::from_24bit(255, 0, 0), 0.0),
            ColorStop::new(Color::from_24bit(0, 0, 255), 1.0),
        ]
    }

    #[test]
    fn test_rgb() {
        let colors = GradientSpace::Rgb.colors(&red_to_blue(), 2);
        assert_eq!(
            colors,
            vec![Color::from_24bit(255, 0, 0), Color::from_24bit(0, 0, 255)]
        );

        let colors = GradientSpace::Rgb.colors(&red_to_blue(), 3);
        assert_eq!(colors[1], Color::from_24bit(128, 0, 128));
    }

    #[test]
    fn test_working_representation() {
        let stops = red_to_blue();
        let shorter = HueInterpolation::Shorter;

        for (space, working) in [
            (GradientSpace::Rgb, ColorSpace::Srgb),
            (GradientSpace::Hsl(shorter), ColorSpace::Hsl),
            (GradientSpace::Hsv(shorter), ColorSpace::Hsv),
            (GradientSpace::Xyz(Whitepoint::D65), ColorSpace::Xyz),
            (GradientSpace::Lab(Whitepoint::D65), ColorSpace::Lab),
            (GradientSpace::Lch(shorter, Whitepoint::D65), ColorSpace::Lch),
            (GradientSpace::Oklab, ColorSpace::Oklab),
            (GradientSpace::Oklch(shorter), ColorSpace::Oklch),
        ] {
            let colors = space.colors(&stops, 5);
            assert_eq!(colors.len(), 5, "{:?}", space);

            let (first, last) = (&colors[0], &colors[4]);
            assert_eq!(first.space(), working, "{:?}", space);
            assert_eq!(*first, stops[0].color().to(working), "{:?}", space);
            assert_eq!(first.to_24bit(), [255, 0, 0], "{:?}", space);
            assert_eq!(last.space(), working, "{:?}", space);
            assert_eq!(last.to_24bit(), [0, 0, 255], "{:?}", space);
        }
    }

    #[test]
    fn test_degenerate_steps() {
        let red = Color::from_24bit(255, 0, 0);
        let blue = Color::from_24bit(0, 0, 255);

        for space in [
            GradientSpace::Rgb,
            GradientSpace::Hsl(HueInterpolation::Shorter),
            GradientSpace::Lab(Whitepoint::D65),
            GradientSpace::Oklch(HueInterpolation::Longer),
        ] {
            assert!(space.intermediate(&red, &blue, 0).is_empty());
            let single = space.intermediate(&red, &blue, 1);
            assert_eq!(single.len(), 1);
            assert_eq!(single[0].to_24bit(), [255, 0, 0], "{:?}", space);
        }
    }

    #[test]
    fn test_segments() {
        let stops = [
            ColorStop::new(Color::from_24bit(255, 0, 0), 0.0),
            ColorStop::new(Color::from_24bit(0, 255, 0), 0.5),
            ColorStop::new(Color::from_24bit(0, 0, 255), 1.0),
        ];

        let colors = GradientSpace::Rgb.colors(&stops, 10);
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[0], Color::from_24bit(255, 0, 0));
        assert_eq!(colors[4], Color::from_24bit(0, 255, 0));
        assert_eq!(colors[5], Color::from_24bit(0, 255, 0));
        assert_eq!(colors[9], Color::from_24bit(0, 0, 255));

        // Independent rounding of segments does not add up.
        let colors = GradientSpace::Rgb.colors(&stops, 3);
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn test_hsl_shorter_hue() {
        let stops = [
            ColorStop::new(Color::hsl(350, 100, 50), 0.0),
            ColorStop::new(Color::hsl(10, 100, 50), 1.0),
        ];

        let colors = GradientSpace::Hsl(HueInterpolation::Shorter).colors(&stops, 3);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0].as_ref(), &[350.0, 100.0, 50.0]);
        assert_eq!(colors[1].as_ref(), &[0.0, 100.0, 50.0]);
        assert_eq!(colors[2].as_ref(), &[10.0, 100.0, 50.0]);

        let colors = GradientSpace::Hsl(HueInterpolation::Longer).colors(&stops, 3);
        assert_eq!(colors[1].as_ref(), &[180.0, 100.0, 50.0]);
    }

    #[test]
    fn test_hsv_integral() {
        let start = Color::from_24bit(255, 128, 0);
        let end = Color::from_24bit(0, 64, 255);
        let colors = GradientSpace::Hsv(HueInterpolation::Increasing).intermediate(&start, &end, 7);

        for color in &colors {
            assert_eq!(color.space(), ColorSpace::Hsv);
            for coordinate in color.as_ref() {
                assert_eq!(coordinate.fract(), 0.0);
            }
            assert!((0.0..360.0).contains(&color[0]));
        }

        // The hue of orange rounds to 30, the one of blue to 225.
        assert_eq!(colors[0][0], 30.0);
        assert_eq!(colors[6][0], 225.0);
    }

    #[test]
    fn test_gray_hue() {
        let gray = Color::from_24bit(128, 128, 128);
        let green = Color::hsl(120, 100, 50);
        let colors = GradientSpace::Hsl(HueInterpolation::Shorter).intermediate(&gray, &green, 3);
        assert_eq!(colors[0][0], 120.0);
        assert_eq!(colors[1][0], 120.0);

        let colors =
            GradientSpace::Oklch(HueInterpolation::Shorter).intermediate(&gray, &gray, 2);
        assert_eq!(colors[0][2], 0.0);

        assert_eq!(fill_hues(Float::NAN, Float::NAN), (0.0, 0.0));
        assert_eq!(fill_hues(Float::NAN, 40.0), (40.0, 40.0));
        assert_eq!(fill_hues(40.0, Float::NAN), (40.0, 40.0));
    }

    #[test]
    fn test_oklch_wraparound() {
        let start = Color::oklch(0.6, 0.1, 340.0);
        let end = Color::oklch(0.8, 0.2, 20.0);
        let colors = GradientSpace::Oklch(HueInterpolation::Shorter).intermediate(&start, &end, 5);

        assert_eq!(colors[0], start);
        assert_eq!(colors[4], end);
        let hues: Vec<Float> = colors.iter().map(|c| c[2]).collect();
        for (actual, expected) in hues.iter().zip([340.0, 350.0, 0.0, 10.0, 20.0]) {
            assert!((actual - expected).abs() < 1e-9, "{} vs {}", actual, expected);
        }
        assert!((colors[2][0] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_whitepoints() {
        let start = Color::from_24bit(200, 30, 40);
        let end = Color::from_24bit(20, 160, 90);

        // Relative to D65, endpoints are exact.
        let colors = GradientSpace::Lab(Whitepoint::D65).intermediate(&start, &end, 4);
        assert_eq!(colors[0], start.to(ColorSpace::Lab));
        assert_eq!(colors[3], end.to(ColorSpace::Lab));

        // Relative to D50, results are still relative to D65.
        let d50 = GradientSpace::Lab(Whitepoint::D50).intermediate(&start, &end, 4);
        assert_eq!(d50[0].space(), ColorSpace::Lab);
        assert_eq!(d50[0].to_24bit(), [200, 30, 40]);
        assert_eq!(d50[1].to_24bit(), [168, 96, 55]);
        assert_eq!(d50[3].to_24bit(), [20, 160, 90]);

        let lch = GradientSpace::Lch(HueInterpolation::Shorter, Whitepoint::D50)
            .intermediate(&start, &end, 3);
        assert_eq!(lch[0].space(), ColorSpace::Lch);
        assert_eq!(lch[0].to_24bit(), [200, 30, 40]);
        assert_eq!(lch[2].to_24bit(), [20, 160, 90]);

        let xyz = GradientSpace::Xyz(Whitepoint::D65).intermediate(&start, &end, 2);
        assert_eq!(xyz[0], start.to(ColorSpace::Xyz));
        let shifted = GradientSpace::Xyz(Whitepoint::D50).intermediate(&start, &end, 2);
        assert_ne!(shifted[0], start.to(ColorSpace::Xyz));
    }
}
