use super::{normalize, ColorSpace, Whitepoint};
use crate::Float;

/// Scale bytes to unit range.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Scale sRGB coordinates to bytes. Out-of-gamut values saturate at `0x00`
/// and `0xff`.
pub(crate) fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = normalize(space, coordinates);
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

/// Convert CMYK fractions to sRGB. Not-a-number counts as zero.
pub(crate) fn cmyk_to_srgb(cmyk: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = cmyk.map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) });
    let white = 1.0 - k;
    [(1.0 - c) * white, (1.0 - m) * white, (1.0 - y) * white]
}

/// Convert sRGB to CMYK fractions, clamping to the gamut first. Black is
/// all key.
pub(crate) fn srgb_to_cmyk(rgb: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = rgb.map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) });
    let max = r.max(g).max(b);
    if max == 0.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    [(max - r) / max, (max - g) / max, (max - b) / max, 1.0 - max]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute `matrix · vector`.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Undo sRGB's transfer function.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Apply sRGB's transfer function.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.00313098 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#hsl-to-rgb
// https://www.w3.org/TR/css-color-4/#rgb-to-hsl

mod cylinder {
    use crate::Float;

    const EPSILON: Float = 1e-9;

    /// Compute the hue shared by HSL and HSV from sRGB coordinates, their
    /// maximum, and their spread.
    fn rgb_hue(value: &[Float; 3], max: Float, spread: Float) -> Float {
        let [r, g, b] = *value;

        let sextant = if max == r {
            (g - b) / spread + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / spread + 2.0
        } else {
            (r - g) / spread + 4.0
        };

        sextant * 60.0
    }

    /// sRGB to HSL. Grays get a not-a-number hue.
    pub(super) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
        let [r, g, b] = *value;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let spread = max - min;
        let lightness = (max + min) / 2.0;

        if spread.abs() < EPSILON {
            return [Float::NAN, 0.0, lightness * 100.0];
        }

        let saturation = if lightness <= 0.0 || 1.0 <= lightness {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

        [
            rgb_hue(value, max, spread),
            saturation * 100.0,
            lightness * 100.0,
        ]
    }

    /// HSL to sRGB.
    pub(super) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
        let hue = value[0].rem_euclid(360.0);
        let saturation = value[1] / 100.0;
        let lightness = value[2] / 100.0;
        let a = saturation * lightness.min(1.0 - lightness);

        let convert = |n: Float| {
            let k = (n + hue / 30.0) % 12.0;
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        [convert(0.0), convert(8.0), convert(4.0)]
    }

    /// sRGB to HSV. Grays get a not-a-number hue.
    pub(super) fn srgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
        let [r, g, b] = *value;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let spread = max - min;

        if spread.abs() < EPSILON {
            return [Float::NAN, 0.0, max * 100.0];
        }

        let saturation = if max <= 0.0 { 0.0 } else { spread / max };
        [rgb_hue(value, max, spread), saturation * 100.0, max * 100.0]
    }

    /// HSV to sRGB.
    pub(super) fn hsv_to_srgb(value: &[Float; 3]) -> [Float; 3] {
        let hue = value[0].rem_euclid(360.0);
        let saturation = value[1] / 100.0;
        let brightness = value[2] / 100.0;

        let convert = |n: Float| {
            let k = (n + hue / 60.0) % 6.0;
            brightness - brightness * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
        };

        [convert(5.0), convert(3.0), convert(1.0)]
    }
}

use cylinder::{hsl_to_srgb, hsv_to_srgb, srgb_to_hsl, srgb_to_hsv};

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Linear sRGB to D65 XYZ.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// D65 XYZ to linear sRGB.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#color-conversion-code

mod cielab {
    use crate::core::Whitepoint;
    use crate::Float;

    const EPSILON: Float = 216.0 / 24389.0;
    const KAPPA: Float = 24389.0 / 27.0;

    /// XYZ to CIELAB, both relative to `white`.
    pub(crate) fn xyz_to_lab(value: &[Float; 3], white: &Whitepoint) -> [Float; 3] {
        #[inline]
        fn convert(value: Float) -> Float {
            if EPSILON < value {
                value.cbrt()
            } else {
                KAPPA.mul_add(value, 16.0) / 116.0
            }
        }

        let [xw, yw, zw] = *white.as_ref();
        let fx = convert(value[0] / xw);
        let fy = convert(value[1] / yw);
        let fz = convert(value[2] / zw);

        [
            fy.mul_add(116.0, -16.0),
            500.0 * (fx - fy),
            200.0 * (fy - fz),
        ]
    }

    /// CIELAB to XYZ, both relative to `white`.
    pub(crate) fn lab_to_xyz(value: &[Float; 3], white: &Whitepoint) -> [Float; 3] {
        let [l, a, b] = *value;

        let fy = (l + 16.0) / 116.0;
        let fx = a / 500.0 + fy;
        let fz = fy - b / 200.0;

        let cube = |f: Float| {
            let f3 = f * f * f;
            if EPSILON < f3 {
                f3
            } else {
                f.mul_add(116.0, -16.0) / KAPPA
            }
        };

        let x = cube(fx);
        let y = if KAPPA * EPSILON < l { fy * fy * fy } else { l / KAPPA };
        let z = cube(fz);

        let [xw, yw, zw] = *white.as_ref();
        [x * xw, y * yw, z * zw]
    }

    const POLAR_EPSILON: Float = 0.02;

    /// Cartesian to polar CIELAB. Grays get a not-a-number hue.
    pub(crate) fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
        let [l, a, b] = *value;

        if a.abs() < POLAR_EPSILON && b.abs() < POLAR_EPSILON {
            return [l, 0.0, Float::NAN];
        }

        let h = b.atan2(a).to_degrees();
        [l, a.hypot(b), if h.is_sign_negative() { h + 360.0 } else { h }]
    }

    /// Polar to Cartesian CIELAB.
    pub(crate) fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
        let [l, c, h] = *value;

        if h.is_nan() {
            [l, 0.0, 0.0]
        } else {
            let hue_radian = h.to_radians();
            [l, c * hue_radian.cos(), c * hue_radian.sin()]
        }
    }
}

pub(crate) use cielab::{lab_to_lch, lab_to_xyz, lch_to_lab, xyz_to_lab};

// --------------------------------------------------------------------------------------------------------------------

mod oklab {
    use crate::Float;

    /// Polar to Cartesian Oklab.
    #[allow(non_snake_case)]
    pub(crate) fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
        let [L, C, h] = *value;

        if h.is_nan() {
            [L, 0.0, 0.0]
        } else {
            let hue_radian = h.to_radians();
            [L, C * hue_radian.cos(), C * hue_radian.sin()]
        }
    }

    const EPSILON: Float = 0.0002;

    /// Cartesian to polar Oklab. Grays get a not-a-number hue.
    #[allow(non_snake_case)]
    pub(crate) fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;

        let a_m = a.abs();
        if a_m < EPSILON && b.abs() < EPSILON {
            return [L, 0.0, Float::NAN];
        }

        // per herbie 2.1
        let C = if a_m < b { b.hypot(a_m) } else { a_m.hypot(b) };

        let h = b.atan2(a).to_degrees();
        let h = if h.is_sign_negative() { h + 360.0 } else { h };

        [L, C, h]
    }
}

use oklab::{oklab_to_oklch, oklch_to_oklab};

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

/// Oklab to D65 XYZ, through the cone responses, cubed.
fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// D65 XYZ to Oklab, through the cone responses' cube roots.
fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D65_TO_D50: [[Float; 3]; 3] = [
    [  1.0479297925449969,   0.022946870601609652, -0.05019226628920524  ],
    [  0.02962780877005599,  0.9904344267538799,   -0.017073799063418826 ],
    [ -0.009243040646204504, 0.015055191490298152,  0.7518742814281371   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: [[Float; 3]; 3] = [
    [  0.955473421488075,    -0.02309845494876471,  0.06325924320057072  ],
    [ -0.0283697093338637,    1.0099953980813041,   0.021041441191917323 ],
    [  0.012314014864481998, -0.020507649298898964, 1.330365926242124    ],
];

/// Bradford adaptation from D65 to D50.
fn d65_to_d50(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D65_TO_D50, value)
}

/// Bradford adaptation from D50 to D65.
fn d50_to_d65(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D50_TO_D65, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// sRGB to XYZ via linear sRGB.
#[inline]
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(value);
    linear_srgb_to_xyz(&linear_srgb)
}

/// XYZ to sRGB via linear sRGB.
#[inline]
fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = xyz_to_linear_srgb(value);
    linear_rgb_to_rgb(&linear_srgb)
}

/// Oklch to XYZ via Oklab.
#[inline]
fn oklch_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    oklab_to_xyz(&oklch_to_oklab(value))
}

/// XYZ to Oklch via Oklab.
#[inline]
fn xyz_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    oklab_to_oklch(&xyz_to_oklab(value))
}

/// D65 CIELCh to XYZ via CIELAB.
#[inline]
fn lch_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    lab_to_xyz(&lch_to_lab(value), &Whitepoint::D65)
}

/// XYZ to D65 CIELCh via CIELAB.
#[inline]
fn xyz_to_lch(value: &[Float; 3]) -> [Float; 3] {
    lab_to_lch(&xyz_to_lab(value, &Whitepoint::D65))
}

/// HSL or HSV to sRGB.
#[inline]
fn cylinder_to_srgb(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    if space == ColorSpace::Hsl {
        hsl_to_srgb(value)
    } else {
        hsv_to_srgb(value)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert normalized coordinates from one color space to another, without
/// any gamut check.
///
/// Conversions stay within a branch of the tree rooted in D65 XYZ where they
/// can: sRGB with linear sRGB, HSL, and HSV, CIELAB with CIELCh, and Oklab
/// with Oklch. All others go up to the root and back down.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    // Same space: normalizing is all there is to do.
    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // Same branch.
    match (from_space, to_space) {
        (Srgb, LinearSrgb) => return rgb_to_linear_rgb(&coordinates),
        (LinearSrgb, Srgb) => return linear_rgb_to_rgb(&coordinates),

        (Srgb, Hsl) => return srgb_to_hsl(&coordinates),
        (Srgb, Hsv) => return srgb_to_hsv(&coordinates),
        (Hsl | Hsv, Srgb) => return cylinder_to_srgb(from_space, &coordinates),
        (Hsl, Hsv) => return srgb_to_hsv(&hsl_to_srgb(&coordinates)),
        (Hsv, Hsl) => return srgb_to_hsl(&hsv_to_srgb(&coordinates)),

        (Lch, Lab) => return lch_to_lab(&coordinates),
        (Lab, Lch) => return lab_to_lch(&coordinates),
        (Oklch, Oklab) => return oklch_to_oklab(&coordinates),
        (Oklab, Oklch) => return oklab_to_oklch(&coordinates),
        _ => (),
    };

    // Up to the root.
    let intermediate = match from_space {
        Srgb => srgb_to_xyz(&coordinates),
        LinearSrgb => linear_srgb_to_xyz(&coordinates),
        Hsl | Hsv => srgb_to_xyz(&cylinder_to_srgb(from_space, &coordinates)),
        Xyz => coordinates,
        XyzD50 => d50_to_d65(&coordinates),
        Lab => lab_to_xyz(&coordinates, &Whitepoint::D65),
        Lch => lch_to_xyz(&coordinates),
        Oklab => oklab_to_xyz(&coordinates),
        Oklch => oklch_to_xyz(&coordinates),
    };

    // Down to the target.
    match to_space {
        Srgb => xyz_to_srgb(&intermediate),
        LinearSrgb => xyz_to_linear_srgb(&intermediate),
        Hsl => srgb_to_hsl(&xyz_to_srgb(&intermediate)),
        Hsv => srgb_to_hsv(&xyz_to_srgb(&intermediate)),
        Xyz => intermediate,
        XyzD50 => d65_to_d50(&intermediate),
        Lab => xyz_to_lab(&intermediate, &Whitepoint::D65),
        Lch => xyz_to_lch(&intermediate),
        Oklab => xyz_to_oklab(&intermediate),
        Oklch => xyz_to_oklch(&intermediate),
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::ColorSpace::*;
    use crate::Float;

    fn assert_near(actual: &[Float; 3], expected: &[Float; 3]) {
        for index in 0..3 {
            let (a, e) = (actual[index], expected[index]);
            assert!(
                (a.is_nan() && e.is_nan()) || (a - e).abs() < 1e-6,
                "color coordinates differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    struct Representations {
        srgb: [Float; 3],
        hsl: [Float; 3],
        hsv: [Float; 3],
        xyz: [Float; 3],
        xyz_d50: [Float; 3],
        lab: [Float; 3],
        lch: [Float; 3],
        oklab: [Float; 3],
        oklch: [Float; 3],
    }

    const YELLOW: Representations = Representations {
        // #ffca00
        srgb: [1.0, 0.792156862745098, 0.0],
        hsl: [47.52941176470588, 100.0, 50.0],
        hsv: [47.52941176470588, 100.0, 100.0],
        xyz: [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
        xyz_d50: [0.6635434850467424, 0.6459001538545541, 0.07126198065563918],
        lab: [83.70638900177585, 4.699612758957194, 84.87974611899384],
        lch: [83.70638900177585, 85.00975038964062, 86.8308891409],
        oklab: [
            0.8613332073307732,
            0.0017175723640959761,
            0.17600139371700052,
        ],
        oklch: [0.8613332073307732, 0.1760097742886813, 89.440876452466],
    };

    const BLUE: Representations = Representations {
        // #3178ea
        srgb: [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
        hsl: [216.97297297297297, 81.49779735682819, 55.490196078431374],
        hsv: [216.97297297297297, 79.05982905982906, 91.76470588235294],
        xyz: [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
        xyz_d50: [0.20345542047334936, 0.1913569200613913, 0.6062123188831731],
        lab: [51.86582883269902, 18.295857222358546, -63.828101755053225],
        lch: [51.86582883269902, 66.39853134787214, 285.99456156763284],
        oklab: [
            0.5909012953108558,
            -0.03348086515869664,
            -0.1836287492414715,
        ],
        oklch: [0.5909012953108558, 0.18665606306724153, 259.66681920272595],
    };

    #[test]
    fn test_conversions() {
        for color in [&YELLOW, &BLUE] {
            assert_near(&srgb_to_hsl(&color.srgb), &color.hsl);
            assert_near(&hsl_to_srgb(&color.hsl), &color.srgb);
            assert_near(&srgb_to_hsv(&color.srgb), &color.hsv);
            assert_near(&hsv_to_srgb(&color.hsv), &color.srgb);

            let xyz = srgb_to_xyz(&color.srgb);
            assert_near(&xyz, &color.xyz);
            assert_near(&xyz_to_srgb(&xyz), &color.srgb);
            assert_near(&d65_to_d50(&xyz), &color.xyz_d50);
            assert_near(&d50_to_d65(&color.xyz_d50), &xyz);

            let lab = xyz_to_lab(&xyz, &Whitepoint::D65);
            assert_near(&lab, &color.lab);
            assert_near(&lab_to_xyz(&lab, &Whitepoint::D65), &xyz);
            assert_near(&lab_to_lch(&lab), &color.lch);
            assert_near(&lch_to_lab(&color.lch), &lab);

            let oklab = xyz_to_oklab(&xyz);
            assert_near(&oklab, &color.oklab);
            assert_near(&oklab_to_xyz(&oklab), &xyz);
            assert_near(&oklab_to_oklch(&oklab), &color.oklch);
            assert_near(&oklch_to_oklab(&color.oklch), &oklab);
        }
    }

    #[test]
    fn test_grays() {
        let white = [1.0, 1.0, 1.0];
        assert_near(&srgb_to_hsl(&white), &[Float::NAN, 0.0, 100.0]);
        assert_near(&srgb_to_hsv(&white), &[Float::NAN, 0.0, 100.0]);
        assert_near(&convert(Srgb, Lab, &white), &[100.0, 0.0, 0.0]);
        assert_near(&convert(Srgb, Lch, &white), &[100.0, 0.0, Float::NAN]);

        // Not-a-number hues are normalized before conversion.
        assert_near(&convert(Hsl, Srgb, &[Float::NAN, 0.0, 50.0]), &[0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_convert() {
        assert_near(&convert(Srgb, Hsl, &[1.0, 0.0, 0.0]), &[0.0, 100.0, 50.0]);
        assert_near(&convert(Hsl, Hsv, &[120.0, 100.0, 50.0]), &[120.0, 100.0, 100.0]);
        assert_near(&convert(Hsv, Srgb, &[240.0, 100.0, 100.0]), &[0.0, 0.0, 1.0]);
        assert_near(&convert(Hsl, Oklab, &YELLOW.hsl), &YELLOW.oklab);
        assert_near(&convert(Oklch, Lch, &BLUE.oklch), &BLUE.lch);
        assert_near(&convert(XyzD50, Hsv, &BLUE.xyz_d50), &BLUE.hsv);
        assert_near(&convert(Lab, LinearSrgb, &YELLOW.lab), &[1.0, 0.5906188409193369, 0.0]);
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(srgb_to_cmyk(&[1.0, 0.0, 0.0]), [0.0, 1.0, 1.0, 0.0]);
        assert_eq!(srgb_to_cmyk(&[1.0, 1.0, 0.0]), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(srgb_to_cmyk(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(srgb_to_cmyk(&[1.0, 1.0, 1.0]), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(srgb_to_cmyk(&[0.5, 0.25, 0.0]), [0.0, 0.5, 1.0, 0.5]);

        assert_eq!(cmyk_to_srgb(&[0.0, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
        assert_eq!(cmyk_to_srgb(&[0.0, 0.5, 1.0, 0.5]), [0.5, 0.25, 0.0]);
        assert_eq!(cmyk_to_srgb(&[Float::NAN, 2.0, -1.0, 0.0]), [1.0, 0.0, 1.0]);
    }
}
