mod conversion;
mod equality;
mod interpolation;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{
    cmyk_to_srgb, convert, from_24bit, lab_to_lch, lab_to_xyz, lch_to_lab, srgb_to_cmyk, to_24bit,
    xyz_to_lab,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// interpolation
pub use interpolation::{lerp, lerp_int, lerp_u8, HueInterpolation};

// math
pub(crate) use math::{FloatExt, QUARTER_TURN, TAU};

// space
pub use space::{ColorSpace, Whitepoint};

// string
pub(crate) use string::{format, parse};
