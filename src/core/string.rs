use super::{cmyk_to_srgb, from_24bit};
use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse `#rgb` or `#rrggbb` into bytes.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    let width = match digits.len() {
        3 => 1,
        6 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    let mut result = [0; 3];
    for (index, byte) in result.iter_mut().enumerate() {
        let hex = digits
            .get(width * index..width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(hex, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        *byte = if width == 1 { 0x11 * n } else { n };
    }

    Ok(result)
}

// --------------------------------------------------------------------------------------------------------------------

// Sorted by name for binary search.
const NAMED_COLORS: [(&str, [u8; 3]); 145] = [
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];

/// Look up a CSS named color.
fn parse_named(s: &str) -> Option<[u8; 3]> {
    NAMED_COLORS
        .binary_search_by_key(&s, |&(name, _)| name)
        .ok()
        .map(|index| NAMED_COLORS[index].1)
}

// --------------------------------------------------------------------------------------------------------------------

/// The interpretation of one function argument.
#[derive(Clone, Copy, Debug)]
enum Argument {
    /// A number divided by the first value or a percentage of the second one.
    Number(Float, Float),
    /// An angle in degrees, unless it has a `deg`, `grad`, `rad`, or `turn`
    /// unit.
    Hue,
}

use Argument::{Hue, Number};

const UNIT: Argument = Number(1.0, 1.0);
const PERCENT: Argument = Number(1.0, 100.0);
const BYTE: Argument = Number(255.0, 1.0);

const RGB: [Argument; 3] = [BYTE, BYTE, BYTE];
const CYLINDER: [Argument; 3] = [Hue, PERCENT, PERCENT];
const LAB: [Argument; 3] = [PERCENT, Number(1.0, 125.0), Number(1.0, 125.0)];
const LCH: [Argument; 3] = [PERCENT, Number(1.0, 150.0), Hue];
const OKLAB: [Argument; 3] = [UNIT, Number(1.0, 0.4), Number(1.0, 0.4)];
const OKLCH: [Argument; 3] = [UNIT, Number(1.0, 0.4), Hue];
const COORDINATES: [Argument; 3] = [UNIT; 3];
const CMYK: [Argument; 4] = [UNIT; 4];

impl Argument {
    fn parse(&self, token: &str) -> Result<Float, ColorFormatError> {
        let number = |s: &str| s.parse::<Float>().map_err(|_| ColorFormatError::MalformedFloat);

        if token == "none" {
            return Ok(Float::NAN);
        }

        match *self {
            Number(divisor, reference) => match token.strip_suffix('%') {
                Some(percent) => Ok(number(percent)? / 100.0 * reference),
                None => Ok(number(token)? / divisor),
            },
            Hue => {
                if let Some(n) = token.strip_suffix("deg") {
                    number(n)
                } else if let Some(n) = token.strip_suffix("grad") {
                    Ok(number(n)? / 400.0 * 360.0)
                } else if let Some(n) = token.strip_suffix("rad") {
                    Ok(number(n)?.to_degrees())
                } else if let Some(n) = token.strip_suffix("turn") {
                    Ok(number(n)? * 360.0)
                } else {
                    number(token)
                }
            }
        }
    }
}

/// Parse exactly `N` arguments separated by white space or commas.
fn parse_arguments<const N: usize>(
    body: &str,
    arguments: &[Argument; N],
) -> Result<[Float; N], ColorFormatError> {
    let mut tokens = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let mut result = [0.0; N];
    for (slot, argument) in result.iter_mut().zip(arguments) {
        let token = tokens.next().ok_or(ColorFormatError::MissingCoordinate)?;
        *slot = argument.parse(token)?;
    }

    if tokens.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }
    Ok(result)
}

const COLOR_SPACES: [(&str, ColorSpace); 6] = [
    ("srgb", ColorSpace::Srgb),
    ("linear-srgb", ColorSpace::LinearSrgb),
    ("--hsv", ColorSpace::Hsv),
    ("xyz", ColorSpace::Xyz),
    ("xyz-d65", ColorSpace::Xyz),
    ("xyz-d50", ColorSpace::XyzD50),
];

/// Parse a color function, i.e., `rgb()`, `hsl()`, `lab()`, `lch()`,
/// `oklab()`, `oklch()`, `cmyk()`, or `color()`.
fn parse_function(name: &str, body: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    use ColorSpace::*;

    let result = match name {
        "rgb" => (Srgb, parse_arguments(body, &RGB)?),
        "hsl" => (Hsl, parse_arguments(body, &CYLINDER)?),
        "lab" => (Lab, parse_arguments(body, &LAB)?),
        "lch" => (Lch, parse_arguments(body, &LCH)?),
        "oklab" => (Oklab, parse_arguments(body, &OKLAB)?),
        "oklch" => (Oklch, parse_arguments(body, &OKLCH)?),
        "cmyk" => (Srgb, cmyk_to_srgb(&parse_arguments(body, &CMYK)?)),
        "color" => {
            let body = body.trim_start();
            let (label, rest) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
            let space = COLOR_SPACES
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, space)| *space)
                .ok_or(ColorFormatError::UnknownColorSpace)?;

            let arguments = if space == Hsv { &CYLINDER } else { &COORDINATES };
            (space, parse_arguments(rest, arguments)?)
        }
        _ => return Err(ColorFormatError::UnknownFormat),
    };

    Ok(result)
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// The string is trimmed and lower-cased first. It may be a CSS named color,
/// a hashed hexadecimal color with three or six digits, or a color function.
/// Function arguments are separated by white space or commas. They may be
/// `none` for a missing coordinate, percentages, or, for hues, angles with
/// units. HSV uses `color(--hsv h s v)`.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3]), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase();
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let [r, g, b] = parse_hashed(s)?;
        return Ok((ColorSpace::Srgb, from_24bit(r, g, b)));
    }

    let Some((name, rest)) = s.split_once('(') else {
        if s.ends_with(')') {
            return Err(ColorFormatError::NoOpeningParenthesis);
        } else if let Some([r, g, b]) = parse_named(s) {
            return Ok((ColorSpace::Srgb, from_24bit(r, g, b)));
        } else if !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ColorFormatError::UnknownColorName);
        }
        return Err(ColorFormatError::UnknownFormat);
    };

    let body = rest
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;
    parse_function(name.trim_end(), body)
}

// --------------------------------------------------------------------------------------------------------------------

fn css_prefix(space: ColorSpace) -> &'static str {
    use ColorSpace::*;
    match space {
        Srgb => "color(srgb ",
        LinearSrgb => "color(linear-srgb ",
        Hsl => "hsl(",
        Hsv => "color(--hsv ",
        Xyz => "color(xyz ",
        XyzD50 => "color(xyz-d50 ",
        Lab => "lab(",
        Lch => "lch(",
        Oklab => "oklab(",
        Oklch => "oklch(",
    }
}

/// Format the coordinates in CSS notation.
///
/// Coordinates are rounded to the formatter's precision, 5 by default, with
/// hues getting two fewer digits. Rounded integers print without a fraction
/// and not-a-number prints as `none`.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let digits = f.precision().unwrap_or(5) as i32;

    f.write_str(css_prefix(space))?;
    for (index, coordinate) in coordinates.iter().enumerate() {
        if 0 < index {
            f.write_str(" ")?;
        }

        if coordinate.is_nan() {
            f.write_str("none")?;
            continue;
        }

        let digits = if space.hue_index() == Some(index) {
            digits - 2
        } else {
            digits
        };
        let factor = (10.0 as Float).powi(digits);
        let rounded = (coordinate * factor).round() / factor;
        if rounded == rounded.trunc() {
            write!(f, "{:.0}", rounded)?;
        } else {
            write!(f, "{}", rounded)?;
        }
    }
    f.write_str(")")
}

// ====================================================================================================================
