//! Turns raw component substrings into a typed, format-tagged bundle of numbers. Each format has
//! its own channel domains, all documented on [`NormalizedColor`]; this module is the one place
//! that knows "44%" means 0.44 of a saturation channel but 66 units of CIELAB a*. Values are not
//! clamped here: intermediate math downstream runs on full floats, and clamping is the
//! serializer's job.

use error::ColorError;
use extract;
use format::{self, Format};
use numeric::{self, Token};

/// A color reduced to its numeric channels. The channel domains are format-specific:
///
/// - `Rgb`, `Hex`, `Named`: three channels as fractions in [0, 1]
/// - `Hsl`: hue in degrees, saturation and lightness as fractions
/// - `Cmyk`: four ink fractions
/// - `Hwb`: hue in degrees, whiteness and blackness as fractions
/// - `CieLab`: L in [0, 100], a and b roughly ±127
/// - `CieLch`: L in [0, 100], chroma ≥ 0, hue in degrees
/// - `OkLab`: L as a fraction, a and b roughly ±0.5
/// - `OkLch`: L as a fraction, chroma roughly [0, 0.5], hue in degrees
///
/// `alpha` is always a fraction and defaults to 1 when the source text had none. Hues have been
/// through [hue correction](../numeric/fn.correct_hue.html) already; everything else is carried
/// exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedColor {
    /// The format the channels are expressed in.
    pub format: Format,
    /// The channel values, in the format's natural order.
    pub channels: Vec<f64>,
    /// The alpha channel as a fraction in [0, 1].
    pub alpha: f64,
}

/// Runs the full recognition front half (grammar, then extractor, then parser) over one input
/// string.
pub fn parse_color(text: &str) -> Result<NormalizedColor, ColorError> {
    let format = format::validate(text)?;
    let components = extract::extract(format, text);
    Ok(parse(format, &components))
}

/// Normalizes extracted components for the given format. Malformed or missing components decay
/// to zero rather than failing: the grammar is the gatekeeper, not this function.
pub fn parse(format: Format, components: &[String]) -> NormalizedColor {
    match format {
        Format::Named | Format::Hex => parse_hex(format, components),
        Format::Rgb => parse_rgb(components),
        Format::Hsl => parse_hue_leading(Format::Hsl, components),
        Format::Cmyk => parse_cmyk(components),
        Format::Hwb => parse_hue_leading(Format::Hwb, components),
        Format::CieLab => parse_lab(components),
        Format::CieLch => parse_lch(components),
        Format::OkLab => parse_oklab(components),
        Format::OkLch => parse_oklch(components),
    }
}

fn token(components: &[String], index: usize) -> Token {
    components
        .get(index)
        .map(|raw| numeric::parse_token(raw))
        .unwrap_or(Token::Number(0.0))
}

// Alpha is the optional component after `expected` channels: absent means fully opaque.
fn alpha_after(components: &[String], expected: usize) -> f64 {
    match components.get(expected) {
        None => 1.0,
        Some(raw) => match numeric::parse_token(raw) {
            Token::Percentage(v) => v / 100.0,
            t => t.raw(),
        },
    }
}

fn parse_hex(format: Format, components: &[String]) -> NormalizedColor {
    let fragment = |index: usize| {
        components
            .get(index)
            .and_then(|f| u8::from_str_radix(f, 16).ok())
            .unwrap_or(0) as f64 / 255.0
    };
    let alpha = if components.len() > 3 { fragment(3) } else { 1.0 };
    NormalizedColor {
        format,
        channels: vec![fragment(0), fragment(1), fragment(2)],
        alpha,
    }
}

// An rgb() number is on the 0-255 scale; a percentage is of that full scale.
fn parse_rgb(components: &[String]) -> NormalizedColor {
    let channel = |index: usize| match token(components, index) {
        Token::Percentage(v) => v / 100.0,
        t => t.raw() / 255.0,
    };
    NormalizedColor {
        format: Format::Rgb,
        channels: vec![channel(0), channel(1), channel(2)],
        alpha: alpha_after(components, 3),
    }
}

// A percentage is the natural spelling for the fraction channels of hsl()/hwb(), but bare
// numbers appear in the wild in both conventions; anything over 1 is taken to mean a percent.
fn fraction(components: &[String], index: usize) -> f64 {
    match token(components, index) {
        Token::Percentage(v) => v / 100.0,
        t => {
            let raw = t.raw();
            if raw.abs() > 1.0 {
                raw / 100.0
            } else {
                raw
            }
        }
    }
}

fn hue_channel(components: &[String], index: usize) -> f64 {
    numeric::correct_hue(token(components, index).raw())
}

fn parse_hue_leading(format: Format, components: &[String]) -> NormalizedColor {
    NormalizedColor {
        format,
        channels: vec![
            hue_channel(components, 0),
            fraction(components, 1),
            fraction(components, 2),
        ],
        alpha: alpha_after(components, 3),
    }
}

fn parse_cmyk(components: &[String]) -> NormalizedColor {
    NormalizedColor {
        format: Format::Cmyk,
        channels: (0..4).map(|i| fraction(components, i)).collect(),
        alpha: alpha_after(components, 4),
    }
}

fn parse_lab(components: &[String]) -> NormalizedColor {
    // CSS reference ranges: 100% of L is 100, 100% of a/b is 125
    let l = token(components, 0).raw();
    let axis = |index: usize| match token(components, index) {
        Token::Percentage(v) => v * 1.25,
        t => t.raw(),
    };
    NormalizedColor {
        format: Format::CieLab,
        channels: vec![l, axis(1), axis(2)],
        alpha: alpha_after(components, 3),
    }
}

fn parse_lch(components: &[String]) -> NormalizedColor {
    // 100% chroma is 150 in the CSS reference range
    let chroma = match token(components, 1) {
        Token::Percentage(v) => v * 1.5,
        t => t.raw(),
    };
    NormalizedColor {
        format: Format::CieLch,
        channels: vec![token(components, 0).raw(), chroma, hue_channel(components, 2)],
        alpha: alpha_after(components, 3),
    }
}

fn parse_oklab(components: &[String]) -> NormalizedColor {
    // OKLab lightness is a fraction; 100% of a/b is 0.4 in the CSS reference range
    let l = match token(components, 0) {
        Token::Percentage(v) => v / 100.0,
        t => t.raw(),
    };
    let axis = |index: usize| match token(components, index) {
        Token::Percentage(v) => v * 0.004,
        t => t.raw(),
    };
    NormalizedColor {
        format: Format::OkLab,
        channels: vec![l, axis(1), axis(2)],
        alpha: alpha_after(components, 3),
    }
}

fn parse_oklch(components: &[String]) -> NormalizedColor {
    let l = match token(components, 0) {
        Token::Percentage(v) => v / 100.0,
        t => t.raw(),
    };
    let chroma = match token(components, 1) {
        Token::Percentage(v) => v * 0.004,
        t => t.raw(),
    };
    NormalizedColor {
        format: Format::OkLch,
        channels: vec![l, chroma, hue_channel(components, 2)],
        alpha: alpha_after(components, 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_scales() {
        let color = parse_color("rgb(255, 51, 0)").unwrap();
        assert_eq!(color.format, Format::Rgb);
        assert!(approx_eq!(f64, color.channels[0], 1.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, color.channels[1], 0.2, epsilon = 1e-12));
        assert_eq!(color.alpha, 1.0);

        let pct = parse_color("rgb(100% 20% 0% / 40%)").unwrap();
        assert!(approx_eq!(f64, pct.channels[0], 1.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, pct.channels[1], 0.2, epsilon = 1e-12));
        assert!(approx_eq!(f64, pct.alpha, 0.4, epsilon = 1e-12));
    }

    #[test]
    fn test_hex_alpha_fragment() {
        let color = parse_color("#ff000080").unwrap();
        assert!(approx_eq!(f64, color.alpha, 128.0 / 255.0, epsilon = 1e-12));
        let opaque = parse_color("#ff0000").unwrap();
        assert_eq!(opaque.alpha, 1.0);
    }

    #[test]
    fn test_hue_units_and_correction() {
        let turn = parse_color("hsl(0.5turn, 100%, 50%)").unwrap();
        assert!(approx_eq!(f64, turn.channels[0], 180.0, epsilon = 1e-9));
        let negative = parse_color("hsl(-90, 100%, 50%)").unwrap();
        assert!(approx_eq!(f64, negative.channels[0], 270.0, epsilon = 1e-9));
        let wrapped = parse_color("hwb(540 10% 10%)").unwrap();
        assert!(approx_eq!(f64, wrapped.channels[0], 180.0, epsilon = 1e-9));
    }

    #[test]
    fn test_lab_percentage_reference_ranges() {
        let color = parse_color("lab(50% 100% -100%)").unwrap();
        assert!(approx_eq!(f64, color.channels[0], 50.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, color.channels[1], 125.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, color.channels[2], -125.0, epsilon = 1e-12));

        let ok = parse_color("oklab(50% 100% -50%)").unwrap();
        assert!(approx_eq!(f64, ok.channels[0], 0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, ok.channels[1], 0.4, epsilon = 1e-12));
        assert!(approx_eq!(f64, ok.channels[2], -0.2, epsilon = 1e-12));
    }

    #[test]
    fn test_cmyk_channels() {
        let color = parse_color("device-cmyk(30% 0% 60% 0% / 0.5)").unwrap();
        assert_eq!(color.channels.len(), 4);
        assert!(approx_eq!(f64, color.channels[0], 0.3, epsilon = 1e-12));
        assert!(approx_eq!(f64, color.channels[2], 0.6, epsilon = 1e-12));
        assert!(approx_eq!(f64, color.alpha, 0.5, epsilon = 1e-12));
    }

    #[test]
    fn test_named_parses_as_rgb_fractions() {
        let color = parse_color("white").unwrap();
        assert_eq!(color.format, Format::Named);
        assert_eq!(color.channels, vec![1.0, 1.0, 1.0]);
    }
}
