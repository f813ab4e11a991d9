//! The conversion graph. Every transformation in the library is two hops: any source format into
//! the RGB hub, then the hub out into any target format. That keeps the graph linear in the
//! number of formats instead of quadratic, and it means a new format earns full
//! interconvertibility by writing exactly two functions. The two dispatch tables are `match`
//! expressions over [`Format`], so adding a variant without wiring it in is a compile error, not
//! a runtime surprise.

use error::ColorError;
use format::Format;
use parse::{self, NormalizedColor};
use serialize;
use spaces::{CieLab, CieLch, Cmyk, Hsl, Hwb, OkLab, OkLch};

/// The hub color: gamma-encoded sRGB with all channels as fractions. Every conversion passes
/// through this value exactly once. Values may sit outside [0, 1] mid-pipeline; out-of-gamut
/// results are only clamped at serialization.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// The red channel as a fraction.
    pub r: f64,
    /// The green channel as a fraction.
    pub g: f64,
    /// The blue channel as a fraction.
    pub b: f64,
    /// The alpha channel as a fraction.
    pub alpha: f64,
}

/// Decodes one gamma-encoded sRGB channel to linear light.
pub fn linearize(channel: f64) -> f64 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes one linear-light channel back to gamma sRGB. Negative inputs ride the linear segment,
/// so out-of-gamut values stay finite and get cleaned up by the serializer's clamp.
pub fn delinearize(channel: f64) -> f64 {
    if channel <= 0.0031308 {
        12.92 * channel
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    }
}

impl Rgb {
    /// The three color channels decoded to linear light.
    pub fn to_linear(&self) -> [f64; 3] {
        [linearize(self.r), linearize(self.g), linearize(self.b)]
    }

    /// Builds a hub color from linear-light channels.
    pub fn from_linear(linear: [f64; 3], alpha: f64) -> Rgb {
        Rgb {
            r: delinearize(linear[0]),
            g: delinearize(linear[1]),
            b: delinearize(linear[2]),
            alpha,
        }
    }
}

// INPUT_TO_RGB: one entry per source format. Named and hex have already been reduced to RGB
// fractions by the extractor/parser, so their entries are the identity.
pub(crate) fn into_hub(color: &NormalizedColor) -> Rgb {
    let ch = |i: usize| color.channels.get(i).cloned().unwrap_or(0.0);
    match color.format {
        Format::Named | Format::Hex | Format::Rgb => Rgb {
            r: ch(0),
            g: ch(1),
            b: ch(2),
            alpha: color.alpha,
        },
        Format::Hsl => Hsl { h: ch(0), s: ch(1), l: ch(2) }.to_rgb(color.alpha),
        Format::Cmyk => Cmyk { c: ch(0), m: ch(1), y: ch(2), k: ch(3) }.to_rgb(color.alpha),
        Format::Hwb => Hwb { h: ch(0), w: ch(1), b: ch(2) }.to_rgb(color.alpha),
        Format::CieLab => CieLab { l: ch(0), a: ch(1), b: ch(2) }.to_rgb(color.alpha),
        Format::CieLch => CieLch { l: ch(0), c: ch(1), h: ch(2) }.to_rgb(color.alpha),
        Format::OkLab => OkLab { l: ch(0), a: ch(1), b: ch(2) }.to_rgb(color.alpha),
        Format::OkLch => OkLch { l: ch(0), c: ch(1), h: ch(2) }.to_rgb(color.alpha),
    }
}

// OUTPUT_FROM_RGB: one entry per target format.
pub(crate) fn from_hub(rgb: &Rgb, to: Format) -> NormalizedColor {
    let channels = match to {
        Format::Named | Format::Hex | Format::Rgb => vec![rgb.r, rgb.g, rgb.b],
        Format::Hsl => {
            let hsl = Hsl::from_rgb(rgb);
            vec![hsl.h, hsl.s, hsl.l]
        }
        Format::Cmyk => {
            let cmyk = Cmyk::from_rgb(rgb);
            vec![cmyk.c, cmyk.m, cmyk.y, cmyk.k]
        }
        Format::Hwb => {
            let hwb = Hwb::from_rgb(rgb);
            vec![hwb.h, hwb.w, hwb.b]
        }
        Format::CieLab => {
            let lab = CieLab::from_rgb(rgb);
            vec![lab.l, lab.a, lab.b]
        }
        Format::CieLch => {
            let lch = CieLch::from_rgb(rgb);
            vec![lch.l, lch.c, lch.h]
        }
        Format::OkLab => {
            let lab = OkLab::from_rgb(rgb);
            vec![lab.l, lab.a, lab.b]
        }
        Format::OkLch => {
            let lch = OkLch::from_rgb(rgb);
            vec![lch.l, lch.c, lch.h]
        }
    };
    NormalizedColor {
        format: to,
        channels,
        alpha: rgb.alpha,
    }
}

/// Converts a color string into the target format and returns the canonical serialization.
/// Fails with [`InvalidColorFormat`](ColorError::InvalidColorFormat) when the input matches no
/// grammar; out-of-range *values* inside a recognized grammar never fail, they clamp.
///
/// # Example
/// ```
/// # use polychrome::convert::convert;
/// # use polychrome::format::Format;
/// assert_eq!(convert("red", Format::Hex).unwrap(), "#ff0000");
/// assert_eq!(convert("#ff0000", Format::Hsl).unwrap(), "hsl(0, 100%, 50%)");
/// ```
pub fn convert(color: &str, to: Format) -> Result<String, ColorError> {
    let parsed = parse::parse_color(color)?;
    let hub = into_hub(&parsed);
    Ok(serialize::serialize(&from_hub(&hub, to)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_hex_fixtures() {
        assert_eq!(convert("red", Format::Hex).unwrap(), "#ff0000");
        assert_eq!(convert("#ff0000", Format::Named).unwrap(), "red");
        assert_eq!(convert("#00ffff", Format::Named).unwrap(), "aqua");
        // no keyword for this one: the named target falls back to hex
        assert_eq!(convert("#010203", Format::Named).unwrap(), "#010203");
    }

    #[test]
    fn test_cmyk_to_hsl_chain() {
        assert_eq!(
            convert("device-cmyk(30% 0% 60% 0%)", Format::Hsl).unwrap(),
            "hsl(90, 100%, 70%)"
        );
    }

    #[test]
    fn test_rgb_identity() {
        assert_eq!(convert("rgb(255, 0, 0)", Format::Rgb).unwrap(), "rgb(255, 0, 0)");
        assert_eq!(
            convert("rgba(16 32 64 / 25%)", Format::Rgb).unwrap(),
            "rgba(16, 32, 64, 0.25)"
        );
    }

    #[test]
    fn test_oklab_reference_fixture() {
        assert_eq!(
            convert("red", Format::OkLab).unwrap(),
            "oklab(0.62796 0.22486 0.12585)"
        );
    }

    #[test]
    fn test_gray_hwb_fast_path() {
        assert_eq!(convert("hwb(0 60% 60%)", Format::Hex).unwrap(), "#808080");
    }

    #[test]
    fn test_round_trips_through_the_hub() {
        // convert out to every format and back to hex: the hub values must survive
        for &target in [
            Format::Rgb,
            Format::Hsl,
            Format::Cmyk,
            Format::Hwb,
            Format::CieLab,
            Format::CieLch,
            Format::OkLab,
            Format::OkLch,
        ].iter()
        {
            for &hex in ["#ff0000", "#008000", "#0000ff", "#808080", "#ffffff", "#000000"].iter() {
                let there = convert(hex, target).unwrap();
                let back = convert(&there, Format::Hex).unwrap();
                assert_eq!(back, hex, "{} failed to round-trip via {:?}", hex, target);
            }
        }
    }

    #[test]
    fn test_self_conversion_is_identity() {
        // converting a canonical string to its own format reproduces it byte for byte
        for &text in [
            "#4682b4",
            "rgb(70, 130, 180)",
            "hsl(90, 100%, 70%)",
            "device-cmyk(30% 0% 60% 0%)",
            "hwb(120 25% 10%)",
            "oklab(0.62796 0.22486 0.12585)",
            "steelblue",
        ].iter()
        {
            let format = ::format::validate(text).unwrap();
            assert_eq!(convert(text, format).unwrap(), text);
        }
    }

    #[test]
    fn test_unknown_input_fails() {
        assert!(convert("not-a-color", Format::Hex).is_err());
        assert!(convert("rgb(1,2)", Format::Hex).is_err());
    }
}
