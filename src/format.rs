//! This module defines the closed set of color formats the library understands and the grammar
//! that classifies a string into one of them. The grammar follows the CSS color syntaxes
//! ([https://www.w3.org/TR/css-color-4/](https://www.w3.org/TR/css-color-4/)) with one deliberate
//! split: the two "legacy" functional forms (`rgb()`, `hsl()`) accept comma-or-space separated
//! arguments and a comma-or-slash alpha, while the "modern" forms (`device-cmyk()`, `hwb()`,
//! `lab()`, `lch()`, `oklab()`, `oklch()`) require space separation and a slash-only alpha.
//! Classification tries every format in declaration order and takes the first match; a string no
//! grammar claims is not a color, which is the library's single failure mode.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use error::ColorError;
use named;

/// The closed enumeration of supported color formats. Every conversion, adjustment, and
/// simulation in the library dispatches over this enum, so the compiler proves no format is ever
/// left unhandled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// A CSS named color keyword, like `steelblue`. Resolved through a fixed keyword table.
    Named,
    /// Hexadecimal notation: `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
    Hex,
    /// The legacy `rgb()`/`rgba()` functional notation.
    Rgb,
    /// The legacy `hsl()`/`hsla()` functional notation.
    Hsl,
    /// The `device-cmyk()` functional notation. A naive ink model, not a calibrated one.
    Cmyk,
    /// The `hwb()` (hue-whiteness-blackness) functional notation.
    Hwb,
    /// The `lab()` functional notation for CIELAB, D50-referenced as in CSS.
    CieLab,
    /// The `lch()` functional notation, the cylindrical form of CIELAB.
    CieLch,
    /// The `oklab()` functional notation for Ottosson's OKLab space.
    OkLab,
    /// The `oklch()` functional notation, the cylindrical form of OKLab.
    OkLch,
}

/// Every format, in the order the grammar tries them during classification.
pub static ALL_FORMATS: &[Format] = &[
    Format::Named,
    Format::Hex,
    Format::Rgb,
    Format::Hsl,
    Format::Cmyk,
    Format::Hwb,
    Format::CieLab,
    Format::CieLch,
    Format::OkLab,
    Format::OkLch,
];

// The shared token vocabulary. A number is an optionally signed integer or decimal; a value is a
// number with an optional percent sign; a hue is a number with an optional angle unit.
const NUMBER: &str = r"[+-]?(?:\d+\.?\d*|\.\d+)";

fn value() -> String {
    format!("{}%?", NUMBER)
}

fn hue() -> String {
    format!("{}(?:deg|rad|grad|turn)?", NUMBER)
}

// Legacy formats tolerate commas or bare spaces between channels; modern formats insist on spaces.
const LEGACY_SEP: &str = r"(?:\s*,\s*|\s+)";

fn legacy_alpha() -> String {
    format!(r"(?:\s*[,/]\s*{})?", value())
}

fn modern_alpha() -> String {
    format!(r"(?:\s*/\s*{})?", value())
}

lazy_static! {
    static ref HEX_PATTERN: Regex = Regex::new(
        r"^#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{4}|[0-9a-fA-F]{3})$"
    ).unwrap();
    static ref RGB_PATTERN: Regex = Regex::new(&format!(
        r"(?i)^rgba?\(\s*{v}(?:{sep}{v}){{2}}{alpha}\s*\)$",
        v = value(),
        sep = LEGACY_SEP,
        alpha = legacy_alpha()
    )).unwrap();
    static ref HSL_PATTERN: Regex = Regex::new(&format!(
        r"(?i)^hsla?\(\s*{h}(?:{sep}{v}){{2}}{alpha}\s*\)$",
        h = hue(),
        v = value(),
        sep = LEGACY_SEP,
        alpha = legacy_alpha()
    )).unwrap();
    static ref CMYK_PATTERN: Regex = Regex::new(&format!(
        r"(?i)^device-cmyk\(\s*{v}(?:\s+{v}){{3}}{alpha}\s*\)$",
        v = value(),
        alpha = modern_alpha()
    )).unwrap();
    static ref HWB_PATTERN: Regex = Regex::new(&format!(
        r"(?i)^hwb\(\s*{h}(?:\s+{v}){{2}}{alpha}\s*\)$",
        h = hue(),
        v = value(),
        alpha = modern_alpha()
    )).unwrap();
    static ref LAB_PATTERN: Regex = Regex::new(&format!(
        r"(?i)^lab\(\s*{v}\s+{v}\s+{v}{alpha}\s*\)$",
        v = value(),
        alpha = modern_alpha()
    )).unwrap();
    static ref LCH_PATTERN: Regex = Regex::new(&format!(
        r"(?i)^lch\(\s*{v}\s+{v}\s+{h}{alpha}\s*\)$",
        v = value(),
        h = hue(),
        alpha = modern_alpha()
    )).unwrap();
    static ref OKLAB_PATTERN: Regex = Regex::new(&format!(
        r"(?i)^oklab\(\s*{v}\s+{v}\s+{v}{alpha}\s*\)$",
        v = value(),
        alpha = modern_alpha()
    )).unwrap();
    static ref OKLCH_PATTERN: Regex = Regex::new(&format!(
        r"(?i)^oklch\(\s*{v}\s+{v}\s+{h}{alpha}\s*\)$",
        v = value(),
        h = hue(),
        alpha = modern_alpha()
    )).unwrap();
}

impl Format {
    /// Returns true if the given (pre-trimmed) text matches this format's grammar.
    pub fn matches(&self, text: &str) -> bool {
        match *self {
            Format::Named => named::lookup(text).is_some(),
            Format::Hex => HEX_PATTERN.is_match(text),
            Format::Rgb => RGB_PATTERN.is_match(text),
            Format::Hsl => HSL_PATTERN.is_match(text),
            Format::Cmyk => CMYK_PATTERN.is_match(text),
            Format::Hwb => HWB_PATTERN.is_match(text),
            Format::CieLab => LAB_PATTERN.is_match(text),
            Format::CieLch => LCH_PATTERN.is_match(text),
            Format::OkLab => OKLAB_PATTERN.is_match(text),
            Format::OkLch => OKLCH_PATTERN.is_match(text),
        }
    }

    /// The canonical lowercase name of this format, as accepted by [`Format::from_str`].
    pub fn name(&self) -> &'static str {
        match *self {
            Format::Named => "named",
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Hsl => "hsl",
            Format::Cmyk => "cmyk",
            Format::Hwb => "hwb",
            Format::CieLab => "cielab",
            Format::CieLch => "cielch",
            Format::OkLab => "oklab",
            Format::OkLch => "oklch",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    /// Parses a format name. The CIE formats answer to both their CSS function names (`lab`,
    /// `lch`) and their longhand names (`cielab`, `cielch`); `device-cmyk` likewise doubles for
    /// `cmyk`. Anything else is an [`InvalidColorFormat`](ColorError::InvalidColorFormat).
    fn from_str(s: &str) -> Result<Format, ColorError> {
        match s.to_lowercase().as_str() {
            "named" => Ok(Format::Named),
            "hex" => Ok(Format::Hex),
            "rgb" => Ok(Format::Rgb),
            "hsl" => Ok(Format::Hsl),
            "cmyk" | "device-cmyk" => Ok(Format::Cmyk),
            "hwb" => Ok(Format::Hwb),
            "lab" | "cielab" => Ok(Format::CieLab),
            "lch" | "cielch" => Ok(Format::CieLch),
            "oklab" => Ok(Format::OkLab),
            "oklch" => Ok(Format::OkLch),
            _ => Err(ColorError::invalid(s)),
        }
    }
}

/// Classifies a color string, returning the first format whose grammar matches. Surrounding
/// whitespace is ignored; everything else is significant. Fails with
/// [`InvalidColorFormat`](ColorError::InvalidColorFormat) when nothing matches.
///
/// # Example
/// ```
/// # use polychrome::format::{validate, Format};
/// assert_eq!(validate("tomato").unwrap(), Format::Named);
/// assert_eq!(validate("#ff6347").unwrap(), Format::Hex);
/// assert_eq!(validate("oklch(0.7 0.19 33)").unwrap(), Format::OkLch);
/// assert!(validate("burnt umber").is_err());
/// ```
pub fn validate(text: &str) -> Result<Format, ColorError> {
    let trimmed = text.trim();
    for format in ALL_FORMATS {
        if format.matches(trimmed) {
            return Ok(*format);
        }
    }
    Err(ColorError::invalid(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_covers_all_formats() {
        let samples = [
            ("cornflowerblue", Format::Named),
            ("#abc", Format::Hex),
            ("#aabbccdd", Format::Hex),
            ("rgb(1, 2, 3)", Format::Rgb),
            ("rgba(1 2 3 / 40%)", Format::Rgb),
            ("hsl(120, 50%, 50%)", Format::Hsl),
            ("hsl(0.25turn 50% 50%)", Format::Hsl),
            ("device-cmyk(30% 0% 60% 0%)", Format::Cmyk),
            ("hwb(90 10% 10%)", Format::Hwb),
            ("lab(52.2 40.1 59.9)", Format::CieLab),
            ("lch(52.2 72.2 50)", Format::CieLch),
            ("oklab(0.62796 0.22486 0.12585)", Format::OkLab),
            ("oklch(0.62796 0.25768 29.234 / 0.5)", Format::OkLch),
        ];
        for &(text, expected) in samples.iter() {
            assert_eq!(validate(text).unwrap(), expected, "for input {}", text);
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitivity() {
        assert_eq!(validate("  RGB(255, 0, 0)  ").unwrap(), Format::Rgb);
        assert_eq!(validate("SteelBlue").unwrap(), Format::Named);
        assert_eq!(validate("#FFAA00").unwrap(), Format::Hex);
    }

    #[test]
    fn test_delimiter_families() {
        // legacy tolerates commas and a comma alpha
        assert!(Format::Rgb.matches("rgb(1, 2, 3, 0.5)"));
        assert!(Format::Hsl.matches("hsl(120 50% 50% / 50%)"));
        // modern formats reject commas outright
        assert!(!Format::Hwb.matches("hwb(90, 10%, 10%)"));
        assert!(!Format::OkLch.matches("oklch(0.6, 0.1, 30)"));
        assert!(!Format::Cmyk.matches("device-cmyk(30%, 0%, 60%, 0%)"));
    }

    #[test]
    fn test_rejections() {
        for bad in ["", "#ab", "#abcde", "rgb(1, 2)", "lab(1 2)", "oklch()", "not-a-color"].iter() {
            assert!(validate(bad).is_err(), "expected {} to be rejected", bad);
        }
    }

    #[test]
    fn test_format_names_round_trip() {
        for format in ALL_FORMATS {
            assert_eq!(format.name().parse::<Format>().unwrap(), *format);
        }
        assert_eq!("lab".parse::<Format>().unwrap(), Format::CieLab);
        assert_eq!("device-cmyk".parse::<Format>().unwrap(), Format::Cmyk);
        assert!("pantone".parse::<Format>().is_err());
    }
}
