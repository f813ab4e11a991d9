//! This module separates out the fiddly end of string handling: turning a single raw component
//! token ("130", "44%", "0.25turn", "-90deg") into a number with a known interpretation, and the
//! two hue-normalization rules used on either side of the pipeline. The grammar has already
//! vouched for every token by the time it gets here, so this code is written to degrade (a token
//! that somehow fails to parse becomes zero) rather than to report.

/// A parsed component token. The distinction matters because the same digits mean different
/// things per channel: "50" is 50/255ths of a red channel but 50 units of CIELAB lightness.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Token {
    /// A bare number, like "124" or ".5".
    Number(f64),
    /// A number suffixed with '%', carried here *without* dividing by 100: "45.5%" is
    /// `Percentage(45.5)`, and each channel decides what 100% means.
    Percentage(f64),
    /// An angle, already converted to degrees whatever unit it was written in.
    Angle(f64),
}

impl Token {
    /// The raw numeric payload, interpretation-free.
    pub fn raw(&self) -> f64 {
        match *self {
            Token::Number(v) | Token::Percentage(v) | Token::Angle(v) => v,
        }
    }
}

/// Parses one raw component substring into a [`Token`]. Angle units follow CSS: `deg` is the
/// identity, `rad` multiplies by 180/π, `grad` by 0.9, and `turn` by 360.
pub fn parse_token(raw: &str) -> Token {
    let lower = raw.trim().to_lowercase();
    if let Some(stripped) = strip_suffix(&lower, "%") {
        return Token::Percentage(parse_number(stripped));
    }
    for &(unit, scale) in [
        ("deg", 1.0),
        ("grad", 0.9),
        ("rad", 180.0 / ::std::f64::consts::PI),
        ("turn", 360.0),
    ].iter()
    {
        if let Some(stripped) = strip_suffix(&lower, unit) {
            return Token::Angle(parse_number(stripped) * scale);
        }
    }
    Token::Number(parse_number(&lower))
}

// str::strip_suffix the hard way, to keep the minimum supported compiler old.
fn strip_suffix<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    if text.ends_with(suffix) {
        Some(&text[..text.len() - suffix.len()])
    } else {
        None
    }
}

fn parse_number(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

/// Normalizes a parsed hue into the working interval. Negative hues are folded up by a single
/// turn and made positive (`-30` becomes `330`); hues of a full turn or more are reduced modulo
/// 360. The result always lands in `[0, 360)`, comfortably inside the documented `(-360, 360]`
/// domain.
pub fn correct_hue(degrees: f64) -> f64 {
    let mut h = degrees;
    if h < 0.0 {
        h = (h + 360.0).abs();
    }
    if h >= 360.0 {
        h %= 360.0;
    }
    h
}

/// Reduces any hue to the canonical serialization range `[0, 360)`. Unlike [`correct_hue`] this
/// is a true modulus, used at output time where intermediate math may have wandered anywhere.
pub fn canonical_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 when the input is a tiny negative number
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_parsing() {
        assert_eq!(parse_token("130"), Token::Number(130.0));
        assert_eq!(parse_token(".5"), Token::Number(0.5));
        assert_eq!(parse_token("-12.25"), Token::Number(-12.25));
        assert_eq!(parse_token("44%"), Token::Percentage(44.0));
        assert_eq!(parse_token("90deg"), Token::Angle(90.0));
        assert_eq!(parse_token("200grad"), Token::Angle(180.0));
        assert_eq!(parse_token("0.5turn"), Token::Angle(180.0));
    }

    #[test]
    fn test_radian_tokens() {
        let token = parse_token("3.14159265358979rad");
        match token {
            Token::Angle(deg) => assert!(approx_eq!(f64, deg, 180.0, epsilon = 1e-9)),
            _ => panic!("expected an angle"),
        }
    }

    #[test]
    fn test_hue_correction() {
        assert_eq!(correct_hue(90.0), 90.0);
        assert_eq!(correct_hue(-30.0), 330.0);
        assert_eq!(correct_hue(360.0), 0.0);
        assert_eq!(correct_hue(540.0), 180.0);
        // the fold-then-abs rule: a hue more than a full negative turn reflects instead of
        // wrapping
        assert_eq!(correct_hue(-400.0), 40.0);
    }

    #[test]
    fn test_canonical_hue() {
        assert_eq!(canonical_hue(0.0), 0.0);
        assert_eq!(canonical_hue(359.9), 359.9);
        assert_eq!(canonical_hue(360.0), 0.0);
        assert_eq!(canonical_hue(-90.0), 270.0);
        assert_eq!(canonical_hue(725.0), 5.0);
    }
}
