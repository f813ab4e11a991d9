//! The accessibility filter: winnow a palette down to the candidates that read legibly against a
//! background. Two independent rulers are offered. WCAG mode is the compliance one: relative
//! luminance under the 0.2126/0.7152/0.0722 weighting, the (L+0.05)/(L+0.05) ratio, and the
//! AA/AAA thresholds from the standard, with ratios past the theoretical 21 ceiling rejected as
//! nonsense. Custom mode is the designer's ruler, a difference in OKLCH lightness (in percentage
//! points) filtered against a band, for when "passes AA" is the wrong question and "is this
//! visibly lighter but not glaring" is the right one. Palette entries are opaque here: whatever
//! strings survive come back verbatim and in order.

use convert::{into_hub, linearize, Rgb};
use error::ColorError;
use parse;
use spaces::OkLch;

/// The WCAG conformance level to filter for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Level AA: ratio at least 4.5, or 3 for large text.
    AA,
    /// Level AAA: ratio at least 7, or 4.5 for large text.
    AAA,
}

/// Which ruler to filter the palette with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContrastSettings {
    /// WCAG luminance-ratio filtering.
    Wcag {
        /// The conformance level to require.
        rating: Rating,
        /// Use the relaxed large-text thresholds.
        enhanced: bool,
        /// Treat the palette as text on a dark UI: candidates must be lighter than the
        /// background, where the default expects them darker.
        dark: bool,
    },
    /// Colorimetric filtering on OKLCH lightness difference.
    Custom {
        /// The smallest acceptable lightness difference, in percentage points.
        min: f64,
        /// The largest acceptable difference; unset means unbounded above.
        max: Option<f64>,
        /// Swaps which side of the difference is the anchor: by default candidates must sit
        /// *below* the background's lightness by [min, max]; with `dark` they must sit above.
        dark: bool,
    },
}

/// The WCAG relative luminance of a hub color: the weighted sum of its linearized channels.
pub fn relative_luminance(rgb: &Rgb) -> f64 {
    let lin = [linearize(rgb.r), linearize(rgb.g), linearize(rgb.b)];
    0.2126 * lin[0] + 0.7152 * lin[1] + 0.0722 * lin[2]
}

/// The WCAG contrast ratio between two colors, always at least 1.
pub fn contrast_ratio(a: &Rgb, b: &Rgb) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

fn wcag_threshold(rating: Rating, enhanced: bool) -> f64 {
    match (rating, enhanced) {
        (Rating::AA, false) => 4.5,
        (Rating::AA, true) => 3.0,
        (Rating::AAA, false) => 7.0,
        (Rating::AAA, true) => 4.5,
    }
}

/// Filters a palette against a background color, returning the surviving entries verbatim and in
/// their original order. Fails only when the background or a palette entry is not a parseable
/// color.
///
/// # Example
/// ```
/// # use polychrome::contrast::{contrast, ContrastSettings, Rating};
/// let settings = ContrastSettings::Wcag { rating: Rating::AA, enhanced: false, dark: false };
/// let palette = ["#000000", "#777777", "#767676"];
/// let kept = contrast(&settings, "#ffffff", &palette).unwrap();
/// // #777777 sits at ratio 4.48, just under the 4.5 bar
/// assert_eq!(kept, vec!["#000000", "#767676"]);
/// ```
pub fn contrast<S: AsRef<str>>(
    settings: &ContrastSettings,
    background: &str,
    palette: &[S],
) -> Result<Vec<String>, ColorError> {
    let anchor = into_hub(&parse::parse_color(background)?);
    let mut kept = Vec::new();
    for entry in palette {
        let text = entry.as_ref();
        let candidate = into_hub(&parse::parse_color(text)?);
        if accepts(settings, &anchor, &candidate) {
            kept.push(text.to_string());
        }
    }
    Ok(kept)
}

fn accepts(settings: &ContrastSettings, anchor: &Rgb, candidate: &Rgb) -> bool {
    match *settings {
        ContrastSettings::Wcag { rating, enhanced, dark } => {
            let ratio = contrast_ratio(anchor, candidate);
            let directional = if dark {
                relative_luminance(candidate) >= relative_luminance(anchor)
            } else {
                relative_luminance(candidate) <= relative_luminance(anchor)
            };
            // the ceiling gets a hair of slack: black-on-white computes to 21 ± a few ulps
            directional && ratio >= wcag_threshold(rating, enhanced) && ratio <= 21.0 + 1e-9
        }
        ContrastSettings::Custom { min, max, dark } => {
            let anchor_l = OkLch::from_rgb(anchor).l;
            let candidate_l = OkLch::from_rgb(candidate).l;
            let difference = if dark {
                (candidate_l - anchor_l) * 100.0
            } else {
                (anchor_l - candidate_l) * 100.0
            };
            difference >= min && max.map(|m| difference <= m).unwrap_or(true)
        }
    }
}
