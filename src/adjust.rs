//! The adjustment engine: "make it lighter", "mute it", "spin the hue" as arithmetic. All edits
//! happen in OKLCH, where the three axes match the words people use and a fixed-size step looks
//! like a fixed-size change anywhere in the gamut. Deltas are expressed as percentages of each
//! channel's usable range (degrees for hue), applied additively, clamped, and the result comes
//! back serialized in the input's own format. The one exception is that a named input returns
//! hex, since an adjusted color almost never lands exactly on a keyword again.

use bound::{clamp, clamp_unit, OKLCH_CHROMA_MAX};
use convert::{from_hub, into_hub};
use error::ColorError;
use format::Format;
use numeric::correct_hue;
use parse;
use serialize;
use spaces::OkLch;

/// The upper bound on `steps`, so a series can't be asked to allocate unboundedly.
pub const MAX_STEPS: u32 = 360;

/// The deltas to apply. Lightness and alpha are percentages of their full [0, 1] ranges, chroma
/// is a percentage of the usable 0–0.5 chroma range, and hue is a plain degree offset. Unset
/// fields leave their channel alone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdjustSettings {
    /// Lightness delta in percentage points: +10 on 0.5 gives 0.6.
    pub lightness: Option<f64>,
    /// Chroma delta in percentage points of the 0–0.5 range: +10 on 0.1 gives 0.15.
    pub chroma: Option<f64>,
    /// Hue delta in degrees, hue-corrected after addition.
    pub hue: Option<f64>,
    /// Alpha delta in percentage points.
    pub alpha: Option<f64>,
    /// When nonzero, produce a series of intermediate colors instead of one (see
    /// [`adjust_series`]).
    pub steps: u32,
}

// One adjustment, with every delta scaled by `factor`; the parse happens once in the callers.
fn apply(settings: &AdjustSettings, base: &parse::NormalizedColor, factor: f64) -> String {
    let hub = into_hub(base);
    let mut lch = OkLch::from_rgb(&hub);
    let mut alpha = hub.alpha;

    if let Some(delta) = settings.lightness {
        lch.l = clamp_unit(lch.l + delta * factor / 100.0);
    }
    if let Some(delta) = settings.chroma {
        let moved = lch.c + delta * factor / 100.0 * OKLCH_CHROMA_MAX;
        lch.c = clamp(moved, 0.0, OKLCH_CHROMA_MAX);
    }
    if let Some(delta) = settings.hue {
        lch.h = correct_hue(lch.h + delta * factor);
    }
    if let Some(delta) = settings.alpha {
        alpha = clamp_unit(alpha + delta * factor / 100.0);
    }

    let output = output_format(base.format);
    serialize::serialize(&from_hub(&lch.to_rgb(alpha), output))
}

// Named inputs serialize back as hex: an adjusted value rarely matches a keyword.
fn output_format(input: Format) -> Format {
    match input {
        Format::Named => Format::Hex,
        other => other,
    }
}

/// Applies the full deltas once and returns the adjusted color in the input's format.
///
/// # Example
/// ```
/// # use polychrome::adjust::{adjust, AdjustSettings};
/// let settings = AdjustSettings { hue: Some(180.0), ..Default::default() };
/// assert_eq!(adjust(&settings, "red").unwrap(), "#00a9db");
/// ```
pub fn adjust(settings: &AdjustSettings, color: &str) -> Result<String, ColorError> {
    let base = parse::parse_color(color)?;
    Ok(apply(settings, &base, 1.0))
}

/// Applies the deltas as a graded series: each delta is subdivided linearly, duplicates created
/// by rounding are dropped, and the results run from least- to most-adjusted. With `steps` of
/// zero this is just [`adjust`] in a one-element vector.
pub fn adjust_series(settings: &AdjustSettings, color: &str) -> Result<Vec<String>, ColorError> {
    let base = parse::parse_color(color)?;
    let mut series: Vec<String> = subdivide(settings.steps)
        .into_iter()
        .map(|factor| apply(settings, &base, factor))
        .collect();
    series.dedup();
    series.reverse();
    Ok(series)
}

/// The shared subdivision rule for stepped operations: factors `1 - i/steps` for `i` in
/// `0..steps`, so the full delta comes first and the smallest fraction of it last. A `steps` of
/// zero yields the single factor 1; values beyond [`MAX_STEPS`] are corrected down, in keeping
/// with the clamp-don't-reject rule everywhere else.
pub fn subdivide(steps: u32) -> Vec<f64> {
    let steps = steps.min(MAX_STEPS);
    if steps == 0 {
        return vec![1.0];
    }
    (0..steps)
        .map(|i| 1.0 - f64::from(i) / f64::from(steps))
        .collect()
}
