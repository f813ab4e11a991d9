//! The mixing engine: perceptual blending by straight-line interpolation in OKLab. Interpolating
//! the Cartesian axes rather than the polar ones means a blend never detours around the hue
//! wheel, and doing it in OKLab rather than sRGB is the difference between a believable midpoint
//! and the muddy gray every naive RGB mix produces. Strength is a percentage along the line from
//! the input color to the target; a negative strength (including negative zero, which is a real
//! and deliberate edge case) measures from the target back toward the input instead.

use adjust::subdivide;
use bound::clamp;
use convert::{from_hub, into_hub, Rgb};
use coord::Coord;
use error::ColorError;
use format::Format;
use parse::{self, NormalizedColor};
use serialize;
use spaces::OkLab;

/// What to blend toward, and how far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixSettings {
    /// The color to blend toward, in any supported format. Without a target the blend runs from
    /// the input to itself, so the operation degrades to a reserialization.
    pub target: Option<String>,
    /// How far to travel, as a percentage: 0 stays put, 100 arrives at the target. Negative
    /// strength reverses the direction of travel (blending *from* the target); magnitudes are
    /// corrected into [-100, 100].
    pub strength: f64,
    /// When nonzero, produce a series of intermediate blends (see [`mix_series`]).
    pub steps: u32,
}

impl Default for MixSettings {
    fn default() -> MixSettings {
        MixSettings {
            target: None,
            strength: 50.0,
            steps: 0,
        }
    }
}

fn blend(source: &NormalizedColor, target: &NormalizedColor, strength: f64) -> String {
    let source_hub = into_hub(source);
    let target_hub = into_hub(target);
    let x: Coord = OkLab::from_rgb(&source_hub).into();
    let y: Coord = OkLab::from_rgb(&target_hub).into();

    let s = clamp(strength, -100.0, 100.0) / 100.0;
    // -0.0 counts as a reversed blend: it lands on the target, where +0.0 stays at the source
    let reversed = s < 0.0 || (s == 0.0 && s.is_sign_negative());
    let (mixed, alpha) = if reversed {
        (
            y.interpolate(&x, s.abs()),
            target_hub.alpha + (source_hub.alpha - target_hub.alpha) * s.abs(),
        )
    } else {
        (
            x.interpolate(&y, s),
            source_hub.alpha + (target_hub.alpha - source_hub.alpha) * s,
        )
    };

    let output = match source.format {
        Format::Named => Format::Hex,
        other => other,
    };
    let hub: Rgb = OkLab::from(mixed).to_rgb(alpha);
    serialize::serialize(&from_hub(&hub, output))
}

fn parse_pair(
    settings: &MixSettings,
    color: &str,
) -> Result<(NormalizedColor, NormalizedColor), ColorError> {
    let source = parse::parse_color(color)?;
    let target = match settings.target {
        Some(ref text) => parse::parse_color(text)?,
        None => source.clone(),
    };
    Ok((source, target))
}

/// Blends the input toward the target at full strength and returns the result in the input's
/// format (named inputs come back as hex).
///
/// # Example
/// ```
/// # use polychrome::mix::{mix, MixSettings};
/// let settings = MixSettings {
///     target: Some("orange".to_string()),
///     strength: 25.0,
///     ..Default::default()
/// };
/// assert_eq!(mix(&settings, "red").unwrap(), "#ff4b00");
/// ```
pub fn mix(settings: &MixSettings, color: &str) -> Result<String, ColorError> {
    let (source, target) = parse_pair(settings, color)?;
    Ok(blend(&source, &target, settings.strength))
}

/// Blends in subdivided stages using the adjustment engine's subdivision rule, de-duplicated and
/// ordered from least- to most-blended.
pub fn mix_series(settings: &MixSettings, color: &str) -> Result<Vec<String>, ColorError> {
    let (source, target) = parse_pair(settings, color)?;
    let mut series: Vec<String> = subdivide(settings.steps)
        .into_iter()
        .map(|factor| blend(&source, &target, settings.strength * factor))
        .collect();
    series.dedup();
    series.reverse();
    Ok(series)
}
