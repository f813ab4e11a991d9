//! Renders normalized colors back into canonical CSS text. This is the one place in the pipeline
//! where numbers get clamped and rounded: everything upstream runs on full floats so that
//! round-trip error can't accumulate, and everything here is deterministic enough to compare
//! serialized strings byte for byte in tests. The legacy formats keep their comma syntax and
//! grow an `a` suffix on the function name when they carry alpha; the modern formats append
//! ` / alpha`. Alpha is omitted exactly when it equals 1.

use bound::{clamp, clamp_unit, LAB_AXIS_MAX, LAB_AXIS_MIN, LAB_LIGHTNESS_MAX, OKLAB_AXIS_MAX,
            OKLCH_CHROMA_MAX};
use format::Format;
use named;
use numeric::canonical_hue;
use parse::NormalizedColor;

// Rounds to a fixed number of decimal places and normalizes -0.0 away so it can't leak into
// output like "lab(52 -0 14)".
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor + 0.0
}

fn number(value: f64, places: i32) -> String {
    format!("{}", round_to(value, places))
}

fn percentage(fraction: f64) -> String {
    format!("{}%", round_to(clamp_unit(fraction) * 100.0, 3))
}

fn hue(value: f64) -> String {
    number(canonical_hue(value), 3)
}

fn byte_channel(fraction: f64) -> u8 {
    (clamp_unit(fraction) * 255.0).round() as u8
}

// The legacy tail: `rgb(...)` vs `rgba(..., a)`.
fn legacy(name: &str, arguments: &[String], alpha: f64) -> String {
    if alpha == 1.0 {
        format!("{}({})", name, arguments.join(", "))
    } else {
        format!("{}a({}, {})", name, arguments.join(", "), number(alpha, 3))
    }
}

// The modern tail: `hwb(...)` vs `hwb(... / a)`.
fn modern(name: &str, arguments: &[String], alpha: f64) -> String {
    if alpha == 1.0 {
        format!("{}({})", name, arguments.join(" "))
    } else {
        format!("{}({} / {})", name, arguments.join(" "), number(alpha, 3))
    }
}

fn hex(channels: &[f64], alpha: f64) -> String {
    let mut out = format!(
        "#{:02x}{:02x}{:02x}",
        byte_channel(channels.get(0).cloned().unwrap_or(0.0)),
        byte_channel(channels.get(1).cloned().unwrap_or(0.0)),
        byte_channel(channels.get(2).cloned().unwrap_or(0.0))
    );
    if alpha != 1.0 {
        out.push_str(&format!("{:02x}", byte_channel(alpha)));
    }
    out
}

/// Renders a normalized color as canonical CSS text, clamping every channel to its documented
/// domain first. A named-format color with no matching keyword (the overwhelmingly common case
/// after any adjustment) falls back to hex.
pub fn serialize(color: &NormalizedColor) -> String {
    let ch = |i: usize| color.channels.get(i).cloned().unwrap_or(0.0);
    let alpha = clamp_unit(color.alpha);
    match color.format {
        Format::Named => {
            let hex = hex(&color.channels, alpha);
            if alpha == 1.0 {
                named::reverse_lookup(&hex).map(String::from).unwrap_or(hex)
            } else {
                hex
            }
        }
        Format::Hex => hex(&color.channels, alpha),
        Format::Rgb => legacy(
            "rgb",
            &[
                byte_channel(ch(0)).to_string(),
                byte_channel(ch(1)).to_string(),
                byte_channel(ch(2)).to_string(),
            ],
            alpha,
        ),
        Format::Hsl => legacy(
            "hsl",
            &[hue(ch(0)), percentage(ch(1)), percentage(ch(2))],
            alpha,
        ),
        Format::Cmyk => modern(
            "device-cmyk",
            &[
                percentage(ch(0)),
                percentage(ch(1)),
                percentage(ch(2)),
                percentage(ch(3)),
            ],
            alpha,
        ),
        Format::Hwb => modern(
            "hwb",
            &[hue(ch(0)), percentage(ch(1)), percentage(ch(2))],
            alpha,
        ),
        Format::CieLab => modern(
            "lab",
            &[
                number(clamp(ch(0), 0.0, LAB_LIGHTNESS_MAX), 3),
                number(clamp(ch(1), LAB_AXIS_MIN, LAB_AXIS_MAX), 3),
                number(clamp(ch(2), LAB_AXIS_MIN, LAB_AXIS_MAX), 3),
            ],
            alpha,
        ),
        Format::CieLch => modern(
            "lch",
            &[
                number(clamp(ch(0), 0.0, LAB_LIGHTNESS_MAX), 3),
                number(clamp(ch(1), 0.0, ::std::f64::INFINITY), 3),
                hue(ch(2)),
            ],
            alpha,
        ),
        Format::OkLab => modern(
            "oklab",
            &[
                number(clamp_unit(ch(0)), 5),
                number(clamp(ch(1), -OKLAB_AXIS_MAX, OKLAB_AXIS_MAX), 5),
                number(clamp(ch(2), -OKLAB_AXIS_MAX, OKLAB_AXIS_MAX), 5),
            ],
            alpha,
        ),
        Format::OkLch => modern(
            "oklch",
            &[
                number(clamp_unit(ch(0)), 5),
                number(clamp(ch(1), 0.0, OKLCH_CHROMA_MAX), 5),
                hue(ch(2)),
            ],
            alpha,
        ),
    }
}
