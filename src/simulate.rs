//! The color-vision-deficiency simulator. Dichromacy is modeled the established way: project
//! linear RGB onto the plane of colors the missing cone class can't distinguish from their
//! neighbors, then blend the projection with the original by a severity. Two projections are
//! offered. Brettel, Viénot & Mollon (1997) splits the color solid into two half-planes around a
//! per-type separation axis and projects each half with its own matrix; it is more faithful, and
//! the only correct option for tritan simulation. Viénot, Brettel & Mollon (1999) collapses the
//! projection to a single matrix, a popular shortcut that holds up well for protan and deutan
//! but not for tritan, so a tritan request under Viénot silently takes the Brettel path instead.
//! The matrices below are the precomputed sRGB-space forms of both papers. Achromatopsia doesn't
//! involve a confusion plane at all: it's a straight desaturation. Two further conditions the
//! simulator models as perceptual analogues: `illuminant` re-lights the color through the
//! Bradford adaptation (warm toward D50, cool with negative strength), and `sensitivity`
//! compresses lightness contrast and chroma the way photophobic viewing does.

use adjust::subdivide;
use bound::{clamp, clamp_unit};
use consts::{apply, SRGB_TO_XYZ, XYZ_D50_TO_D65, XYZ_D65_TO_D50, XYZ_TO_SRGB};
use convert::{from_hub, into_hub, Rgb};
use error::ColorError;
use format::Format;
use parse::{self, NormalizedColor};
use rulinalg::matrix::Matrix;
use serialize;
use spaces::{Hsl, OkLch};

/// The condition to simulate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Dichromatic or achromatic color vision deficiency.
    Colorblindness,
    /// Photophobic viewing: compressed lightness contrast and muted chroma.
    Sensitivity,
    /// A shifted white point: warm (D50) for positive strength, cool for negative.
    Illuminant,
}

/// The specific deficiency to simulate under
/// [`Colorblindness`](Condition::Colorblindness). The `-anomaly` forms are the partial
/// (anomalous trichromat) versions of their `-opia` siblings and default to half severity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deficiency {
    /// No functioning L (red) cones.
    Protanopia,
    /// Shifted L cones: partial protan deficiency.
    Protanomaly,
    /// No functioning M (green) cones.
    Deuteranopia,
    /// Shifted M cones: partial deutan deficiency.
    Deuteranomaly,
    /// No functioning S (blue) cones.
    Tritanopia,
    /// Shifted S cones: partial tritan deficiency.
    Tritanomaly,
    /// No functioning cones at all: complete desaturation.
    Achromatopsia,
}

impl Deficiency {
    // protan/deutan/tritan base axis, if the deficiency is dichromatic at all
    fn axis(&self) -> Option<Axis> {
        match *self {
            Deficiency::Protanopia | Deficiency::Protanomaly => Some(Axis::Protan),
            Deficiency::Deuteranopia | Deficiency::Deuteranomaly => Some(Axis::Deutan),
            Deficiency::Tritanopia | Deficiency::Tritanomaly => Some(Axis::Tritan),
            Deficiency::Achromatopsia => None,
        }
    }

    fn is_anomalous(&self) -> bool {
        match *self {
            Deficiency::Protanomaly | Deficiency::Deuteranomaly | Deficiency::Tritanomaly => true,
            _ => false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Axis {
    Protan,
    Deutan,
    Tritan,
}

/// Which projection algorithm to use for dichromatic types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// The two half-plane projection of Brettel, Viénot & Mollon (1997). The default, and the
    /// only one used for tritan types.
    Brettel,
    /// The single-matrix shortcut of Viénot, Brettel & Mollon (1999), protan/deutan only.
    Vienot,
}

/// What to simulate and how hard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulateSettings {
    /// The condition family.
    pub condition: Condition,
    /// The deficiency type, used by the colorblindness condition.
    #[serde(rename = "type")]
    pub kind: Deficiency,
    /// The dichromat projection method.
    pub method: Method,
    /// Severity in percent. Unset means full severity for the `-opia` types and the expanded
    /// conditions, half for the `-anomaly` types. Corrected into [-100, 100]; only the
    /// illuminant condition gives meaning to the negative half.
    pub strength: Option<f64>,
    /// When nonzero, produce a series of increasing severities (see [`simulate_series`]).
    pub steps: u32,
}

impl Default for SimulateSettings {
    fn default() -> SimulateSettings {
        SimulateSettings {
            condition: Condition::Colorblindness,
            kind: Deficiency::Protanopia,
            method: Method::Brettel,
            strength: None,
            steps: 0,
        }
    }
}

// Precomputed sRGB-space projection matrices, after Brettel/Viénot via the daltonization
// literature. Each Brettel axis carries the two half-plane projections and the normal of the
// separation plane between them; each Viénot axis collapses to one matrix.
lazy_static! {
    static ref BRETTEL_PROTAN_FIRST: Matrix<f64> = matrix![
        0.14510, 1.20165, -0.34675;
        0.10447, 0.85316,  0.04237;
        0.00429, -0.00603, 1.00174
    ];
    static ref BRETTEL_PROTAN_SECOND: Matrix<f64> = matrix![
        0.14115, 1.16782, -0.30897;
        0.10495, 0.85730,  0.03776;
        0.00431, -0.00586, 1.00155
    ];
    static ref BRETTEL_DEUTAN_FIRST: Matrix<f64> = matrix![
         0.36198, 0.86755, -0.22953;
         0.26099, 0.64512,  0.09389;
        -0.01975, 0.02686,  0.99289
    ];
    static ref BRETTEL_DEUTAN_SECOND: Matrix<f64> = matrix![
         0.37009, 0.88540, -0.25549;
         0.25767, 0.63782,  0.10451;
        -0.01950, 0.02741,  0.99209
    ];
    static ref BRETTEL_TRITAN_FIRST: Matrix<f64> = matrix![
         1.01354, 0.14268, -0.15622;
        -0.01181, 0.87561,  0.13619;
         0.07707, 0.81208,  0.11085
    ];
    static ref BRETTEL_TRITAN_SECOND: Matrix<f64> = matrix![
         0.93337, 0.19999, -0.13336;
         0.05809, 0.82565,  0.11626;
        -0.37923, 1.13825,  0.24098
    ];
    static ref VIENOT_PROTAN: Matrix<f64> = matrix![
        0.11238,  0.88762, 0.0;
        0.11238,  0.88762, 0.0;
        0.00401, -0.00401, 1.0
    ];
    static ref VIENOT_DEUTAN: Matrix<f64> = matrix![
         0.29275, 0.70725, 0.0;
         0.29275, 0.70725, 0.0;
        -0.02234, 0.02234, 1.0
    ];
}

const BRETTEL_PROTAN_NORMAL: [f64; 3] = [0.00048, 0.00416, -0.00464];
const BRETTEL_DEUTAN_NORMAL: [f64; 3] = [-0.00293, -0.00645, 0.00938];
const BRETTEL_TRITAN_NORMAL: [f64; 3] = [0.03960, -0.02831, -0.01129];

fn brettel_project(axis: Axis, linear: [f64; 3]) -> [f64; 3] {
    let (first, second, normal) = match axis {
        Axis::Protan => (&*BRETTEL_PROTAN_FIRST, &*BRETTEL_PROTAN_SECOND, BRETTEL_PROTAN_NORMAL),
        Axis::Deutan => (&*BRETTEL_DEUTAN_FIRST, &*BRETTEL_DEUTAN_SECOND, BRETTEL_DEUTAN_NORMAL),
        Axis::Tritan => (&*BRETTEL_TRITAN_FIRST, &*BRETTEL_TRITAN_SECOND, BRETTEL_TRITAN_NORMAL),
    };
    let dot = linear[0] * normal[0] + linear[1] * normal[1] + linear[2] * normal[2];
    if dot >= 0.0 {
        apply(first, linear)
    } else {
        apply(second, linear)
    }
}

fn project(axis: Axis, method: Method, linear: [f64; 3]) -> [f64; 3] {
    match (method, axis) {
        (Method::Brettel, _) | (Method::Vienot, Axis::Tritan) => brettel_project(axis, linear),
        (Method::Vienot, Axis::Protan) => apply(&VIENOT_PROTAN, linear),
        (Method::Vienot, Axis::Deutan) => apply(&VIENOT_DEUTAN, linear),
    }
}

fn dichromat(hub: &Rgb, axis: Axis, method: Method, severity: f64) -> Rgb {
    let linear = hub.to_linear();
    let projected = project(axis, method, linear);
    let blended = [
        linear[0] + (projected[0] - linear[0]) * severity,
        linear[1] + (projected[1] - linear[1]) * severity,
        linear[2] + (projected[2] - linear[2]) * severity,
    ];
    Rgb::from_linear(blended, hub.alpha)
}

// Full desaturation is an HSL collapse: keep the (max+min)/2 lightness, drop everything else.
fn achromat(hub: &Rgb, severity: f64) -> Rgb {
    let gray = Hsl::from_rgb(hub).l;
    Rgb {
        r: hub.r + (gray - hub.r) * severity,
        g: hub.g + (gray - hub.g) * severity,
        b: hub.b + (gray - hub.b) * severity,
        alpha: hub.alpha,
    }
}

// Re-light the color under a shifted white point: positive severities move D65 -> D50 (warm),
// negative ones run the adaptation the other way (cool).
fn relight(hub: &Rgb, severity: f64) -> Rgb {
    let linear = hub.to_linear();
    let xyz = apply(&SRGB_TO_XYZ, linear);
    let adapted = if severity >= 0.0 {
        apply(&XYZ_D65_TO_D50, xyz)
    } else {
        apply(&XYZ_D50_TO_D65, xyz)
    };
    let shifted = apply(&XYZ_TO_SRGB, adapted);
    let amount = severity.abs();
    let blended = [
        linear[0] + (shifted[0] - linear[0]) * amount,
        linear[1] + (shifted[1] - linear[1]) * amount,
        linear[2] + (shifted[2] - linear[2]) * amount,
    ];
    Rgb::from_linear(blended, hub.alpha)
}

// Photophobic compression: lightness halves its distance to mid-gray at full severity, chroma
// fades out linearly.
fn desensitize(hub: &Rgb, severity: f64) -> Rgb {
    let mut lch = OkLch::from_rgb(hub);
    lch.l += (0.5 - lch.l) * severity * 0.5;
    lch.c *= 1.0 - severity;
    lch.to_rgb(hub.alpha)
}

fn effective_strength(settings: &SimulateSettings) -> f64 {
    let default = if settings.condition == Condition::Colorblindness && settings.kind.is_anomalous()
    {
        50.0
    } else {
        100.0
    };
    clamp(settings.strength.unwrap_or(default), -100.0, 100.0)
}

fn run(settings: &SimulateSettings, base: &NormalizedColor, factor: f64) -> String {
    let hub = into_hub(base);
    let strength = effective_strength(settings) * factor;
    let simulated = match settings.condition {
        Condition::Colorblindness => {
            let severity = clamp_unit(strength / 100.0);
            match settings.kind.axis() {
                Some(axis) => dichromat(&hub, axis, settings.method, severity),
                None => achromat(&hub, severity),
            }
        }
        Condition::Illuminant => relight(&hub, clamp(strength / 100.0, -1.0, 1.0)),
        Condition::Sensitivity => desensitize(&hub, clamp_unit(strength / 100.0)),
    };
    let output = match base.format {
        Format::Named => Format::Hex,
        other => other,
    };
    serialize::serialize(&from_hub(&simulated, output))
}

/// Simulates the configured condition at its full severity and returns the result in the
/// input's format (named inputs come back as hex).
///
/// # Example
/// ```
/// # use polychrome::simulate::{simulate, Condition, Deficiency, SimulateSettings};
/// let settings = SimulateSettings {
///     kind: Deficiency::Achromatopsia,
///     ..Default::default()
/// };
/// assert_eq!(simulate(&settings, "crimson").unwrap(), "#787878");
/// ```
pub fn simulate(settings: &SimulateSettings, color: &str) -> Result<String, ColorError> {
    let base = parse::parse_color(color)?;
    Ok(run(settings, &base, 1.0))
}

/// Simulates at subdivided severities using the shared subdivision rule, de-duplicated and
/// ordered from mildest to most severe.
pub fn simulate_series(
    settings: &SimulateSettings,
    color: &str,
) -> Result<Vec<String>, ColorError> {
    let base = parse::parse_color(color)?;
    let mut series: Vec<String> = subdivide(settings.steps)
        .into_iter()
        .map(|factor| run(settings, &base, factor))
        .collect();
    series.dedup();
    series.reverse();
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colorblind(kind: Deficiency, method: Method, strength: Option<f64>) -> SimulateSettings {
        SimulateSettings {
            condition: Condition::Colorblindness,
            kind,
            method,
            strength,
            steps: 0,
        }
    }

    #[test]
    fn test_achromatopsia_fixture() {
        let settings = colorblind(Deficiency::Achromatopsia, Method::Brettel, None);
        assert_eq!(simulate(&settings, "crimson").unwrap(), "#787878");
        // half severity blends the gamma channels halfway: (220,20,60) toward (120,120,120)
        let half = colorblind(Deficiency::Achromatopsia, Method::Brettel, Some(50.0));
        assert_eq!(simulate(&half, "crimson").unwrap(), "#aa465a");
    }

    #[test]
    fn test_dichromat_fixtures() {
        let vienot = colorblind(Deficiency::Protanopia, Method::Vienot, None);
        assert_eq!(simulate(&vienot, "red").unwrap(), "#5e5e0d");
        let brettel = colorblind(Deficiency::Protanopia, Method::Brettel, None);
        assert_eq!(simulate(&brettel, "red").unwrap(), "#6a5b0e");
    }

    #[test]
    fn test_zero_strength_is_identity() {
        for &kind in [
            Deficiency::Protanopia,
            Deficiency::Deuteranopia,
            Deficiency::Tritanopia,
            Deficiency::Achromatopsia,
        ].iter()
        {
            let settings = colorblind(kind, Method::Brettel, Some(0.0));
            assert_eq!(simulate(&settings, "#dc143c").unwrap(), "#dc143c");
        }
    }

    #[test]
    fn test_vienot_tritan_falls_back_to_brettel() {
        let vienot = colorblind(Deficiency::Tritanopia, Method::Vienot, None);
        let brettel = colorblind(Deficiency::Tritanopia, Method::Brettel, None);
        assert_eq!(
            simulate(&vienot, "#8a2be2").unwrap(),
            simulate(&brettel, "#8a2be2").unwrap()
        );
    }

    #[test]
    fn test_anomaly_defaults_to_half_severity() {
        let anomaly = colorblind(Deficiency::Deuteranomaly, Method::Brettel, None);
        let half = colorblind(Deficiency::Deuteranopia, Method::Brettel, Some(50.0));
        assert_eq!(
            simulate(&anomaly, "#2e8b57").unwrap(),
            simulate(&half, "#2e8b57").unwrap()
        );
    }

    #[test]
    fn test_deutan_collapses_red_green_but_spares_blue() {
        let settings = colorblind(Deficiency::Deuteranopia, Method::Vienot, None);
        // both primaries land on the confusion line, where the red and green channels agree
        let red = simulate(&settings, "#ff0000").unwrap();
        assert_eq!(&red[1..3], &red[3..5]);
        let green = simulate(&settings, "#00ff00").unwrap();
        assert_eq!(&green[1..3], &green[3..5]);
        assert_ne!(red, green);
        // blue is on the projection plane already and passes through untouched
        let blue = simulate(&settings, "#0000ff").unwrap();
        assert_eq!(blue, "#0000ff");
    }

    #[test]
    fn test_illuminant_warms_and_cools() {
        let warm = SimulateSettings {
            condition: Condition::Illuminant,
            ..Default::default()
        };
        let warmed = simulate(&warm, "#ffffff").unwrap();
        // red holds at the ceiling, blue drops: the cast goes yellow
        assert_eq!(&warmed[1..3], "ff");
        assert!(u8::from_str_radix(&warmed[5..7], 16).unwrap() < 0xff);

        let cool = SimulateSettings {
            condition: Condition::Illuminant,
            strength: Some(-100.0),
            ..Default::default()
        };
        let cooled = simulate(&cool, "#ffffff").unwrap();
        assert_eq!(&cooled[5..7], "ff");
        assert!(u8::from_str_radix(&cooled[1..3], 16).unwrap() < 0xff);
    }

    #[test]
    fn test_sensitivity_mutes_chroma_and_contrast() {
        let settings = SimulateSettings {
            condition: Condition::Sensitivity,
            ..Default::default()
        };
        let muted = simulate(&settings, "red").unwrap();
        let before = OkLch::from_rgb(&into_hub(&::parse::parse_color("red").unwrap()));
        let after = OkLch::from_rgb(&into_hub(&::parse::parse_color(&muted).unwrap()));
        assert!(after.c < before.c * 0.25);
        assert!((after.l - 0.5).abs() < (before.l - 0.5).abs() + 1e-6);
    }

    #[test]
    fn test_series_orders_mild_to_severe() {
        let mut settings = colorblind(Deficiency::Achromatopsia, Method::Brettel, None);
        settings.steps = 4;
        let series = simulate_series(&settings, "crimson").unwrap();
        assert_eq!(series.last().unwrap(), "#787878");
        assert!(series.len() <= 4 && series.len() > 1);
    }
}
