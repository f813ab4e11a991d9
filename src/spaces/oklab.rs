//! A module that implements [OKLab](https://bottosson.github.io/posts/oklab/), Ottosson's
//! perceptually uniform space. OKLab earns its keep over CIELAB in two places this library leans
//! on hard: predicted lightness tracks perceived lightness much better (CIELAB famously thinks
//! blue is darker than it looks), and hue stays put when chroma and lightness move, which is
//! exactly what you want when adjusting or blending colors. The transform is pleasantly small:
//! linear sRGB into a cone-response basis, a cube root per channel, and one more matrix. Both the
//! forward and inverse matrices are fixed constants from the published definition.

use consts::{apply, LMS_TO_OKLAB, LMS_TO_SRGB, OKLAB_TO_LMS, SRGB_TO_LMS};
use convert::Rgb;
use coord::Coord;

/// A color in the OKLab space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    /// The perceived lightness as a fraction: 0 is black, 1 is white.
    pub l: f64,
    /// The green-to-red opponent axis, within about ±0.5 for displayable colors.
    pub a: f64,
    /// The blue-to-yellow opponent axis, same range.
    pub b: f64,
}

impl OkLab {
    /// Converts an RGB hub color to OKLab.
    pub fn from_rgb(rgb: &Rgb) -> OkLab {
        let lms = apply(&SRGB_TO_LMS, rgb.to_linear());
        let lms_nl = [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()];
        let lab = apply(&LMS_TO_OKLAB, lms_nl);
        OkLab { l: lab[0], a: lab[1], b: lab[2] }
    }

    /// Converts back to the RGB hub. Colors outside the sRGB gamut come back with channels
    /// outside [0, 1]; the serializer clamps them, not this function.
    pub fn to_rgb(&self, alpha: f64) -> Rgb {
        let lms_nl = apply(&OKLAB_TO_LMS, [self.l, self.a, self.b]);
        let lms = [
            lms_nl[0] * lms_nl[0] * lms_nl[0],
            lms_nl[1] * lms_nl[1] * lms_nl[1],
            lms_nl[2] * lms_nl[2] * lms_nl[2],
        ];
        Rgb::from_linear(apply(&LMS_TO_SRGB, lms), alpha)
    }
}

impl From<Coord> for OkLab {
    fn from(c: Coord) -> OkLab {
        OkLab { l: c.x, a: c.y, b: c.z }
    }
}

impl From<OkLab> for Coord {
    fn from(lab: OkLab) -> Coord {
        Coord { x: lab.l, y: lab.a, z: lab.b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        // sRGB red, the worked example everyone checks OKLab implementations against
        let red = OkLab::from_rgb(&Rgb { r: 1.0, g: 0.0, b: 0.0, alpha: 1.0 });
        assert!(approx_eq!(f64, red.l, 0.6279554, epsilon = 1e-5));
        assert!(approx_eq!(f64, red.a, 0.2248631, epsilon = 1e-5));
        assert!(approx_eq!(f64, red.b, 0.1258463, epsilon = 1e-5));

        let white = OkLab::from_rgb(&Rgb { r: 1.0, g: 1.0, b: 1.0, alpha: 1.0 });
        assert!(approx_eq!(f64, white.l, 1.0, epsilon = 1e-5));
        assert!(white.a.abs() < 1e-5);
        assert!(white.b.abs() < 1e-5);
    }

    #[test]
    fn test_round_trip() {
        let original = Rgb { r: 0.7, g: 0.2, b: 0.9, alpha: 1.0 };
        let back = OkLab::from_rgb(&original).to_rgb(1.0);
        // the published inverse matrices are rounded to ten decimals, so the loop is close but
        // not bit-exact
        assert!(approx_eq!(f64, back.r, original.r, epsilon = 1e-6));
        assert!(approx_eq!(f64, back.g, original.g, epsilon = 1e-6));
        assert!(approx_eq!(f64, back.b, original.b, epsilon = 1e-6));
    }
}
