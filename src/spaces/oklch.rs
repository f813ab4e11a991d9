//! The cylindrical reading of OKLab, and the space where the adjustment engine does its work:
//! lightness, chroma, and hue are the axes a person actually means when they ask for "a bit
//! lighter" or "less intense". Like CIELCH this is a thin polar adapter over its Cartesian
//! parent. Hue is degrees at every boundary of this module; radians exist only inside the
//! `to_radians`/`atan2` step below.

use convert::Rgb;
use coord::Coord;
use numeric::canonical_hue;
use spaces::OkLab;

/// A color in the OKLCH space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    /// The perceived lightness as a fraction.
    pub l: f64,
    /// The chroma: 0 is gray, and about 0.5 covers everything a screen can show.
    pub c: f64,
    /// The hue angle in degrees.
    pub h: f64,
}

impl OkLch {
    /// Wraps an OKLab color in polar form.
    pub fn from_oklab(lab: &OkLab) -> OkLch {
        OkLch {
            l: lab.l,
            c: lab.b.hypot(lab.a),
            h: canonical_hue(lab.b.atan2(lab.a).to_degrees()),
        }
    }

    /// Unwraps back to Cartesian OKLab.
    pub fn to_oklab(&self) -> OkLab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        OkLab {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
    }

    /// Converts from the RGB hub by way of OKLab.
    pub fn from_rgb(rgb: &Rgb) -> OkLch {
        OkLch::from_oklab(&OkLab::from_rgb(rgb))
    }

    /// Converts to the RGB hub by way of OKLab.
    pub fn to_rgb(&self, alpha: f64) -> Rgb {
        self.to_oklab().to_rgb(alpha)
    }
}

impl From<Coord> for OkLch {
    fn from(c: Coord) -> OkLch {
        OkLch { l: c.x, c: c.y, h: c.z }
    }
}

impl From<OkLch> for Coord {
    fn from(lch: OkLch) -> Coord {
        Coord { x: lch.l, y: lch.c, z: lch.h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_hue_angle() {
        let red = OkLch::from_rgb(&Rgb { r: 1.0, g: 0.0, b: 0.0, alpha: 1.0 });
        assert!(approx_eq!(f64, red.h, 29.234, epsilon = 0.01));
        assert!(approx_eq!(f64, red.c, 0.2576833, epsilon = 1e-4));
    }

    #[test]
    fn test_polar_round_trip() {
        let lch = OkLch { l: 0.7, c: 0.12, h: 200.0 };
        let back = OkLch::from_oklab(&lch.to_oklab());
        assert!(approx_eq!(f64, back.l, lch.l, epsilon = 1e-12));
        assert!(approx_eq!(f64, back.c, lch.c, epsilon = 1e-12));
        assert!(approx_eq!(f64, back.h, lch.h, epsilon = 1e-9));
    }
}
