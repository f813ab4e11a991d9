//! This file implements the CIELCH space, the cylindrical reading of CIELAB that swaps the two
//! opponent axes for chroma and hue. It is deliberately *not* an independent transform: every
//! conversion delegates to [`CieLab`] and only the scalar-to-polar step lives here, so the two
//! spaces can never drift apart.

use convert::Rgb;
use coord::Coord;
use numeric::canonical_hue;
use spaces::CieLab;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CieLch {
    /// The luminance component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma: distance from the gray of equal luminance, the cylinder's radius. Around 0 to
    /// 150 for physically plausible colors, smaller for most.
    pub c: f64,
    /// The hue angle in degrees.
    pub h: f64,
}

impl CieLch {
    /// Wraps a CIELAB color in polar form.
    pub fn from_lab(lab: &CieLab) -> CieLch {
        CieLch {
            l: lab.l,
            c: lab.b.hypot(lab.a),
            h: canonical_hue(lab.b.atan2(lab.a).to_degrees()),
        }
    }

    /// Unwraps back to Cartesian CIELAB.
    pub fn to_lab(&self) -> CieLab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        CieLab {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
    }

    /// Converts from the RGB hub by way of CIELAB.
    pub fn from_rgb(rgb: &Rgb) -> CieLch {
        CieLch::from_lab(&CieLab::from_rgb(rgb))
    }

    /// Converts to the RGB hub by way of CIELAB.
    pub fn to_rgb(&self, alpha: f64) -> Rgb {
        self.to_lab().to_rgb(alpha)
    }
}

impl From<Coord> for CieLch {
    fn from(c: Coord) -> CieLch {
        CieLch { l: c.x, c: c.y, h: c.z }
    }
}

impl From<CieLch> for Coord {
    fn from(lch: CieLch) -> Coord {
        Coord { x: lch.l, y: lch.c, z: lch.h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_identities() {
        let lab = CieLab { l: 50.0, a: 30.0, b: -40.0 };
        let lch = CieLch::from_lab(&lab);
        assert!(approx_eq!(f64, lch.c, 50.0, epsilon = 1e-9));
        let back = lch.to_lab();
        assert!(approx_eq!(f64, back.a, lab.a, epsilon = 1e-9));
        assert!(approx_eq!(f64, back.b, lab.b, epsilon = 1e-9));
    }

    #[test]
    fn test_hue_lands_canonical() {
        // negative b puts atan2 in the lower half-plane; the wrapped hue must still be positive
        let lch = CieLch::from_lab(&CieLab { l: 50.0, a: 0.0, b: -10.0 });
        assert!(approx_eq!(f64, lch.h, 270.0, epsilon = 1e-9));
    }

    #[test]
    fn test_gray_has_zero_chroma() {
        let gray = CieLch::from_rgb(&Rgb { r: 0.5, g: 0.5, b: 0.5, alpha: 1.0 });
        assert!(gray.c < 0.05);
    }
}
