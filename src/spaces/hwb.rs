//! The HWB space: a repackaging of the same cylinder as HSL into the painter's vocabulary of a
//! pure hue mixed with white and with black. Whiteness is the smallest RGB component and
//! blackness the complement of the largest, so the two sum past 1 only for grays, which is why
//! the reverse direction has an achromatic fast path.

use convert::Rgb;
use coord::Coord;
use spaces::Hsl;

/// A color as hue plus whiteness plus blackness. Hue is in degrees; the other two are fractions.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hwb {
    /// The hue angle in degrees, shared with HSL.
    pub h: f64,
    /// The fraction of white mixed in.
    pub w: f64,
    /// The fraction of black mixed in.
    pub b: f64,
}

impl Hwb {
    /// Reads the white and black mix fractions straight off the RGB components.
    pub fn from_rgb(rgb: &Rgb) -> Hwb {
        let max_c = rgb.r.max(rgb.g).max(rgb.b);
        let min_c = rgb.r.min(rgb.g).min(rgb.b);
        Hwb {
            h: Hsl::from_rgb(rgb).h,
            w: min_c,
            b: 1.0 - max_c,
        }
    }

    /// Rebuilds the RGB hub color. When whiteness and blackness sum to 1 or more the hue carries
    /// no information and the result is the gray `w / (w + b)`; otherwise the pure hue at full
    /// saturation and half lightness is scaled into the remaining range and offset by white.
    pub fn to_rgb(&self, alpha: f64) -> Rgb {
        let sum = self.w + self.b;
        if sum >= 1.0 {
            let gray = self.w / sum;
            return Rgb { r: gray, g: gray, b: gray, alpha };
        }
        let pure = Hsl { h: self.h, s: 1.0, l: 0.5 }.to_rgb(alpha);
        let scale = 1.0 - self.w - self.b;
        Rgb {
            r: pure.r * scale + self.w,
            g: pure.g * scale + self.w,
            b: pure.b * scale + self.w,
            alpha,
        }
    }
}

impl From<Coord> for Hwb {
    fn from(c: Coord) -> Hwb {
        Hwb { h: c.x, w: c.y, b: c.z }
    }
}

impl From<Hwb> for Coord {
    fn from(hwb: Hwb) -> Coord {
        Coord { x: hwb.h, y: hwb.w, z: hwb.b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achromatic_fast_path() {
        let gray = Hwb { h: 200.0, w: 0.6, b: 0.6 }.to_rgb(1.0);
        assert!(approx_eq!(f64, gray.r, 0.5, epsilon = 1e-9));
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn test_pure_hue_passes_through() {
        let lime = Hwb { h: 120.0, w: 0.0, b: 0.0 }.to_rgb(1.0);
        assert!(approx_eq!(f64, lime.g, 1.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, lime.r, 0.0, epsilon = 1e-9));
    }

    #[test]
    fn test_round_trip() {
        let original = Rgb { r: 0.8, g: 0.3, b: 0.1, alpha: 1.0 };
        let back = Hwb::from_rgb(&original).to_rgb(1.0);
        assert!(approx_eq!(f64, back.r, original.r, epsilon = 1e-9));
        assert!(approx_eq!(f64, back.g, original.g, epsilon = 1e-9));
        assert!(approx_eq!(f64, back.b, original.b, epsilon = 1e-9));
    }
}
