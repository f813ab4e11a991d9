//! The HSL space: a direct cylindrical reshaping of sRGB, with all of sRGB's perceptual
//! problems and none of its own. Lightness here is the average of the largest and smallest RGB
//! components, which makes saturation wildly unlike perceived colorfulness near white. But HSL
//! is what stylesheets speak, so it earns its place in the graph. The projection is hexagonal,
//! not polar: hue is computed per sector by which of R, G, B dominates, and a gray (zero chroma)
//! takes hue 0 by convention since any hue would do.

use convert::Rgb;
use coord::Coord;
use numeric::canonical_hue;

/// A color in the HSL space. Hue is in degrees; saturation and lightness are fractions.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// The hue angle in degrees, `[0, 360)`.
    pub h: f64,
    /// The saturation fraction: chroma relative to the most vivid color possible at this
    /// lightness.
    pub s: f64,
    /// The lightness fraction: 0 is black, 1 is white, the most saturated colors sit at 0.5.
    pub l: f64,
}

impl Hsl {
    /// Projects an RGB hub color onto the HSL cylinder.
    pub fn from_rgb(rgb: &Rgb) -> Hsl {
        let components = [rgb.r, rgb.g, rgb.b];
        let max_c = components.iter().cloned().fold(::std::f64::NEG_INFINITY, f64::max);
        let min_c = components.iter().cloned().fold(::std::f64::INFINITY, f64::min);
        let chroma = max_c - min_c;

        // hue by hexagonal sector: whichever component dominates picks the 120° wedge, and the
        // difference of the other two positions the color within it
        let hue = if chroma == 0.0 {
            0.0
        } else if max_c == rgb.r {
            ((rgb.g - rgb.b) / chroma).rem_euclid(6.0) * 60.0
        } else if max_c == rgb.g {
            ((rgb.b - rgb.r) / chroma) * 60.0 + 120.0
        } else {
            ((rgb.r - rgb.g) / chroma) * 60.0 + 240.0
        };

        let lightness = (max_c + min_c) / 2.0;
        let saturation = if lightness <= 0.0 || lightness >= 1.0 {
            // avoids dividing by zero at the cone tips, where saturation is meaningless anyway
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Hsl {
            h: canonical_hue(hue),
            s: saturation,
            l: lightness,
        }
    }

    /// Rebuilds the RGB hub color, attaching the given alpha.
    pub fn to_rgb(&self, alpha: f64) -> Rgb {
        let h = canonical_hue(self.h);
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        // the second-largest component, from the sawtooth across each 60° half-sector
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h < 60.0 {
            (chroma, x, 0.0)
        } else if h < 120.0 {
            (x, chroma, 0.0)
        } else if h < 180.0 {
            (0.0, chroma, x)
        } else if h < 240.0 {
            (0.0, x, chroma)
        } else if h < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = self.l - chroma / 2.0;
        Rgb {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
            alpha,
        }
    }
}

impl From<Coord> for Hsl {
    fn from(c: Coord) -> Hsl {
        Hsl { h: c.x, s: c.y, l: c.z }
    }
}

impl From<Hsl> for Coord {
    fn from(hsl: Hsl) -> Coord {
        Coord { x: hsl.h, y: hsl.s, z: hsl.l }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        let red = Hsl::from_rgb(&Rgb { r: 1.0, g: 0.0, b: 0.0, alpha: 1.0 });
        assert!(approx_eq!(f64, red.h, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, red.s, 1.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, red.l, 0.5, epsilon = 1e-9));

        let blue = Hsl::from_rgb(&Rgb { r: 0.0, g: 0.0, b: 1.0, alpha: 1.0 });
        assert!(approx_eq!(f64, blue.h, 240.0, epsilon = 1e-9));
    }

    #[test]
    fn test_negative_sector_wraps() {
        // a red-dominant color leaning blue lands in the magenta range, not at a negative hue
        let rose = Hsl::from_rgb(&Rgb { r: 1.0, g: 0.0, b: 0.5, alpha: 1.0 });
        assert!(approx_eq!(f64, rose.h, 330.0, epsilon = 1e-9));
    }

    #[test]
    fn test_gray_has_zero_chroma() {
        let gray = Hsl::from_rgb(&Rgb { r: 0.5, g: 0.5, b: 0.5, alpha: 1.0 });
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!(approx_eq!(f64, gray.l, 0.5, epsilon = 1e-9));
    }

    #[test]
    fn test_round_trip() {
        let original = Rgb { r: 70.0 / 255.0, g: 130.0 / 255.0, b: 180.0 / 255.0, alpha: 1.0 };
        let back = Hsl::from_rgb(&original).to_rgb(1.0);
        assert!(approx_eq!(f64, back.r, original.r, epsilon = 1e-9));
        assert!(approx_eq!(f64, back.g, original.g, epsilon = 1e-9));
        assert!(approx_eq!(f64, back.b, original.b, epsilon = 1e-9));
    }
}
