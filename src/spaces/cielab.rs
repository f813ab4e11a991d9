//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/CIELAB_color_space): a device-independent space with a
//! luminance axis and two opponent color axes, designed so that equal distances are roughly equal
//! perceived differences. Following CSS (and Photoshop, and the ICC), this is explicitly CIELAB
//! under the D50 illuminant: the path from the hub runs linear sRGB → CIE XYZ under D65 → a
//! Bradford chromatic adaptation to D50 → the Lab nonlinear transfer. The transfer function uses
//! the exact rational constants ε = 216/24389 and κ = 24389/27 rather than their truncated
//! decimal forms, which keeps the two branches meeting exactly at the knee.

use consts::{apply, CIE_EPSILON, CIE_KAPPA, SRGB_TO_XYZ, XYZ_D50_TO_D65, XYZ_D65_TO_D50,
             XYZ_TO_SRGB};
use convert::Rgb;
use coord::Coord;
use illuminants::Illuminant;

/// A color in the CIELAB space, D50-referenced.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CieLab {
    /// The luminance: 0 is black, 100 is diffuse white.
    pub l: f64,
    /// The first opponent axis, green (negative) to magenta-red (positive), conventionally within
    /// about ±127 although imaginary colors beyond that are representable.
    pub a: f64,
    /// The second opponent axis, blue (negative) to yellow (positive), same conventional range.
    pub b: f64,
}

impl CieLab {
    /// Converts an RGB hub color to CIELAB by way of XYZ and the D65→D50 adaptation.
    pub fn from_rgb(rgb: &Rgb) -> CieLab {
        let xyz_d65 = apply(&SRGB_TO_XYZ, rgb.to_linear());
        let xyz = apply(&XYZ_D65_TO_D50, xyz_d65);
        let white = Illuminant::D50.white_point();

        let f = |t: f64| {
            if t > CIE_EPSILON {
                t.cbrt()
            } else {
                (CIE_KAPPA * t + 16.0) / 116.0
            }
        };
        let fx = f(xyz[0] / white[0]);
        let fy = f(xyz[1] / white[1]);
        let fz = f(xyz[2] / white[2]);

        CieLab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Converts back to the RGB hub, undoing the transfer, the white point scaling, and the
    /// chromatic adaptation in reverse order.
    pub fn to_rgb(&self, alpha: f64) -> Rgb {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let x = if fx.powi(3) > CIE_EPSILON {
            fx.powi(3)
        } else {
            (116.0 * fx - 16.0) / CIE_KAPPA
        };
        let y = if self.l > CIE_KAPPA * CIE_EPSILON {
            fy.powi(3)
        } else {
            self.l / CIE_KAPPA
        };
        let z = if fz.powi(3) > CIE_EPSILON {
            fz.powi(3)
        } else {
            (116.0 * fz - 16.0) / CIE_KAPPA
        };

        let white = Illuminant::D50.white_point();
        let xyz_d65 = apply(
            &XYZ_D50_TO_D65,
            [x * white[0], y * white[1], z * white[2]],
        );
        Rgb::from_linear(apply(&XYZ_TO_SRGB, xyz_d65), alpha)
    }
}

impl From<Coord> for CieLab {
    fn from(c: Coord) -> CieLab {
        CieLab { l: c.x, a: c.y, b: c.z }
    }
}

impl From<CieLab> for Coord {
    fn from(lab: CieLab) -> Coord {
        Coord { x: lab.l, y: lab.a, z: lab.b }
    }
}
