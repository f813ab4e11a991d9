//! This file provides the constant matrices used for color space conversion, along with a
//! function for computing inverses. Where a definition publishes only a forward matrix (sRGB to
//! XYZ, the Bradford adaptation) the inverse is computed once at startup instead of being typed
//! in from a table: hand-copied inverses are rounded, and rounded inverses let error creep into
//! operations that should be perfect round trips. OKLab is the exception: Ottosson's definition
//! publishes both directions as fixed matrices, and those exact constants are what the test
//! fixtures for adjustment and mixing are pinned against.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

/// CIE ε = (6/29)³, the cube of the linearity threshold in the Lab transfer function.
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;
/// CIE κ = (29/3)³, the slope of the linear segment of the Lab transfer function.
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// Not safe for general use: this exists to invert the constant matrices below at startup, and
/// panics on a singular input because a non-invertible conversion matrix is a typo, not a
/// runtime condition.
pub fn inv(m: &Matrix<f64>) -> Matrix<f64> {
    m.clone().inverse().expect("constant matrix not invertible!")
}

/// Applies a 3×3 matrix to a channel triple.
pub fn apply(m: &Matrix<f64>, v: [f64; 3]) -> [f64; 3] {
    let out: Vector<f64> = m * vector![v[0], v[1], v[2]];
    [out[0], out[1], out[2]]
}

lazy_static! {
    /// Linear sRGB (D65) to CIE XYZ.
    pub static ref SRGB_TO_XYZ: Matrix<f64> = matrix![
        0.4124564, 0.3575761, 0.1804375;
        0.2126729, 0.7151522, 0.0721750;
        0.0193339, 0.1191920, 0.9503041
    ];
    /// CIE XYZ back to linear sRGB, computed from [`SRGB_TO_XYZ`](struct.SRGB_TO_XYZ.html).
    pub static ref XYZ_TO_SRGB: Matrix<f64> = inv(&SRGB_TO_XYZ);

    /// The full Bradford-adapted D65→D50 transform in XYZ, after Lindbloom. CSS Lab is
    /// D50-referenced while sRGB is D65, so every Lab conversion crosses this bridge.
    pub static ref XYZ_D65_TO_D50: Matrix<f64> = matrix![
         1.0478112, 0.0228866, -0.0501270;
         0.0295424, 0.9904844, -0.0170491;
        -0.0092345, 0.0150436,  0.7521316
    ];
    /// D50→D65, computed from [`XYZ_D65_TO_D50`](struct.XYZ_D65_TO_D50.html).
    pub static ref XYZ_D50_TO_D65: Matrix<f64> = inv(&XYZ_D65_TO_D50);

    /// Linear sRGB to the LMS cone basis of OKLab (Ottosson's M1 composed with the sRGB
    /// primaries), applied before the cube-root nonlinearity.
    pub static ref SRGB_TO_LMS: Matrix<f64> = matrix![
        0.4122214708, 0.5363325363, 0.0514459929;
        0.2119034982, 0.6806995451, 0.1073969566;
        0.0883024619, 0.2817188376, 0.6299787005
    ];
    /// Nonlinear LMS to OKLab (Ottosson's M2).
    pub static ref LMS_TO_OKLAB: Matrix<f64> = matrix![
        0.2104542553,  0.7936177850, -0.0040720468;
        1.9779984951, -2.4285922050,  0.4505937099;
        0.0259040371,  0.7827717662, -0.8086757660
    ];
    /// OKLab back to nonlinear LMS, as published in the OKLab definition.
    pub static ref OKLAB_TO_LMS: Matrix<f64> = matrix![
        1.0,  0.3963377774,  0.2158037573;
        1.0, -0.1055613458, -0.0638541728;
        1.0, -0.0894841775, -1.2914855480
    ];
    /// Cubed LMS back to linear sRGB, as published in the OKLab definition.
    pub static ref LMS_TO_SRGB: Matrix<f64> = matrix![
         4.0767416621, -3.3077115913,  0.2309699292;
        -1.2684380046,  2.6097574011, -0.3413193965;
        -0.0041960863, -0.7034186147,  1.7076147010
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computed_inverses_round_trip() {
        let xyz = apply(&SRGB_TO_XYZ, [0.2, 0.5, 0.8]);
        let rgb = apply(&XYZ_TO_SRGB, xyz);
        assert!(approx_eq!(f64, rgb[0], 0.2, epsilon = 1e-12));
        assert!(approx_eq!(f64, rgb[1], 0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, rgb[2], 0.8, epsilon = 1e-12));

        let d50 = apply(&XYZ_D65_TO_D50, [0.3, 0.4, 0.5]);
        let d65 = apply(&XYZ_D50_TO_D65, d50);
        assert!(approx_eq!(f64, d65[1], 0.4, epsilon = 1e-12));
    }

    #[test]
    fn test_published_oklab_pair_is_consistent() {
        // the published inverse is rounded, so the tolerance is looser than machine epsilon
        let lms = apply(&OKLAB_TO_LMS, [0.6, 0.1, -0.1]);
        let lab = apply(&LMS_TO_OKLAB, lms);
        assert!(approx_eq!(f64, lab[0], 0.6, epsilon = 1e-7));
        assert!(approx_eq!(f64, lab[1], 0.1, epsilon = 1e-7));
        assert!(approx_eq!(f64, lab[2], -0.1, epsilon = 1e-7));
    }

    #[test]
    fn test_cie_constants() {
        assert!(approx_eq!(f64, CIE_EPSILON * CIE_KAPPA, 8.0, epsilon = 1e-12));
    }
}
