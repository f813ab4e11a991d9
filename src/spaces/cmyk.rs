//! A naive subtractive CMYK model: black is whatever the darkest channel demands, and the three
//! inks cover the rest. This is the `device-cmyk()` of CSS, an uncalibrated approximation with
//! no gamut awareness, nothing like a press profile. It round-trips exactly against RGB, which is
//! the property the conversion graph actually needs from it.

use convert::Rgb;

/// A color as four ink fractions.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    /// The cyan ink fraction.
    pub c: f64,
    /// The magenta ink fraction.
    pub m: f64,
    /// The yellow ink fraction.
    pub y: f64,
    /// The black (key) ink fraction.
    pub k: f64,
}

impl Cmyk {
    /// Separates an RGB hub color into inks: `K = 1 - max(R, G, B)`, with the colored inks
    /// normalized by what black leaves behind. Pure black is all key and no color.
    pub fn from_rgb(rgb: &Rgb) -> Cmyk {
        let k = 1.0 - rgb.r.max(rgb.g).max(rgb.b);
        if k >= 1.0 {
            return Cmyk { c: 0.0, m: 0.0, y: 0.0, k: 1.0 };
        }
        let ink = |channel: f64| (1.0 - channel - k) / (1.0 - k);
        Cmyk {
            c: ink(rgb.r),
            m: ink(rgb.g),
            y: ink(rgb.b),
            k,
        }
    }

    /// Recombines the inks into RGB: each channel is what survives both its ink and the key.
    pub fn to_rgb(&self, alpha: f64) -> Rgb {
        Rgb {
            r: (1.0 - self.c) * (1.0 - self.k),
            g: (1.0 - self.m) * (1.0 - self.k),
            b: (1.0 - self.y) * (1.0 - self.k),
            alpha,
        }
    }
}
