//! Polychrome is a library for working with colors the way stylesheets talk about them: as short
//! pieces of text. The underlying philosophy is that the string is the interface. Most color
//! libraries make you pick a representation up front and marshal everything into it; real-world
//! color work starts from `"rebeccapurple"` or `"oklch(0.6 0.1 275)"` pasted out of a design file,
//! and wants another string back. Polychrome parses nine CSS-style color formats, converts freely
//! between them through a common RGB hub, and layers perceptually-aware operations on top:
//! lightness/chroma/hue adjustment and mixing in OKLab (where equal numeric steps actually look
//! like equal steps), WCAG and colorimetric contrast filtering, and color-vision-deficiency
//! simulation using the Brettel and Viénot algorithms. Everything is a pure function from text to
//! text: no state, no I/O, and out-of-range values are corrected rather than rejected, because a
//! generative tool that errors on chroma 0.51 is a tool nobody uses twice.

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate num;
extern crate regex;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod adjust;
pub mod bound;
mod consts;
pub mod contrast;
pub mod convert;
pub mod coord;
pub mod error;
mod extract;
pub mod format;
pub mod illuminants;
pub mod mix;
mod named;
mod numeric;
pub mod parse;
pub mod prelude;
pub mod serialize;
pub mod simulate;
pub mod spaces;

pub use adjust::{adjust, adjust_series, AdjustSettings};
pub use contrast::{contrast, ContrastSettings, Rating};
pub use convert::convert;
pub use error::ColorError;
pub use format::Format;
pub use mix::{mix, mix_series, MixSettings};
pub use simulate::{simulate, simulate_series, Condition, Deficiency, Method, SimulateSettings};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_round_trip() {
        assert_eq!(convert("red", Format::Hex).unwrap(), "#ff0000");
        assert_eq!(convert("#ff0000", Format::Named).unwrap(), "red");
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert!(convert("not-a-color", Format::Hex).is_err());
    }
}
