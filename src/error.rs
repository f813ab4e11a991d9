//! This module defines the single error type that the library surfaces at its boundary. The rule
//! is simple: a string either parses as one of the supported color formats or it doesn't. Numeric
//! problems past that point (out-of-range channels, out-of-gamut results from mixing) are corrected
//! by clamping instead of reported, so the only thing that can go wrong from a caller's point of
//! view is handing over text that isn't a color at all.

use std::error::Error;
use std::fmt;

/// One canonical example string per supported format, in the same order the grammar tries them.
/// These are carried along with parse failures so that error messages can show a caller what valid
/// input looks like instead of just saying "no".
pub static FORMAT_EXAMPLES: &[&str] = &[
    "aliceblue",
    "#4682b4",
    "rgb(70, 130, 180)",
    "hsl(207, 44%, 49%)",
    "device-cmyk(61% 28% 0% 29%)",
    "hwb(207 27% 29%)",
    "lab(54.2 -3.9 -30.1)",
    "lch(54.2 30.4 262.6)",
    "oklab(0.6 -0.02 -0.09)",
    "oklch(0.6 0.09 257)",
];

/// An error in interpreting a color string. There is deliberately only one kind: every numeric
/// irregularity downstream of recognition is silently clamped into range, so recognition is the
/// single point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ColorError {
    /// The given text did not match any of the nine supported color grammars, or named an unknown
    /// target format. Carries the offending input verbatim.
    InvalidColorFormat {
        /// The text that failed to parse, exactly as the caller supplied it.
        input: String,
    },
}

impl ColorError {
    /// Wraps the offending text in an [`InvalidColorFormat`](ColorError::InvalidColorFormat).
    pub fn invalid(input: &str) -> ColorError {
        ColorError::InvalidColorFormat {
            input: input.to_string(),
        }
    }

    /// The example strings for every supported format, for diagnostics.
    pub fn examples(&self) -> &'static [&'static str] {
        FORMAT_EXAMPLES
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::InvalidColorFormat { ref input } => write!(
                f,
                "'{}' is not a recognized color; supported formats look like: {}",
                input,
                FORMAT_EXAMPLES.join(", ")
            ),
        }
    }
}

impl Error for ColorError {}
