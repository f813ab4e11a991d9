//! This module simply brings the most common Polychrome functionality under a single namespace,
//! to prevent excessive imports: the five public operations, their settings types, the [`Format`]
//! enum, and the error type. The individual color space types in [`spaces`](../spaces/index.html)
//! are deliberately not included; reach for them directly when you need space-level math.

pub use adjust::{adjust, adjust_series, AdjustSettings};
pub use contrast::{contrast, ContrastSettings, Rating};
pub use convert::convert;
pub use error::ColorError;
pub use format::{validate, Format};
pub use mix::{mix, mix_series, MixSettings};
pub use simulate::{simulate, simulate_series, Condition, Deficiency, Method, SimulateSettings};
