//! This module contains the per-space transforms that hang off the RGB hub. Each space is a small
//! struct with public channel fields and a pair of methods, `from_rgb` and `to_rgb`, that carry
//! it to and from the hub; the two polar spaces (CIELCH, OKLCH) are thin adapters over their
//! Cartesian parents rather than independent transforms, so the conversion graph has exactly
//! seven true leaves. For convenience, each main type is imported into this module's namespace
//! directly.

pub mod cielab;
pub mod cielch;
pub mod cmyk;
pub mod hsl;
pub mod hwb;
pub mod oklab;
pub mod oklch;

pub use self::cielab::CieLab;
pub use self::cielch::CieLch;
pub use self::cmyk::Cmyk;
pub use self::hsl::Hsl;
pub use self::hwb::Hwb;
pub use self::oklab::OkLab;
pub use self::oklch::OkLch;
