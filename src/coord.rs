//! This module contains a struct, [`Coord`](struct.Coord.html), that models a triple of color
//! channels as a point in 3D space and supports the small amount of arithmetic the engines need:
//! componentwise addition and subtraction, scaling, and linear interpolation. Every 3-channel
//! color space in this library converts to and from `Coord`, which lets perceptual blending be
//! written once instead of once per space.

use num;
use num::{Num, NumCast};
use std::ops::{Add, Div, Mul, Sub};

/// Represents a scalar value that can be easily converted, described using the common numeric
/// traits in [`num`]. Anything that falls under this category can scale a [`Coord`]. This has no
/// added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// Three color channels viewed as a point in space. The axes carry no meaning of their own: each
/// color space maps its own channels onto `x`, `y`, and `z` in the order of its name, so an OKLab
/// value puts `l` on the x-axis, `a` on the y-axis, and `b` on the z-axis.
///
/// # Example
/// ```
/// # use polychrome::coord::Coord;
/// let a = Coord { x: 0.2, y: 0.0, z: 1.0 };
/// let b = Coord { x: 0.6, y: 1.0, z: 0.0 };
/// let quarter = a.interpolate(&b, 0.25);
/// assert!((quarter.x - 0.3).abs() <= 1e-10);
/// assert!((quarter.y - 0.25).abs() <= 1e-10);
/// assert!((quarter.z - 0.75).abs() <= 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

// Componentwise addition and subtraction, and scalar multiplication and division. There is no
// Coord-by-Coord multiplication: none of the color math here needs a product of two points, and
// there's no single obvious meaning for one.
impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap();
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        if rhs.is_zero() {
            panic!("Division by 0!");
        } else {
            let r: f64 = num::cast(rhs).unwrap();
            Coord {
                x: self.x / r,
                y: self.y / r,
                z: self.z / r,
            }
        }
    }
}

impl Coord {
    /// The point a fraction `t` of the way from `self` to `other`: `t = 0` is `self`, `t = 1` is
    /// `other`, and values outside that range extrapolate along the same line.
    pub fn interpolate(&self, other: &Coord, t: f64) -> Coord {
        *self + (*other - *self) * t
    }

    /// The midpoint between two points: [`interpolate`](Coord::interpolate) at one half.
    pub fn midpoint(&self, other: &Coord) -> Coord {
        self.interpolate(other, 0.5)
    }
}
