//! Trigonometry for angles in any unit.
//!
//! Every function goes through radians, so a unit only needs its semicircle to
//! take part. The forward functions take an angle and return a plain `f64`. The
//! inverse functions take plain numbers and return whatever angle type the
//! caller asks for:
//!
//! ```
//! use angles::{asin, atan2, sin, Angle, Degree, Degrees, Radians};
//!
//! let degrees = asin::<Degrees>(0.5);
//! assert!((degrees.magnitude() - 30.0).abs() < 1e-12);
//!
//! let radians: Radians = asin(0.5);
//! assert!((sin(radians) - 0.5).abs() < 1e-12);
//!
//! let whole: Angle<i32, Degree> = atan2(1, 1);
//! assert_eq!(whole.magnitude(), 45);
//! ```
//!
//! There is no default target: when inference can't pick one, spell out
//! `Radians`. Arguments outside the domain of `asin`/`acos` give NaN, which an
//! integer target can't hold; the `try_` forms report that as an error.

use crate::angle::Angle;
use crate::cast::{from_radians, Angular};
use crate::error::{or_panic, Result};
use crate::magnitude::Magnitude;
use crate::unit::AngleUnit;

pub fn sin<T: Magnitude, U: AngleUnit>(x: Angle<T, U>) -> f64 {
    x.to_radians().sin()
}

pub fn cos<T: Magnitude, U: AngleUnit>(x: Angle<T, U>) -> f64 {
    x.to_radians().cos()
}

pub fn tan<T: Magnitude, U: AngleUnit>(x: Angle<T, U>) -> f64 {
    x.to_radians().tan()
}

pub fn try_asin<To: Angular>(x: impl Into<f64>) -> Result<To> {
    from_radians(x.into().asin())
}

pub fn try_acos<To: Angular>(x: impl Into<f64>) -> Result<To> {
    from_radians(x.into().acos())
}

pub fn try_atan<To: Angular>(x: impl Into<f64>) -> Result<To> {
    from_radians(x.into().atan())
}

/// The angle of the point `(x, y)`, using both signs to pick the quadrant.
pub fn try_atan2<To: Angular>(y: impl Into<f64>, x: impl Into<f64>) -> Result<To> {
    from_radians(y.into().atan2(x.into()))
}

#[track_caller]
pub fn asin<To: Angular>(x: impl Into<f64>) -> To {
    or_panic(try_asin(x))
}

#[track_caller]
pub fn acos<To: Angular>(x: impl Into<f64>) -> To {
    or_panic(try_acos(x))
}

#[track_caller]
pub fn atan<To: Angular>(x: impl Into<f64>) -> To {
    or_panic(try_atan(x))
}

#[track_caller]
pub fn atan2<To: Angular>(y: impl Into<f64>, x: impl Into<f64>) -> To {
    or_panic(try_atan2(y, x))
}

impl<T: Magnitude, U: AngleUnit> Angle<T, U> {
    pub fn sin(self) -> f64 {
        sin(self)
    }
    pub fn cos(self) -> f64 {
        cos(self)
    }
    pub fn tan(self) -> f64 {
        tan(self)
    }
    /// `[cos, sin]`, the point on the unit circle at this angle.
    pub fn xy(self) -> [f64; 2] {
        [self.cos(), self.sin()]
    }
}
