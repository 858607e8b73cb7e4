//! Angles that know their unit.
//!
//! An [`Angle<T, U>`] is a magnitude of type `T` tagged with a unit `U`
//! ([`Degree`], [`Radian`], [`Gradian`], or any type implementing
//! [`AngleUnit`]). The tag costs nothing at runtime and keeps units from
//! being mixed by accident: converting is always an explicit [`angle_cast`].
//!
//! ```
//! use angles::{angle_cast, deg, sin, Degrees, Gradians};
//!
//! let mut heading = deg(45.0) * 10;
//! heading -= deg(90.0);
//! assert_eq!(heading.magnitude(), 360.0);
//! assert_eq!(heading.normalized_abs(), deg(0.0));
//!
//! let right: Gradians = angle_cast(deg(90.0));
//! assert!((right.magnitude() - 100.0).abs() < 1e-12);
//! assert!((sin(right) - 1.0).abs() < 1e-12);
//! ```

mod angle;
pub use angle::{ceil, floor, round, Angle, Degrees, Gradians, Radians};

mod cast;
pub use cast::{angle_cast, try_angle_cast, Angular};

mod error;
pub use error::{AngleError, Result};

mod literals;
pub use literals::{deg, grad, rad, AngleLiterals};

mod magnitude;
pub use magnitude::{FloatMagnitude, Magnitude};

pub mod normalize;

pub mod trig;
pub use trig::{
    acos, asin, atan, atan2, cos, sin, tan, try_acos, try_asin, try_atan, try_atan2,
};

mod unit;
pub use unit::{check_unit, AngleUnit, Degree, Gradian, Radian, PI};
