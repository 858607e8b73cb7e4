use tracing::debug;

use crate::error::{AngleError, Result};

/// The pivot every trig function and radian conversion goes through.
pub const PI: f64 = std::f64::consts::PI;

/// A zero-sized tag naming the unit an [`Angle`](crate::Angle) is measured in.
///
/// The only thing a unit has to say about itself is how big half a turn is.
/// Everything else (conversion, normalization, trig) is derived from that, so a
/// new unit works with all of it without further code:
///
/// ```
/// use angles::{angle_cast, AngleUnit, Angle, Degrees};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct BinaryDegree;
/// impl AngleUnit for BinaryDegree {
///     const SEMICIRCLE: f64 = 128.0;
/// }
///
/// let quarter = Angle::<i32, BinaryDegree>::new(64);
/// let degrees: Degrees = angle_cast(quarter);
/// assert_eq!(degrees.magnitude(), 90.0);
/// ```
pub trait AngleUnit {
    /// Half of one full turn, expressed in this unit. Must be positive.
    const SEMICIRCLE: f64;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Degree;
impl AngleUnit for Degree {
    const SEMICIRCLE: f64 = 180.0;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Radian;
impl AngleUnit for Radian {
    const SEMICIRCLE: f64 = PI;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gradian;
impl AngleUnit for Gradian {
    const SEMICIRCLE: f64 = 200.0;
}

/// Verifies that a unit's semicircle is usable: positive and finite.
pub fn check_unit<U: AngleUnit>() -> Result<()> {
    let semicircle = U::SEMICIRCLE;
    if semicircle.is_finite() && semicircle > 0.0 {
        Ok(())
    } else {
        debug!(semicircle, unit = std::any::type_name::<U>(), "rejected angle unit");
        Err(AngleError::InvalidUnit { semicircle })
    }
}

pub(crate) fn semicircle<U: AngleUnit>() -> f64 {
    debug_assert!(
        U::SEMICIRCLE > 0.0,
        "{} has a non-positive semicircle",
        std::any::type_name::<U>()
    );
    U::SEMICIRCLE
}

pub(crate) fn full_turn<U: AngleUnit>() -> f64 {
    2.0 * semicircle::<U>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::assert_about_eq;

    struct Backwards;
    impl AngleUnit for Backwards {
        const SEMICIRCLE: f64 = -180.0;
    }

    struct Unbounded;
    impl AngleUnit for Unbounded {
        const SEMICIRCLE: f64 = f64::INFINITY;
    }

    #[test]
    fn test_builtin_semicircles() {
        assert_about_eq!(Degree::SEMICIRCLE, 180.0);
        assert_about_eq!(Radian::SEMICIRCLE, PI);
        assert_about_eq!(Gradian::SEMICIRCLE, 200.0);
    }

    #[test]
    fn test_full_turns() {
        assert_about_eq!(full_turn::<Degree>(), 360.0);
        assert_about_eq!(full_turn::<Radian>(), std::f64::consts::TAU);
        assert_about_eq!(full_turn::<Gradian>(), 400.0);
    }

    #[test]
    fn test_check_unit() {
        assert_eq!(check_unit::<Degree>(), Ok(()));
        assert_eq!(check_unit::<Radian>(), Ok(()));
        assert_eq!(
            check_unit::<Backwards>(),
            Err(AngleError::InvalidUnit { semicircle: -180.0 })
        );
        assert_eq!(
            check_unit::<Unbounded>(),
            Err(AngleError::InvalidUnit { semicircle: f64::INFINITY })
        );
    }

    #[test]
    fn test_units_take_no_space() {
        assert_eq!(std::mem::size_of::<Degree>(), 0);
        assert_eq!(std::mem::size_of::<Radian>(), 0);
        assert_eq!(std::mem::size_of::<Gradian>(), 0);
    }
}
