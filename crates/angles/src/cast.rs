use crate::angle::Angle;
use crate::error::{or_panic, Result};
use crate::magnitude::{narrow, Magnitude};
use crate::unit::{semicircle, AngleUnit, PI};

/// Anything that is a magnitude in a known unit. Implemented by [`Angle`], and
/// used to name a complete target type, storage included, in
/// [`angle_cast`] and the inverse trig functions.
pub trait Angular: Copy {
    type Magnitude: Magnitude;
    type Unit: AngleUnit;

    fn from_magnitude(magnitude: Self::Magnitude) -> Self;
    fn magnitude(&self) -> Self::Magnitude;
}

impl<T: Magnitude, U: AngleUnit> Angular for Angle<T, U> {
    type Magnitude = T;
    type Unit = U;

    fn from_magnitude(magnitude: T) -> Self {
        Angle::new(magnitude)
    }
    fn magnitude(&self) -> T {
        Angle::magnitude(self)
    }
}

/// Rescales an angle into another unit (and storage type) by the ratio of the
/// two semicircles. No normalization is done.
///
/// ```
/// use angles::{angle_cast, deg, Gradians, Radians, PI};
///
/// let half_turn = deg(180.0);
/// assert!((angle_cast::<Radians>(half_turn).magnitude() - PI).abs() < 1e-14);
/// assert_eq!(angle_cast::<Gradians>(deg(90.0)).magnitude(), 100.0);
/// ```
#[track_caller]
pub fn angle_cast<To: Angular>(from: impl Angular) -> To {
    or_panic(try_angle_cast(from))
}

/// Like [`angle_cast`], but reports a value the target storage can't hold
/// instead of panicking.
pub fn try_angle_cast<To: Angular>(from: impl Angular) -> Result<To> {
    fn rescale<From: Angular, To: Angular>(from: From) -> Result<To> {
        let ratio = semicircle::<To::Unit>() / semicircle::<From::Unit>();
        narrow(from.magnitude().to_real() * ratio).map(To::from_magnitude)
    }
    rescale(from)
}

/// Builds an angle from a value in the radian pivot.
pub(crate) fn from_radians<To: Angular>(radians: f64) -> Result<To> {
    narrow(semicircle::<To::Unit>() * radians / PI).map(To::from_magnitude)
}

impl<T: Magnitude, U: AngleUnit> Angle<T, U> {
    /// The same angle in unit `V`, keeping the storage type.
    #[track_caller]
    pub fn to_unit<V: AngleUnit>(self) -> Angle<T, V> {
        angle_cast(self)
    }

    pub fn try_to_unit<V: AngleUnit>(self) -> Result<Angle<T, V>> {
        try_angle_cast(self)
    }

    /// The magnitude expressed in radians, as an `f64`.
    pub fn to_radians(self) -> f64 {
        PI * self.magnitude().to_real() / semicircle::<U>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{Degree, Gradian, Radian};
    use crate::{deg, grad, rad, Degrees, Gradians, Radians};
    use ntest::assert_about_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[derive(Debug, Clone, Copy)]
    struct Binary;
    impl AngleUnit for Binary {
        const SEMICIRCLE: f64 = 128.0;
    }

    #[test]
    fn test_from_degrees() {
        let deg_180 = deg(180.0);
        assert_about_eq!(angle_cast::<Radians>(deg_180).magnitude(), PI);
        assert_about_eq!(angle_cast::<Gradians>(deg_180).magnitude(), 200.0);
        assert_about_eq!(angle_cast::<Gradians>(deg(90.0)).magnitude(), 100.0);
    }

    #[test]
    fn test_from_radians() {
        let rad_05 = rad(PI / 2.0);
        assert_about_eq!(angle_cast::<Degrees>(rad_05).magnitude(), 90.0);
        assert_about_eq!(angle_cast::<Gradians>(rad_05).magnitude(), 100.0);
    }

    #[test]
    fn test_from_gradians() {
        let grad_400 = grad(400.0);
        assert_about_eq!(angle_cast::<Radians>(grad_400).magnitude(), 2.0 * PI);
        assert_about_eq!(angle_cast::<Degrees>(grad_400).magnitude(), 360.0);
    }

    #[test]
    fn test_no_normalization() {
        assert_about_eq!(angle_cast::<Degrees>(grad(-1000.0)).magnitude(), -900.0);
    }

    #[test]
    fn test_changing_storage() {
        let whole: Angle<i32, Degree> = angle_cast(rad(PI / 2.0));
        assert_eq!(whole.magnitude(), 90);

        let binary: Angle<u8, Binary> = angle_cast(deg(90.0));
        assert_eq!(binary.magnitude(), 64);

        let narrow: Angle<f32, Gradian> = angle_cast(deg(90.0));
        assert_eq!(narrow.magnitude(), 100.0f32);
    }

    #[test]
    fn test_target_too_small() {
        assert!(try_angle_cast::<Angle<i8, Gradian>>(deg(180.0)).is_err());
        assert!(try_angle_cast::<Angle<u32, Radian>>(deg(-1.0)).is_err());
        assert!(deg(360.0).try_to_unit::<Gradian>().is_ok());
    }

    #[test]
    #[should_panic(expected = "not representable as i8")]
    fn test_target_too_small_panics() {
        let _: Angle<i8, Gradian> = angle_cast(deg(180.0));
    }

    #[test]
    fn test_to_unit_keeps_storage() {
        let quarter = Angle::<i32, Binary>::new(64);
        assert_eq!(quarter.to_unit::<Degree>(), Angle::<i32, Degree>::new(90));
        assert_about_eq!(deg(45.0).to_unit::<Radian>().magnitude(), PI / 4.0);
    }

    #[test]
    fn test_to_radians() {
        assert_about_eq!(deg(180.0).to_radians(), PI);
        assert_about_eq!(grad(100.0).to_radians(), PI / 2.0);
        assert_about_eq!(Angle::<i32, Binary>::new(-128).to_radians(), -PI);
    }

    #[test]
    fn test_from_radians_pivot() {
        let d: Degrees = from_radians(PI / 6.0).unwrap();
        assert_about_eq!(d.magnitude(), 30.0);
        let b: Angle<i32, Binary> = from_radians(PI).unwrap();
        assert_eq!(b.magnitude(), 128);
    }

    #[test]
    fn test_round_trips() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let x: f64 = rng.gen_range(-1.0e5..1.0e5);
            let tolerance = 1e-9 * x.abs().max(1.0);

            let there: Radians = angle_cast(deg(x));
            let back: Degrees = angle_cast(there);
            assert!((back.magnitude() - x).abs() < tolerance);

            let there: Angle<f64, Binary> = angle_cast(grad(x));
            let back: Gradians = angle_cast(there);
            assert!((back.magnitude() - x).abs() < tolerance);

            let there: Gradians = angle_cast(rad(x));
            let back: Radians = angle_cast(there);
            assert!((back.magnitude() - x).abs() < tolerance);
        }
    }
}
