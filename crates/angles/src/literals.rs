use crate::angle::{Degrees, Gradians, Radians};

pub fn deg(x: impl Into<f64>) -> Degrees {
    Degrees::new(x.into())
}

pub fn rad(x: impl Into<f64>) -> Radians {
    Radians::new(x.into())
}

pub fn grad(x: impl Into<f64>) -> Gradians {
    Gradians::new(x.into())
}

/// Suffix-style constructors for `f64`-backed angles, e.g. `42_i32.deg()`.
/// The value is taken as is, without normalization.
///
/// ```
/// use angles::AngleLiterals;
///
/// assert_eq!(42_i32.deg().magnitude(), 42.0);
/// assert_eq!(24.42_f64.rad().magnitude(), 24.42);
/// assert_eq!((-42_i16).grad().magnitude(), -42.0);
/// ```
pub trait AngleLiterals {
    fn deg(self) -> Degrees;
    fn rad(self) -> Radians;
    fn grad(self) -> Gradians;
}

macro_rules! impl_angle_literals_for {
    ($($Type:ty),+) => {
        $(
            impl AngleLiterals for $Type {
                fn deg(self) -> Degrees {
                    deg(self)
                }
                fn rad(self) -> Radians {
                    rad(self)
                }
                fn grad(self) -> Gradians {
                    grad(self)
                }
            }
        )+
    };
}

impl_angle_literals_for!(f32, f64, i8, i16, i32, u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::assert_about_eq;

    #[test]
    fn test_literals() {
        assert_about_eq!(42_i32.deg().magnitude(), 42.0);
        assert_about_eq!(24.42_f64.deg().magnitude(), 24.42);
        assert_about_eq!((-42_i32).deg().magnitude(), -42.0);

        assert_about_eq!(42_u32.rad().magnitude(), 42.0);
        assert_about_eq!(24.42_f64.rad().magnitude(), 24.42);
        assert_about_eq!((-42_i8).rad().magnitude(), -42.0);

        assert_about_eq!(42_u8.grad().magnitude(), 42.0);
        assert_about_eq!(24.42_f32.grad().magnitude(), 24.42, 1e-5);
        assert_about_eq!((-42_i16).grad().magnitude(), -42.0);
    }

    #[test]
    fn test_no_normalization() {
        assert_about_eq!(720_i32.deg().magnitude(), 720.0);
        assert_about_eq!(deg(-1000).magnitude(), -1000.0);
    }

    #[test]
    fn test_factories() {
        assert_eq!(deg(180), Degrees::new(180.0));
        assert_eq!(rad(1.5f32), Radians::new(1.5));
        assert_eq!(grad(200u16), Gradians::new(200.0));
    }
}
