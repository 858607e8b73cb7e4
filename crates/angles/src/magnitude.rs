use std::fmt::Debug;

use misc_utilities::RoundingThatWorksWithIntegers;
use num::traits::AsPrimitive;
use tracing::debug;

use crate::error::{AngleError, Result};

/// A primitive number an angle can be stored in.
///
/// Mixed-type arithmetic happens in `f64`, so every magnitude widens into it
/// with [`to_real`](Magnitude::to_real). The way back, [`from_real`](Magnitude::from_real),
/// is the only place a value can fail to fit.
pub trait Magnitude:
    Copy + Debug + PartialOrd + num::Num + num::NumCast + AsPrimitive<f64> + RoundingThatWorksWithIntegers
{
    fn to_real(self) -> f64 {
        self.as_()
    }

    /// Floats accept anything, rounding to the nearest value (`f64` to `f32`).
    /// Integers truncate toward zero and reject NaN, infinities and out-of-range values.
    fn from_real(value: f64) -> Option<Self>;

    /// The exact value of an integer magnitude, `None` for floats.
    fn exact_integer(self) -> Option<i128>;

    fn from_exact_integer(value: i128) -> Option<Self>;
}

macro_rules! impl_magnitude_for {
    (float: $($Type:ty),+) => {
        $(
            impl Magnitude for $Type {
                fn from_real(value: f64) -> Option<Self> {
                    Some(value as $Type)
                }
                fn exact_integer(self) -> Option<i128> {
                    None
                }
                fn from_exact_integer(value: i128) -> Option<Self> {
                    Some(value as $Type)
                }
            }
        )+
    };
    (integer: $($Type:ty),+) => {
        $(
            impl Magnitude for $Type {
                fn from_real(value: f64) -> Option<Self> {
                    <$Type as num::NumCast>::from(value)
                }
                fn exact_integer(self) -> Option<i128> {
                    Some(self as i128)
                }
                fn from_exact_integer(value: i128) -> Option<Self> {
                    <$Type>::try_from(value).ok()
                }
            }
        )+
    };
}

impl_magnitude_for!(float: f32, f64);
impl_magnitude_for!(integer: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

misc_utilities::trait_alias!(
    /// Floating point magnitudes, for which NaN and infinities are meaningful.
    pub trait FloatMagnitude = Magnitude + num::Float
);

pub(crate) fn narrow<T: Magnitude>(value: f64) -> Result<T> {
    T::from_real(value).ok_or_else(|| not_representable::<T>(value))
}

/// Narrows an integer result computed without the `f64` pivot. `value` is
/// `None` when the integer operation itself failed; `approximate` then only
/// feeds the error.
pub(crate) fn narrow_exact<T: Magnitude>(
    value: Option<i128>,
    approximate: impl FnOnce() -> f64,
) -> Result<T> {
    value
        .and_then(T::from_exact_integer)
        .ok_or_else(|| not_representable::<T>(approximate()))
}

fn not_representable<T>(value: f64) -> AngleError {
    let storage = std::any::type_name::<T>();
    debug!(value, storage, "value does not fit angle storage");
    AngleError::NotRepresentable { value, storage }
}
