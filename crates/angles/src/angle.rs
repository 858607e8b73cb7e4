use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{or_panic, Result};
use crate::magnitude::{narrow, narrow_exact, FloatMagnitude, Magnitude};
use crate::unit::{Degree, Gradian, Radian};

pub type Degrees = Angle<f64, Degree>;
pub type Radians = Angle<f64, Radian>;
pub type Gradians = Angle<f64, Gradian>;

/// A magnitude `T` measured in the unit `U`.
///
/// The unit exists only in the type. Angles of different units (or different
/// storage types) can't be added, subtracted or compared; going from one unit
/// to another always takes an explicit [`angle_cast`](crate::angle_cast).
///
/// ```compile_fail
/// use angles::{deg, rad};
/// let _ = deg(90.0) + rad(1.0);
/// ```
/// ```compile_fail
/// use angles::{deg, grad};
/// let _ = deg(90.0) < grad(100.0);
/// ```
/// ```compile_fail
/// use angles::{Angle, Degree, deg};
/// let _ = Angle::<i32, Degree>::new(90) == deg(90.0);
/// ```
///
/// Scaling by a plain number of any primitive type is allowed. An integer
/// angle scaled by an integer is computed exactly; any float operand sends the
/// computation through `f64`, and the result is converted back to `T`,
/// truncating toward zero for integers:
///
/// ```
/// use angles::{Angle, Degree};
/// let a = Angle::<i32, Degree>::new(42);
/// assert_eq!((a / 5).magnitude(), 8);
/// assert_eq!((a / 5.0).magnitude(), 8);
/// assert_eq!((a * 2.5).magnitude(), 105);
/// ```
///
/// A result an integer can't hold (division by zero, overflow) panics like the
/// integer operation itself would. Use the `try_` forms to get an error instead.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        transparent,
        bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
    )
)]
pub struct Angle<T, U> {
    magnitude: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

impl<T, U> Angle<T, U> {
    pub const fn new(magnitude: T) -> Self {
        Angle {
            magnitude,
            unit: PhantomData,
        }
    }
}

impl<T: Copy, U> Angle<T, U> {
    pub const fn magnitude(&self) -> T {
        self.magnitude
    }
}

impl<T: Magnitude, U> Angle<T, U> {
    pub fn zero() -> Self {
        Self::new(T::zero())
    }

    /// Integer by integer stays exact; anything involving a float goes
    /// through `f64`.
    fn try_combine<D: Magnitude>(
        self,
        number: D,
        exact: fn(i128, i128) -> Option<i128>,
        real: fn(f64, f64) -> f64,
    ) -> Result<Self> {
        let combined = match (self.magnitude.exact_integer(), number.exact_integer()) {
            (Some(lhs), Some(rhs)) => {
                narrow_exact(exact(lhs, rhs), || real(lhs as f64, rhs as f64))
            }
            _ => narrow(real(self.magnitude.to_real(), number.to_real())),
        };
        combined.map(Self::new)
    }

    pub fn try_scale<D: Magnitude>(self, number: D) -> Result<Self> {
        self.try_combine(number, i128::checked_mul, |lhs, rhs| lhs * rhs)
    }

    pub fn try_divide<D: Magnitude>(self, number: D) -> Result<Self> {
        self.try_combine(number, i128::checked_div, |lhs, rhs| lhs / rhs)
    }

    /// Remainder with the sign of the magnitude, like C's `fmod`.
    pub fn try_modulo<D: Magnitude>(self, number: D) -> Result<Self> {
        self.try_combine(number, i128::checked_rem, |lhs, rhs| lhs % rhs)
    }

    pub fn ceil(self) -> Self {
        Self::new(self.magnitude.ceil_that_works_with_integers())
    }

    pub fn floor(self) -> Self {
        Self::new(self.magnitude.floor_that_works_with_integers())
    }

    /// Halfway cases round away from zero.
    pub fn round(self) -> Self {
        Self::new(self.magnitude.round_that_works_with_integers())
    }
}

impl<T: FloatMagnitude, U> Angle<T, U> {
    pub fn is_nan(&self) -> bool {
        self.magnitude.is_nan()
    }
    pub fn is_finite(&self) -> bool {
        self.magnitude.is_finite()
    }
}

pub fn ceil<T: Magnitude, U>(angle: Angle<T, U>) -> Angle<T, U> {
    angle.ceil()
}

pub fn floor<T: Magnitude, U>(angle: Angle<T, U>) -> Angle<T, U> {
    angle.floor()
}

pub fn round<T: Magnitude, U>(angle: Angle<T, U>) -> Angle<T, U> {
    angle.round()
}

impl<T: Copy, U> Clone for Angle<T, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, U> Copy for Angle<T, U> {}

impl<T: Default, U> Default for Angle<T, U> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, U> From<T> for Angle<T, U> {
    fn from(magnitude: T) -> Self {
        Self::new(magnitude)
    }
}

impl<T: fmt::Debug, U> fmt::Debug for Angle<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = std::any::type_name::<U>();
        let unit = unit.rsplit("::").next().unwrap_or(unit);
        f.debug_struct("Angle")
            .field("magnitude", &self.magnitude)
            .field("unit", &format_args!("{unit}"))
            .finish()
    }
}

// The unit is deliberately left out: an angle prints as its magnitude.
impl<T: fmt::Display, U> fmt::Display for Angle<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.magnitude, f)
    }
}

impl<T: PartialEq, U> PartialEq for Angle<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl<T: Eq, U> Eq for Angle<T, U> {}

impl<T: PartialOrd, U> PartialOrd for Angle<T, U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude.partial_cmp(&other.magnitude)
    }
}

impl<T: Ord, U> Ord for Angle<T, U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude.cmp(&other.magnitude)
    }
}

impl<T: Hash, U> Hash for Angle<T, U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.hash(state);
    }
}

impl<T: Magnitude, U> Add for Angle<T, U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.magnitude + rhs.magnitude)
    }
}

impl<T: Magnitude, U> AddAssign for Angle<T, U> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Magnitude, U> Sub for Angle<T, U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.magnitude - rhs.magnitude)
    }
}

impl<T: Magnitude, U> SubAssign for Angle<T, U> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Magnitude + Neg<Output = T>, U> Neg for Angle<T, U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.magnitude)
    }
}

macro_rules! impl_scalar_op {
    ($Trait:ident, $function:ident, $AssignTrait:ident, $assign_function:ident, $checked:ident) => {
        impl<T: Magnitude, U, D: Magnitude> $Trait<D> for Angle<T, U> {
            type Output = Self;

            #[track_caller]
            fn $function(self, number: D) -> Self::Output {
                or_panic(self.$checked(number))
            }
        }

        impl<T: Magnitude, U, D: Magnitude> $AssignTrait<D> for Angle<T, U> {
            #[track_caller]
            fn $assign_function(&mut self, number: D) {
                *self = or_panic(self.$checked(number));
            }
        }
    };
}

impl_scalar_op!(Mul, mul, MulAssign, mul_assign, try_scale);
impl_scalar_op!(Div, div, DivAssign, div_assign, try_divide);
impl_scalar_op!(Rem, rem, RemAssign, rem_assign, try_modulo);

macro_rules! impl_scalar_times_angle {
    ($($Scalar:ty),+) => {
        $(
            impl<T: Magnitude, U> Mul<Angle<T, U>> for $Scalar {
                type Output = Angle<T, U>;

                #[track_caller]
                fn mul(self, angle: Angle<T, U>) -> Self::Output {
                    angle * self
                }
            }
        )+
    };
}

impl_scalar_times_angle!(f32, f64, i32);

impl<T: Magnitude, U> Sum for Angle<T, U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, T: Magnitude, U> Sum<&'a Angle<T, U>> for Angle<T, U> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<T: AbsDiffEq, U> AbsDiffEq for Angle<T, U> {
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.magnitude.abs_diff_eq(&other.magnitude, epsilon)
    }
}

impl<T: RelativeEq, U> RelativeEq for Angle<T, U> {
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.magnitude
            .relative_eq(&other.magnitude, epsilon, max_relative)
    }
}

impl<T: UlpsEq, U> UlpsEq for Angle<T, U> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.magnitude.ulps_eq(&other.magnitude, epsilon, max_ulps)
    }
}
