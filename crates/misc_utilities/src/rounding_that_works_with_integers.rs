// TODO: better name
/// `ceil`, `floor` and `round` for every primitive number.
/// Integers are already whole, so for them all three are the identity.
pub trait RoundingThatWorksWithIntegers: Copy {
    fn ceil_that_works_with_integers(self) -> Self;
    fn floor_that_works_with_integers(self) -> Self;
    /// Halfway cases round away from zero.
    fn round_that_works_with_integers(self) -> Self;
}

macro_rules! impl_rounding_that_works_with_integers_for {
    (float: $($Type:ty),+) => {
        $(
            impl RoundingThatWorksWithIntegers for $Type {
                fn ceil_that_works_with_integers(self) -> Self {
                    self.ceil()
                }
                fn floor_that_works_with_integers(self) -> Self {
                    self.floor()
                }
                fn round_that_works_with_integers(self) -> Self {
                    self.round()
                }
            }
        )+
    };
    (integer: $($Type:ty),+) => {
        $(
            impl RoundingThatWorksWithIntegers for $Type {
                fn ceil_that_works_with_integers(self) -> Self {
                    self
                }
                fn floor_that_works_with_integers(self) -> Self {
                    self
                }
                fn round_that_works_with_integers(self) -> Self {
                    self
                }
            }
        )+
    };
}

impl_rounding_that_works_with_integers_for!(float: f32, f64);
impl_rounding_that_works_with_integers_for!(integer: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_f64() {
        assert_eq!(24.42f64.ceil_that_works_with_integers(), 25.0);
        assert_eq!(24.42f64.floor_that_works_with_integers(), 24.0);
        assert_eq!(24.42f64.round_that_works_with_integers(), 24.0);
        assert_eq!(24.84f64.round_that_works_with_integers(), 25.0);
        assert_eq!((-24.42f64).floor_that_works_with_integers(), -25.0);
    }
    #[test]
    fn test_f32_halfway_rounds_away_from_zero() {
        assert_eq!(2.5f32.round_that_works_with_integers(), 3.0);
        assert_eq!((-2.5f32).round_that_works_with_integers(), -3.0);
    }
    #[test]
    fn test_i32() {
        assert_eq!(42i32.ceil_that_works_with_integers(), 42);
        assert_eq!((-42i32).floor_that_works_with_integers(), -42);
        assert_eq!(7i32.round_that_works_with_integers(), 7);
    }
    #[test]
    fn test_u8() {
        assert_eq!(255u8.ceil_that_works_with_integers(), 255);
        assert_eq!(0u8.round_that_works_with_integers(), 0);
    }
}
