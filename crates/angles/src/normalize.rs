//! Reducing a magnitude into one of the two canonical ranges of a unit.
//!
//! | Range | Kernel | Methods |
//! |-------|--------|---------|
//! | `(-semicircle, +semicircle]` | [`symmetric`] | [`Angle::normalize`], [`Angle::normalized`] |
//! | `[0, 2 * semicircle)` | [`non_negative`] | [`Angle::normalize_abs`], [`Angle::normalized_abs`] |
//!
//! The symmetric range is closed at `+semicircle`: half a turn stays where it
//! is, and anything landing on `-semicircle` is moved up to `+semicircle`.

use crate::angle::Angle;
use crate::error::{or_panic, Result};
use crate::magnitude::{narrow, Magnitude};
use crate::unit::{full_turn, semicircle, AngleUnit};

/// Wraps `magnitude` into `(-semicircle, +semicircle]`.
pub fn symmetric(magnitude: f64, semicircle: f64) -> f64 {
    let full_turn = 2.0 * semicircle;
    let mut wrapped = magnitude % full_turn;
    if wrapped > semicircle {
        wrapped -= full_turn;
    }
    if wrapped <= -semicircle {
        wrapped += full_turn;
    }
    wrapped
}

/// Wraps `magnitude` into `[0, 2 * semicircle)`.
pub fn non_negative(magnitude: f64, semicircle: f64) -> f64 {
    let full_turn = 2.0 * semicircle;
    let mut wrapped = magnitude % full_turn;
    if wrapped < 0.0 {
        wrapped += full_turn;
    }
    // a tiny negative remainder plus a full turn can round up to the full turn
    if wrapped >= full_turn {
        wrapped = 0.0;
    }
    wrapped
}

impl<T: Magnitude, U: AngleUnit> Angle<T, U> {
    pub fn try_normalized(self) -> Result<Self> {
        let wrapped: T = narrow(symmetric(self.magnitude().to_real(), semicircle::<U>()))?;
        // narrowing to a coarser float can land on the excluded lower bound
        if wrapped.to_real() <= -semicircle::<U>() {
            return narrow(semicircle::<U>()).map(Self::new);
        }
        Ok(Self::new(wrapped))
    }

    /// A copy wrapped into `(-semicircle, +semicircle]`.
    ///
    /// Panics if the storage type can't hold the result (an unsigned angle
    /// past half a turn, say). See [`try_normalized`](Self::try_normalized).
    #[track_caller]
    pub fn normalized(self) -> Self {
        or_panic(self.try_normalized())
    }

    #[track_caller]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    pub fn try_normalized_abs(self) -> Result<Self> {
        let wrapped: T = narrow(non_negative(self.magnitude().to_real(), semicircle::<U>()))?;
        // same for the full turn
        if wrapped.to_real() >= full_turn::<U>() {
            return Ok(Self::zero());
        }
        Ok(Self::new(wrapped))
    }

    /// A copy wrapped into `[0, 2 * semicircle)`.
    #[track_caller]
    pub fn normalized_abs(self) -> Self {
        or_panic(self.try_normalized_abs())
    }

    #[track_caller]
    pub fn normalize_abs(&mut self) {
        *self = self.normalized_abs();
    }
}
