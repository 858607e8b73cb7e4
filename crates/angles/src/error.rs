use thiserror::Error;

pub type Result<T> = std::result::Result<T, AngleError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AngleError {
    /// A value computed in `f64` does not fit the storage type of the angle it was meant for
    #[error("{value} is not representable as {storage}")]
    NotRepresentable { value: f64, storage: &'static str },

    /// A unit whose semicircle is zero, negative, or not finite
    #[error("semicircle must be a positive finite number, got {semicircle}")]
    InvalidUnit { semicircle: f64 },
}

/// Unwraps the result of a checked operation, panicking at the caller on failure.
/// This is the behavior of the operator forms, which cannot return a `Result`.
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}
