use std::num::ParseIntError;

use thiserror::Error;

pub mod field {
    use thiserror::Error;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("division by zero: zero has no multiplicative inverse")]
        DivisionByZero,
        #[error("modulus {0} is not prime")]
        NonPrimeModulus(u64),
    }
}

pub mod interpolation {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("interpolation point x = {0} was supplied more than once")]
        DuplicateInterpolationPoint(u64),
        #[error("got {xs} x-coordinates but {ys} y-coordinates")]
        LengthMismatch { xs: usize, ys: usize },
        #[error("cannot interpolate without any points")]
        NoPoints,
    }
}

pub use field::Error as FieldError;
pub use interpolation::Error as InterpolationError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    ParseFieldElement(#[from] ParseFieldElementError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

pub type Error = MathError;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseFieldElementError {
    #[error("invalid `u64`")]
    ParseU64Error(#[source] ParseIntError),
    #[error("non-canonical {value} >= {modulus}, the field modulus")]
    NotCanonical { value: u64, modulus: u64 },
}
