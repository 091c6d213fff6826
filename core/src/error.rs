use sss_math::error::{FieldError, InterpolationError, MathError};
use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = ShamirError> = std::result::Result<T, E>;

/// Errors that can arise while splitting, combining or reconstructing shares.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error(
        "Invalid threshold configuration: threshold {threshold} with {participant_number} participants"
    )]
    InvalidThreshold {
        threshold: usize,
        participant_number: usize,
    },
    #[error("{participants} participants do not fit into a field of order {modulus}")]
    TooManyParticipants { participants: usize, modulus: u64 },
    #[error("Evaluation point 0 is reserved for the secret")]
    ZeroEvaluationPoint,
    #[error("Evaluation point {0} is assigned to more than one participant")]
    DuplicateEvaluationPoint(u64),
    #[error("Mismatched share count: expected {expected}, found {found}")]
    MismatchedShareCount { expected: usize, found: usize },
    #[error("Share sets were produced over different evaluation points")]
    MismatchedPoints,
    #[error("Mismatched threshold: expected {expected}, found {found}")]
    MismatchedThreshold { expected: usize, found: usize },
    #[error("No share sets to combine")]
    NoShareSets,
    #[error(transparent)]
    Math(#[from] MathError),
}

impl From<FieldError> for ShamirError {
    fn from(value: FieldError) -> Self {
        ShamirError::Math(value.into())
    }
}

impl From<InterpolationError> for ShamirError {
    fn from(value: InterpolationError) -> Self {
        ShamirError::Math(value.into())
    }
}

impl ShamirError {
    /// Configuration errors are detected before any work is done and cannot
    /// be recovered from by retrying with the same inputs.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ShamirError::InvalidThreshold { .. }
                | ShamirError::TooManyParticipants { .. }
                | ShamirError::ZeroEvaluationPoint
                | ShamirError::DuplicateEvaluationPoint(_)
                | ShamirError::Math(MathError::Field(FieldError::NonPrimeModulus(_)))
        )
    }
}
