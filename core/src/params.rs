use serde::{Deserialize, Serialize};
use sss_math::field_element::FieldElement;

use crate::error::{Result, ShamirError};

/// Modulus of the three-party averaging demo.
pub const DEMO_MODULUS: u32 = 307;

/// Field used by the demo, benches and most tests.
pub type DemoField = FieldElement<DEMO_MODULUS>;

/// `1 <= threshold <= participant_number`.
#[inline]
pub const fn validate_threshold_config(
    threshold: usize,
    participant_number: usize,
) -> bool {
    threshold >= 1 && threshold <= participant_number
}

/// A validated `(t, n)` pair: `t` shares reconstruct, `t - 1` reveal nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub threshold: usize,
    pub participant_number: usize,
}

impl ThresholdConfig {
    pub fn new(threshold: usize, participant_number: usize) -> Result<Self> {
        if !validate_threshold_config(threshold, participant_number) {
            return Err(ShamirError::InvalidThreshold {
                threshold,
                participant_number,
            });
        }
        Ok(Self {
            threshold,
            participant_number,
        })
    }

    /// Number of random coefficients a dealer draws per secret.
    pub fn random_coefficients(&self) -> usize {
        self.threshold - 1
    }

    /// `t = n`: every party is needed, the scheme degenerates to additive
    /// sharing.
    pub fn is_full_threshold(&self) -> bool {
        self.threshold == self.participant_number
    }
}
