use std::collections::HashSet;

use sss_math::traits::FiniteField;

use crate::error::{Result, ShamirError};

/// The x-coordinates handed out to participants, one per party.
///
/// Points are nonzero (0 is where the secret lives) and pairwise distinct.
/// Party `i` owns `as_slice()[i]`; every secret that is going to be
/// aggregated must be split over the same `EvaluationPoints`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationPoints<FF: FiniteField> {
    points: Vec<FF>,
}

impl<FF: FiniteField> EvaluationPoints<FF> {
    pub fn new(points: Vec<FF>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(points.len());
        for point in &points {
            if point.is_zero() {
                return Err(ShamirError::ZeroEvaluationPoint);
            }
            if !seen.insert(*point) {
                return Err(ShamirError::DuplicateEvaluationPoint(
                    point.canonical_value(),
                ));
            }
        }
        Ok(Self { points })
    }

    /// The conventional points `1, 2, ..., participants`.
    pub fn sequential(participants: usize) -> Result<Self> {
        if participants as u64 >= FF::MODULUS {
            return Err(ShamirError::TooManyParticipants {
                participants,
                modulus: FF::MODULUS,
            });
        }
        let points = (1..=participants as u64).map(FF::from).collect();
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[FF] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &FF> {
        self.points.iter()
    }

    /// Index of the party that owns `x`, if any.
    pub fn party_of(&self, x: FF) -> Option<usize> {
        self.points.iter().position(|&p| p == x)
    }
}
