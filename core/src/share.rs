use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sss_math::traits::FiniteField;

use crate::error::{Result, ShamirError};
use crate::points::EvaluationPoints;

/// One participant's point `(x, P(x))` on a sharing polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShare<FF>", bound(deserialize = "FF: FiniteField"))]
pub struct Share<FF: FiniteField> {
    x: FF,
    y: FF,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "FF: FiniteField"))]
struct RawShare<FF: FiniteField> {
    x: FF,
    y: FF,
}

impl<FF: FiniteField> TryFrom<RawShare<FF>> for Share<FF> {
    type Error = ShamirError;

    fn try_from(raw: RawShare<FF>) -> Result<Self> {
        Share::new(raw.x, raw.y)
    }
}

impl<FF: FiniteField> Share<FF> {
    pub fn new(x: FF, y: FF) -> Result<Self> {
        if x.is_zero() {
            return Err(ShamirError::ZeroEvaluationPoint);
        }
        Ok(Share { x, y })
    }

    /// `x` comes from validated [`EvaluationPoints`] and is nonzero.
    pub(crate) fn from_point(x: FF, y: FF) -> Self {
        debug_assert!(!x.is_zero());
        Share { x, y }
    }

    /// The participant's evaluation point.
    pub fn x(&self) -> FF {
        self.x
    }

    pub fn y(&self) -> FF {
        self.y
    }

    pub fn as_point(&self) -> (FF, FF) {
        (self.x, self.y)
    }
}

/// All `n` shares of one secret (or of an aggregate), in party order, along
/// with the threshold they were produced for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShareSet<FF>", bound(deserialize = "FF: FiniteField"))]
pub struct ShareSet<FF: FiniteField> {
    threshold: usize,
    shares: Vec<Share<FF>>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "FF: FiniteField"))]
struct RawShareSet<FF: FiniteField> {
    threshold: usize,
    shares: Vec<Share<FF>>,
}

impl<FF: FiniteField> TryFrom<RawShareSet<FF>> for ShareSet<FF> {
    type Error = ShamirError;

    fn try_from(raw: RawShareSet<FF>) -> Result<Self> {
        ShareSet::new(raw.threshold, raw.shares)
    }
}

impl<FF: FiniteField> ShareSet<FF> {
    /// Assemble a share set received from elsewhere. The threshold must be
    /// satisfiable by the shares present and no point may repeat.
    pub fn new(threshold: usize, shares: Vec<Share<FF>>) -> Result<Self> {
        if threshold == 0 || threshold > shares.len() {
            return Err(ShamirError::InvalidThreshold {
                threshold,
                participant_number: shares.len(),
            });
        }
        let mut seen = HashSet::with_capacity(shares.len());
        for share in &shares {
            if !seen.insert(share.x) {
                return Err(ShamirError::DuplicateEvaluationPoint(
                    share.x.canonical_value(),
                ));
            }
        }
        Ok(Self { threshold, shares })
    }

    /// Caller guarantees the invariants `new` checks.
    pub(crate) fn from_parts(threshold: usize, shares: Vec<Share<FF>>) -> Self {
        debug_assert!(threshold >= 1 && threshold <= shares.len());
        Self { threshold, shares }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn shares(&self) -> &[Share<FF>] {
        &self.shares
    }

    pub fn into_shares(self) -> Vec<Share<FF>> {
        self.shares
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Share destined for the party at index `party`.
    pub fn share_for(&self, party: usize) -> Option<&Share<FF>> {
        self.shares.get(party)
    }

    pub fn points(&self) -> impl Iterator<Item = FF> + '_ {
        self.shares.iter().map(Share::x)
    }

    /// Whether this set was produced over exactly `points`, in order.
    pub fn is_over(&self, points: &EvaluationPoints<FF>) -> bool {
        self.len() == points.len()
            && self.points().zip(points.iter()).all(|(a, &b)| a == b)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Share<FF>> {
        self.shares.iter()
    }
}
