//! Homomorphic combination of share sets.
//!
//! Shares are linear in the secret: adding, point by point, the shares of
//! several secrets yields valid shares of their sum under the same threshold.
//! No party ever learns another dealer's secret, only the aggregate.

use sss_math::traits::FiniteField;
use tracing::debug;

use crate::error::{Result, ShamirError};
use crate::share::{Share, ShareSet};

/// Sum several dealers' share sets into shares of the sum of their secrets.
///
/// All sets must have the same threshold and be over the same evaluation
/// points in the same order.
pub fn combine_homomorphically<FF: FiniteField>(
    share_sets: &[ShareSet<FF>],
) -> Result<ShareSet<FF>> {
    let (first, rest) = share_sets.split_first().ok_or(ShamirError::NoShareSets)?;
    for set in rest {
        ensure_compatible(first, set)?;
    }
    debug!(dealers = share_sets.len(), parties = first.len(), "combining shares");

    let shares = first
        .iter()
        .enumerate()
        .map(|(party, share)| {
            let y = share_sets
                .iter()
                .map(|set| set.shares()[party].y())
                .sum();
            Share::from_point(share.x(), y)
        })
        .collect();

    Ok(ShareSet::from_parts(first.threshold(), shares))
}

fn ensure_compatible<FF: FiniteField>(
    expected: &ShareSet<FF>,
    found: &ShareSet<FF>,
) -> Result<()> {
    if found.threshold() != expected.threshold() {
        return Err(ShamirError::MismatchedThreshold {
            expected: expected.threshold(),
            found: found.threshold(),
        });
    }
    if found.len() != expected.len() {
        return Err(ShamirError::MismatchedShareCount {
            expected: expected.len(),
            found: found.len(),
        });
    }
    if expected.points().ne(found.points()) {
        return Err(ShamirError::MismatchedPoints);
    }
    Ok(())
}

/// The local step a single party performs: sum the shares it received from
/// every dealer. Each share must carry the party's own point `x`.
pub fn aggregate_for_party<FF: FiniteField>(
    x: FF,
    received: &[Share<FF>],
) -> Result<Share<FF>> {
    if received.is_empty() {
        return Err(ShamirError::NoShareSets);
    }
    if received.iter().any(|share| share.x() != x) {
        return Err(ShamirError::MismatchedPoints);
    }
    let y = received.iter().map(Share::y).sum();
    Share::new(x, y)
}
