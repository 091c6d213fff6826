use sss_math::poly::horner;
use sss_math::traits::FiniteField;
use tracing::debug;

use crate::randomness::FieldSampler;
use crate::share::{Share, ShareSet};

/// Renew every share without reconstructing the secret.
///
/// A fresh polynomial of the same degree with a zero constant term is drawn
/// and its value at each party's point is added to that party's share. The
/// result is a new sharing of the same secret; shares from before and after a
/// refresh do not combine into anything meaningful and must not be mixed.
///
/// The input set is already validated, so this cannot fail.
pub fn refresh<FF, S>(shares: &ShareSet<FF>, source: &mut S) -> ShareSet<FF>
where
    FF: FiniteField,
    S: FieldSampler<FF> + ?Sized,
{
    let threshold = shares.threshold();
    debug!(threshold, parties = shares.len(), "refreshing shares");

    let coefficients: Vec<FF> =
        (1..threshold).map(|_| source.sample_element()).collect();

    let renewed = shares
        .iter()
        .map(|share| {
            let delta = horner(FF::ZERO, &coefficients, share.x());
            Share::from_point(share.x(), share.y() + delta)
        })
        .collect();

    ShareSet::from_parts(threshold, renewed)
}
