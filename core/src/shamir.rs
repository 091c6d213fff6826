//! Shamir's (t, n) secret sharing over a prime field.
//!
//! A dealer hides `secret` as the constant term of a random polynomial of
//! degree `t - 1` and hands party `i` the value of that polynomial at the
//! party's evaluation point. Any `t` shares determine the polynomial, and
//! hence the secret, by Lagrange interpolation; any `t - 1` are consistent
//! with every possible secret.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use sss_math::interpolation::interpolate_at;
use sss_math::poly::horner;
use sss_math::traits::FiniteField;
use tracing::{debug, trace};

use crate::error::{Result, ShamirError};
use crate::params::{validate_threshold_config, ThresholdConfig};
use crate::points::EvaluationPoints;
use crate::randomness::FieldSampler;
use crate::share::{Share, ShareSet};

/// Split `secret` into one share per evaluation point, any `threshold` of
/// which reconstruct it.
///
/// Exactly `threshold - 1` coefficients are drawn from `source`, and only
/// after the configuration has been validated.
pub fn split<FF, S>(
    secret: FF,
    threshold: usize,
    points: &EvaluationPoints<FF>,
    source: &mut S,
) -> Result<ShareSet<FF>>
where
    FF: FiniteField,
    S: FieldSampler<FF> + ?Sized,
{
    if !validate_threshold_config(threshold, points.len()) {
        return Err(ShamirError::InvalidThreshold {
            threshold,
            participant_number: points.len(),
        });
    }
    debug!(threshold, parties = points.len(), "splitting secret");

    let coefficients: Vec<FF> =
        (1..threshold).map(|_| source.sample_element()).collect();

    let shares = evaluate_shares(secret, &coefficients, points.as_slice());
    Ok(ShareSet::from_parts(threshold, shares))
}

#[cfg(not(feature = "parallel"))]
fn evaluate_shares<FF: FiniteField>(
    constant: FF,
    coefficients: &[FF],
    points: &[FF],
) -> Vec<Share<FF>> {
    points
        .iter()
        .enumerate()
        .map(|(party, &x)| {
            trace!(party, "evaluating share");
            Share::from_point(x, horner(constant, coefficients, x))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_shares<FF: FiniteField>(
    constant: FF,
    coefficients: &[FF],
    points: &[FF],
) -> Vec<Share<FF>> {
    points
        .par_iter()
        .enumerate()
        .map(|(party, &x)| {
            trace!(party, "evaluating share");
            Share::from_point(x, horner(constant, coefficients, x))
        })
        .collect()
}

/// Evaluate at `target` the polynomial the shares lie on; `target = 0`
/// recovers the secret.
///
/// Every share handed in is used. With fewer shares than the threshold the
/// sharing was made for, the result is a well-formed field element that has
/// nothing to do with the secret, and this cannot be detected here. Use
/// [`ShamirSSS::reconstruct_secret`] when the threshold is known.
pub fn reconstruct<FF: FiniteField>(shares: &[Share<FF>], target: FF) -> Result<FF> {
    debug!(points = shares.len(), "reconstructing");
    let points: Vec<(FF, FF)> = shares.iter().map(Share::as_point).collect();
    Ok(interpolate_at(&points, target)?)
}

/// A reusable `(t, n)` configuration bound to a fixed set of evaluation
/// points.
#[derive(Clone, Debug)]
pub struct ShamirSSS<FF: FiniteField> {
    config: ThresholdConfig,
    points: EvaluationPoints<FF>,
}

impl<FF: FiniteField> ShamirSSS<FF> {
    /// Initialize the scheme; fails unless `1 <= threshold <= points.len()`.
    pub fn new(threshold: usize, points: EvaluationPoints<FF>) -> Result<Self> {
        let config = ThresholdConfig::new(threshold, points.len())?;
        Ok(ShamirSSS { config, points })
    }

    /// Scheme over the sequential points `1..=participant_number`.
    pub fn with_participants(
        threshold: usize,
        participant_number: usize,
    ) -> Result<Self> {
        let config = ThresholdConfig::new(threshold, participant_number)?;
        let points = EvaluationPoints::sequential(participant_number)?;
        Ok(ShamirSSS { config, points })
    }

    pub fn config(&self) -> ThresholdConfig {
        self.config
    }

    pub fn threshold(&self) -> usize {
        self.config.threshold
    }

    pub fn points(&self) -> &EvaluationPoints<FF> {
        &self.points
    }

    pub fn split_secret<S>(&self, secret: FF, source: &mut S) -> Result<ShareSet<FF>>
    where
        S: FieldSampler<FF> + ?Sized,
    {
        split(secret, self.config.threshold, &self.points, source)
    }

    /// Reconstruct the secret from the first `threshold` of `shares`.
    pub fn reconstruct_secret(&self, shares: &[Share<FF>]) -> Result<FF> {
        let threshold = self.config.threshold;
        if shares.len() < threshold {
            return Err(ShamirError::MismatchedShareCount {
                expected: threshold,
                found: shares.len(),
            });
        }
        let active_shares = &shares[..threshold];
        if let Some(share) = active_shares
            .iter()
            .find(|share| self.points.party_of(share.x()).is_none())
        {
            debug!(x = share.x().canonical_value(), "share from unknown party");
            return Err(ShamirError::MismatchedPoints);
        }
        reconstruct(active_shares, FF::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sss_math::error::{InterpolationError, MathError};
    use sss_math::prelude::*;

    use super::*;
    use crate::params::DemoField as F;
    use crate::randomness::ScriptedSource;

    fn share(x: u32, y: u32) -> Share<F> {
        Share::new(F::from(x), F::from(y)).unwrap()
    }

    mod split_tests {
        use super::*;

        #[test]
        fn two_of_two_worked_example() {
            let points = EvaluationPoints::sequential(2).unwrap();
            let mut source = ScriptedSource::new(vec![F::from(10)]);
            let set = split(F::from(62), 2, &points, &mut source).unwrap();

            assert_eq!(set.shares(), &[share(1, 72), share(2, 82)]);
            assert_eq!(set.threshold(), 2);
            assert_eq!(source.draws(), 1);
        }

        #[test]
        fn draws_exactly_threshold_minus_one() {
            let points = EvaluationPoints::<F>::sequential(6).unwrap();
            for threshold in 1..=6 {
                let mut source = ScriptedSource::new(vec![F::from(3)]);
                split(F::from(5), threshold, &points, &mut source).unwrap();
                assert_eq!(source.draws(), threshold - 1);
            }
        }

        #[test]
        fn threshold_one_hands_out_the_secret() {
            let points = EvaluationPoints::<F>::sequential(4).unwrap();
            let mut rng = StdRng::seed_from_u64(3);
            let set = split(F::from(99), 1, &points, &mut rng).unwrap();
            assert!(set.iter().all(|s| s.y() == F::from(99)));
        }

        #[test]
        fn invalid_threshold_draws_nothing() {
            let points = EvaluationPoints::<F>::sequential(3).unwrap();
            let mut source = ScriptedSource::new(vec![F::from(1)]);
            for threshold in [0, 4] {
                assert_eq!(
                    split(F::from(1), threshold, &points, &mut source),
                    Err(ShamirError::InvalidThreshold {
                        threshold,
                        participant_number: 3
                    })
                );
            }
            assert_eq!(source.draws(), 0);
        }

        #[test]
        fn shares_follow_point_order() {
            let points =
                EvaluationPoints::new(vec![F::from(5), F::from(2), F::from(9)])
                    .unwrap();
            let mut rng = StdRng::seed_from_u64(11);
            let set = split(F::from(17), 2, &points, &mut rng).unwrap();
            assert!(set.is_over(&points));
        }
    }

    mod reconstruct_tests {
        use super::*;

        #[test]
        fn recovers_the_worked_example() {
            let shares = [share(1, 72), share(2, 82)];
            assert_eq!(reconstruct(&shares, F::ZERO).unwrap(), F::from(62));
            // And the polynomial itself elsewhere.
            assert_eq!(reconstruct(&shares, F::from(3)).unwrap(), F::from(92));
        }

        #[test]
        fn duplicate_points_surface_as_math_errors() {
            let shares = [share(1, 72), share(1, 82)];
            assert_eq!(
                reconstruct(&shares, F::ZERO),
                Err(ShamirError::Math(MathError::Interpolation(
                    InterpolationError::DuplicateInterpolationPoint(1)
                )))
            );
        }

        #[test]
        fn empty_input_is_an_error() {
            assert_eq!(
                reconstruct::<F>(&[], F::ZERO),
                Err(ShamirError::Math(MathError::Interpolation(
                    InterpolationError::NoPoints
                )))
            );
        }
    }

    mod scheme_tests {
        use super::*;

        #[test]
        fn test_shamir_initialization() {
            let scheme = ShamirSSS::<F>::with_participants(3, 5).unwrap();
            assert_eq!(scheme.threshold(), 3);
            assert_eq!(scheme.points().len(), 5);
            assert_eq!(scheme.config(), ThresholdConfig::new(3, 5).unwrap());
        }

        #[test]
        fn test_invalid_threshold_config() {
            assert_eq!(
                ShamirSSS::<F>::with_participants(0, 5).map(|s| s.threshold()),
                Err(ShamirError::InvalidThreshold {
                    threshold: 0,
                    participant_number: 5
                })
            );
            assert_eq!(
                ShamirSSS::<F>::with_participants(6, 5).map(|s| s.threshold()),
                Err(ShamirError::InvalidThreshold {
                    threshold: 6,
                    participant_number: 5
                })
            );
            assert_eq!(
                ShamirSSS::<F>::with_participants(3, 400).map(|s| s.threshold()),
                Err(ShamirError::TooManyParticipants {
                    participants: 400,
                    modulus: 307
                })
            );
        }

        #[test]
        fn test_secret_splitting_and_reconstruction() {
            let scheme = ShamirSSS::<F>::with_participants(3, 5).unwrap();
            let mut rng = StdRng::seed_from_u64(2024);
            let set = scheme.split_secret(F::from(123), &mut rng).unwrap();
            assert_eq!(set.len(), 5);

            let shares = set.shares();
            assert_eq!(scheme.reconstruct_secret(shares).unwrap(), F::from(123));
            assert_eq!(
                scheme.reconstruct_secret(&shares[2..]).unwrap(),
                F::from(123)
            );
        }

        #[test]
        fn test_insufficient_shares() {
            let scheme = ShamirSSS::<F>::with_participants(3, 5).unwrap();
            let mut rng = StdRng::seed_from_u64(5);
            let set = scheme.split_secret(F::from(1), &mut rng).unwrap();
            assert_eq!(
                scheme.reconstruct_secret(&set.shares()[..2]),
                Err(ShamirError::MismatchedShareCount {
                    expected: 3,
                    found: 2
                })
            );
        }

        #[test]
        fn test_foreign_share_is_rejected() {
            let scheme = ShamirSSS::<F>::with_participants(2, 3).unwrap();
            let shares = [share(1, 72), share(200, 82)];
            assert_eq!(
                scheme.reconstruct_secret(&shares),
                Err(ShamirError::MismatchedPoints)
            );
        }
    }
}
