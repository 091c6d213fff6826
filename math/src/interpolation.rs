//! Lagrange interpolation at a single target point.
//!
//! Given `t` samples `(x_i, y_i)` of a polynomial of degree `t - 1`,
//!
//! ```text
//! P(x0) = Σ_i y_i · Π_{k≠i} (x0 − x_k) / (x_i − x_k)
//! ```
//!
//! All arithmetic is in the field; the `t` denominators are inverted together
//! with one batch inversion.

use std::collections::HashSet;

use itertools::izip;

use crate::error::{InterpolationError, Result};
use crate::traits::FiniteField;

/// Fail with [`InterpolationError::DuplicateInterpolationPoint`] on the first
/// repeated x-coordinate.
pub(crate) fn ensure_distinct<'a, FF>(
    xs: impl IntoIterator<Item = &'a FF>,
) -> std::result::Result<(), InterpolationError>
where
    FF: FiniteField + 'a,
{
    let mut seen = HashSet::new();
    for x in xs {
        if !seen.insert(*x) {
            return Err(InterpolationError::DuplicateInterpolationPoint(
                x.canonical_value(),
            ));
        }
    }
    Ok(())
}

/// Evaluate at `target` the polynomial passing through `points`.
///
/// The x-coordinates must be pairwise distinct. A repeated x is reported as
/// [`InterpolationError::DuplicateInterpolationPoint`] before any division
/// happens.
///
/// The number of points is the caller's responsibility: supplying fewer
/// points than the degree of the underlying polynomial plus one returns a
/// value that is unrelated to the true one, and nothing here can tell the
/// difference. That indistinguishability is exactly what keeps fewer than
/// `t` shares from leaking a secret.
///
/// ```
/// use sss_math::prelude::*;
///
/// type F = FieldElement<307>;
/// // 62 + 10x sampled at x = 1 and x = 2
/// let points = [(F::from(1), F::from(72)), (F::from(2), F::from(82))];
/// assert_eq!(interpolate_at(&points, F::ZERO).unwrap(), F::from(62));
/// ```
pub fn interpolate_at<FF: FiniteField>(
    points: &[(FF, FF)],
    target: FF,
) -> Result<FF> {
    if points.is_empty() {
        return Err(InterpolationError::NoPoints.into());
    }
    ensure_distinct(points.iter().map(|(x, _)| x))?;

    let (numerators, denominators): (Vec<FF>, Vec<FF>) = points
        .iter()
        .enumerate()
        .map(|(i, &(xi, _))| {
            points
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i)
                .fold((FF::ONE, FF::ONE), |(num, den), (_, &(xk, _))| {
                    (num * (target - xk), den * (xi - xk))
                })
        })
        .unzip();

    let inverses = FF::try_batch_inversion(denominators)?;

    Ok(izip!(points, numerators, inverses).fold(
        FF::ZERO,
        |acc, (&(_, yi), num, den_inv)| acc + yi * num * den_inv,
    ))
}

/// Shorthand for [`interpolate_at`] with `target = 0`, i.e. the constant
/// term (the shared secret).
pub fn interpolate_constant_at_zero<FF: FiniteField>(
    points: &[(FF, FF)],
) -> Result<FF> {
    interpolate_at(points, FF::ZERO)
}

#[cfg(test)]
mod tests {
    use num_traits::ConstZero;

    use super::*;
    use crate::error::MathError;
    use crate::field_element::FieldElement;
    use crate::poly::Polynomial;
    use crate::poly;

    type F = FieldElement<307>;

    fn samples(p: &Polynomial<F>, xs: &[u32]) -> Vec<(F, F)> {
        xs.iter()
            .map(|&x| {
                let x = F::from(x);
                (x, p.evaluate(x))
            })
            .collect()
    }

    #[test]
    fn recovers_constant_term() {
        let points = [(F::from(1), F::from(72)), (F::from(2), F::from(82))];
        assert_eq!(interpolate_constant_at_zero(&points).unwrap(), F::from(62));
    }

    #[test]
    fn evaluates_at_arbitrary_targets() {
        let p: Polynomial<F> = poly![17, 230, 5];
        let points = samples(&p, &[4, 9, 200]);
        for target in [0u32, 1, 4, 50, 306] {
            let target = F::from(target);
            assert_eq!(interpolate_at(&points, target).unwrap(), p.evaluate(target));
        }
    }

    #[test]
    fn any_subset_of_the_right_size_agrees() {
        let p: Polynomial<F> = poly![123, 45, 67];
        let all = samples(&p, &[1, 2, 3, 4, 5]);
        let subsets = [[0, 1, 2], [2, 3, 4], [4, 0, 2], [1, 3, 4]];
        for subset in subsets {
            let points: Vec<_> = subset.iter().map(|&i| all[i]).collect();
            assert_eq!(
                interpolate_constant_at_zero(&points).unwrap(),
                F::from(123)
            );
        }
    }

    #[test]
    fn single_point_is_a_constant() {
        let points = [(F::from(9), F::from(40))];
        assert_eq!(interpolate_at(&points, F::from(100)).unwrap(), F::from(40));
    }

    #[test]
    fn repeated_x_is_reported() {
        let points = [
            (F::from(1), F::from(3)),
            (F::from(2), F::from(4)),
            (F::from(1), F::from(5)),
        ];
        assert_eq!(
            interpolate_at(&points, F::ZERO),
            Err(MathError::Interpolation(
                InterpolationError::DuplicateInterpolationPoint(1)
            ))
        );
    }

    #[test]
    fn empty_input_is_reported() {
        assert_eq!(
            interpolate_at::<F>(&[], F::ZERO),
            Err(MathError::Interpolation(InterpolationError::NoPoints))
        );
    }

    #[test]
    fn too_few_points_silently_differ() {
        let p: Polynomial<F> = poly![62, 10, 20];
        let points = samples(&p, &[1, 2]);
        // Two points of a degree-two polynomial describe some other line.
        let value = interpolate_constant_at_zero(&points).unwrap();
        assert_ne!(value, F::from(62));
    }
}
