//! Sources of polynomial coefficients.
//!
//! Dealers never construct randomness themselves; they are handed a
//! [`FieldSampler`]. Any `rand` RNG is one, and [`ScriptedSource`] replays
//! fixed values so a split can be reproduced exactly.

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use sss_math::traits::FiniteField;

/// Produces field elements to be used as random polynomial coefficients.
pub trait FieldSampler<FF> {
    fn sample_element(&mut self) -> FF;
}

impl<FF, R> FieldSampler<FF> for R
where
    R: Rng + ?Sized,
    StandardUniform: Distribution<FF>,
{
    fn sample_element(&mut self) -> FF {
        self.random()
    }
}

/// Replays a fixed list of coefficients in order, wrapping around when it
/// runs out. An empty script yields zero.
///
/// A scripted split is not secret. This is meant for tests and worked
/// examples.
#[derive(Clone, Debug)]
pub struct ScriptedSource<FF> {
    values: Vec<FF>,
    draws: usize,
}

impl<FF: FiniteField> ScriptedSource<FF> {
    pub fn new(values: Vec<FF>) -> Self {
        Self { values, draws: 0 }
    }

    /// Number of elements handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl<FF: FiniteField> FieldSampler<FF> for ScriptedSource<FF> {
    fn sample_element(&mut self) -> FF {
        let value = if self.values.is_empty() {
            FF::ZERO
        } else {
            self.values[self.draws % self.values.len()]
        };
        self.draws += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sss_math::prelude::*;

    use super::*;
    use crate::params::DemoField as F;

    #[test]
    fn scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![F::from(10), F::from(20)]);
        let drawn: Vec<F> = (0..5).map(|_| source.sample_element()).collect();
        assert_eq!(
            drawn,
            vec![
                F::from(10),
                F::from(20),
                F::from(10),
                F::from(20),
                F::from(10)
            ]
        );
        assert_eq!(source.draws(), 5);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut source = ScriptedSource::<F>::new(Vec::new());
        assert_eq!(source.sample_element(), F::ZERO);
        assert_eq!(source.draws(), 1);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let x: F = a.sample_element();
            let y: F = b.sample_element();
            assert_eq!(x, y);
            assert!(F::is_canonical(u64::from(x.value())));
        }
    }

    #[test]
    fn works_through_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(1);
        let rng: &mut dyn rand::RngCore = &mut rng;
        let x: F = rng.sample_element();
        assert!(x.value() < 307);
    }
}
