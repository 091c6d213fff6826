use std::ops::Add;

use crate::error::{MathError, Result};
use crate::interpolation::ensure_distinct;
use crate::traits::FiniteField;

/// Evaluate `secret + c_1 x + ... + c_{t-1} x^{t-1}` at `x` using Horner's
/// method: fold from the highest-degree coefficient down and add the
/// constant term last. Only field multiplication and addition are used.
#[inline]
pub fn horner<FF: FiniteField>(secret: FF, higher: &[FF], x: FF) -> FF {
    higher
        .iter()
        .rev()
        .fold(FF::ZERO, |acc, &coefficient| (acc + coefficient) * x)
        + secret
}

/// Dense univariate polynomial over a prime field, lowest degree first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<FF: FiniteField> {
    coefficients: Vec<FF>,
}

impl<FF: FiniteField> Polynomial<FF> {
    pub fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    pub fn coefficients(&self) -> &[FF] {
        &self.coefficients
    }

    /// The value at zero; for a sharing polynomial this is the secret.
    pub fn constant_term(&self) -> FF {
        self.coefficients.first().copied().unwrap_or(FF::ZERO)
    }

    /// Degree of the polynomial, `-1` for the zero polynomial.
    pub fn degree(&self) -> isize {
        self.coefficients
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(-1, |idx| idx as isize)
    }

    pub fn is_zero(&self) -> bool {
        self.degree() == -1
    }

    pub fn evaluate(&self, x: FF) -> FF {
        match self.coefficients.split_first() {
            Some((&constant, higher)) => horner(constant, higher, x),
            None => FF::ZERO,
        }
    }

    pub fn batch_evaluate(&self, xs: &[FF]) -> Vec<FF> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Recover the unique polynomial of degree `< xs.len()` passing through
    /// every `(xs[i], ys[i])`.
    pub fn lagrange_interpolate(xs: &[FF], ys: &[FF]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::Interpolation(
                crate::error::InterpolationError::LengthMismatch {
                    xs: xs.len(),
                    ys: ys.len(),
                },
            ));
        }
        ensure_distinct(xs.iter())?;

        let mut coefficients = vec![FF::ZERO; xs.len()];
        for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
            let mut basis = vec![FF::ONE];
            let mut denominator = FF::ONE;
            for (k, &xk) in xs.iter().enumerate() {
                if k == i {
                    continue;
                }
                basis = multiply_by_linear(&basis, xk);
                denominator *= xi - xk;
            }

            let scale = yi * denominator.inverse()?;
            for (acc, b) in coefficients.iter_mut().zip(basis) {
                *acc += b * scale;
            }
        }

        Ok(Self::from(coefficients))
    }
}

/// `poly * (X - root)`.
fn multiply_by_linear<FF: FiniteField>(poly: &[FF], root: FF) -> Vec<FF> {
    let mut out = vec![FF::ZERO; poly.len() + 1];
    for (j, &c) in poly.iter().enumerate() {
        out[j + 1] += c;
        out[j] -= c * root;
    }
    out
}

impl<FF: FiniteField> From<Vec<FF>> for Polynomial<FF> {
    fn from(coefficients: Vec<FF>) -> Self {
        Self { coefficients }
    }
}

impl<FF: FiniteField> Add for Polynomial<FF> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let (mut longer, shorter) =
            if self.coefficients.len() >= other.coefficients.len() {
                (self.coefficients, other.coefficients)
            } else {
                (other.coefficients, self.coefficients)
            };
        for (acc, c) in longer.iter_mut().zip(shorter) {
            *acc += c;
        }
        Self::from(longer)
    }
}
