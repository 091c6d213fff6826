use std::fmt;
use std::hash::Hash;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;
use std::str::FromStr;

use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use rand::Rng;
use serde::de::Error as _;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use super::{
    error::{FieldError, ParseFieldElementError},
    traits::*,
};

/// Trial-division primality test, usable in const context.
pub const fn is_prime(candidate: u32) -> bool {
    if candidate < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= candidate / divisor {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Validate a modulus that only becomes known at runtime (configuration
/// data, user input) before choosing a field for it. Moduli that do not fit
/// a `u32` can never back a [`FieldElement`] and are rejected as well.
pub fn check_prime_modulus(modulus: u64) -> Result<u32, FieldError> {
    match u32::try_from(modulus) {
        Ok(candidate) if is_prime(candidate) => Ok(candidate),
        _ => Err(FieldError::NonPrimeModulus(modulus)),
    }
}

/// Element of the prime field GF(Q).
///
/// The modulus is part of the type. Every constructor forces a
/// compile-time primality check, so a field over a composite modulus is
/// rejected when the program is built rather than when it runs:
///
/// ```compile_fail
/// use sss_math::field_element::FieldElement;
///
/// let _ = FieldElement::<306>::new(5);
/// ```
///
/// ```compile_fail
/// use sss_math::field_element::FieldElement;
///
/// let zero = FieldElement::<306>::default();
/// assert_eq!(zero.value(), 0);
/// ```
///
/// ```compile_fail
/// use sss_math::field_element::FieldElement;
///
/// let order = FieldElement::<306>::P;
/// assert_eq!(order, 306);
/// ```
///
/// Values are always kept in canonical form `0 <= v < Q`. The integer is
/// only reachable through [`FieldElement::value`]; there is no
/// numeric conversion out of the field.
///
/// ```
/// use sss_math::field_element::FieldElement;
/// use sss_math::prelude::ConstOne;
///
/// type F = FieldElement<307>;
/// let a = F::from(-1i64);
/// assert_eq!(a.value(), 306);
/// assert_eq!((a + F::ONE).value(), 0);
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct FieldElement<const Q: u32>(u32);

impl<const Q: u32> FieldElement<Q> {
    pub const P: u32 = {
        #[allow(clippy::let_unit_value)]
        let () = Self::PRIME_MODULUS;
        Q
    };
    pub const MAX: u32 = Self::P - 1;

    const PRIME_MODULUS: () =
        assert!(is_prime(Q), "the order of a prime field must be prime");

    #[inline]
    pub const fn new(value: u32) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::PRIME_MODULUS;
        Self(value % Q)
    }

    /// Construct a new field element iff the given value is
    /// [canonical][Self::is_canonical], an error otherwise.
    fn try_new(v: u64) -> Result<Self, ParseFieldElementError> {
        if Self::is_canonical(v) {
            Ok(Self::new(v as u32))
        } else {
            Err(ParseFieldElementError::NotCanonical {
                value: v,
                modulus: Q as u64,
            })
        }
    }

    /// Reduce an arbitrary signed intermediate into `[0, Q)` with the
    /// balanced formula `((x mod Q) + Q) mod Q`.
    #[inline]
    const fn reduce(x: i128) -> Self {
        let q = Q as i128;
        Self::new((((x % q) + q) % q) as u32)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_canonical(x: u64) -> bool {
        x < Q as u64
    }

    /// `self^exponent` by repeated squaring, `O(log exponent)` multiplications.
    #[must_use]
    pub fn pow(self, exponent: u64) -> Self {
        let mut acc = Self::ONE;
        let mut base = self;
        let mut exp = exponent;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }
}

impl<const Q: u32> Serialize for FieldElement<Q> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de, const Q: u32> Deserialize<'de> for FieldElement<Q> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        Self::try_new(value).map_err(D::Error::custom)
    }
}

impl<const Q: u32> fmt::Display for FieldElement<Q> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const Q: u32> FromStr for FieldElement<Q> {
    type Err = ParseFieldElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: u64 =
            s.parse().map_err(ParseFieldElementError::ParseU64Error)?;
        Self::try_new(parsed)
    }
}

macro_rules! impl_from_unsigned_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl<const Q: u32> From<$t> for FieldElement<Q> {
            fn from(value: $t) -> Self {
                Self::reduce((value as u128 % Q as u128) as i128)
            }
        }
    )+};
}

impl_from_unsigned_int_for_fe!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_signed_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl<const Q: u32> From<$t> for FieldElement<Q> {
            fn from(value: $t) -> Self {
                Self::reduce(value as i128)
            }
        }
    )+};
}

impl_from_signed_int_for_fe!(i8, i16, i32, i64, isize);

impl<const Q: u32> Inverse for FieldElement<Q> {
    /// Fermat's little theorem: `a^(Q-1) = 1`, so `a^(Q-2) = a^(-1)`.
    #[inline]
    fn inverse(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow(Q as u64 - 2))
    }
}

impl<const Q: u32> CanonicalEncoding for FieldElement<Q> {
    fn canonical_value(&self) -> u64 {
        self.0 as u64
    }
}

impl<const Q: u32> FiniteField for FieldElement<Q> {
    const MODULUS: u64 = Self::P as u64;
}

impl<const Q: u32> Distribution<FieldElement<Q>> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement<Q> {
        FieldElement::new(rng.random_range(0..Q))
    }
}

impl<const Q: u32> Default for FieldElement<Q> {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl<const Q: u32> Zero for FieldElement<Q> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const Q: u32> ConstZero for FieldElement<Q> {
    const ZERO: Self = Self::new(0);
}

impl<const Q: u32> One for FieldElement<Q> {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl<const Q: u32> ConstOne for FieldElement<Q> {
    const ONE: Self = Self::new(1);
}

impl<const Q: u32> Add for FieldElement<Q> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::reduce(self.0 as i128 + rhs.0 as i128)
    }
}

impl<const Q: u32> Sub for FieldElement<Q> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::reduce(self.0 as i128 - rhs.0 as i128)
    }
}

impl<const Q: u32> Mul for FieldElement<Q> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::reduce(self.0 as i128 * rhs.0 as i128)
    }
}

impl<const Q: u32> Neg for FieldElement<Q> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::reduce(-(self.0 as i128))
    }
}

impl<const Q: u32> AddAssign for FieldElement<Q> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl<const Q: u32> SubAssign for FieldElement<Q> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl<const Q: u32> MulAssign for FieldElement<Q> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const Q: u32> std::iter::Sum for FieldElement<Q> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}
