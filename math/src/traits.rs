use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FieldError;

pub trait Inverse
where
    Self: Sized + Zero,
{
    /// Multiplicative inverse; fails for zero.
    fn inverse(&self) -> Result<Self, FieldError>;
}

pub trait AddGroup:
    Copy
    + ConstZero
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
{
}

impl<T> AddGroup for T where
    T: Copy
        + ConstZero
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Neg<Output = T>
        + AddAssign
        + SubAssign
        + Sum
{
}

pub trait MulGroup: Copy + ConstOne + One + Mul<Output = Self> + MulAssign {}

impl<T> MulGroup for T where T: Copy + ConstOne + One + Mul<Output = T> + MulAssign
{}

pub trait CanonicalEncoding {
    /// The canonical representative in `[0, MODULUS)`.
    fn canonical_value(&self) -> u64;
}

pub trait FieldCore:
    Debug + Display + Default + Eq + Serialize + DeserializeOwned + Hash
{
}

impl<T> FieldCore for T where
    T: Debug + Display + Default + Eq + Serialize + DeserializeOwned + Hash
{
}

pub trait FieldConversions:
    From<u64> + From<i64> + From<u32> + From<i32>
{
}

impl<T> FieldConversions for T where
    T: From<u64> + From<i64> + From<u32> + From<i32>
{
}

pub trait FiniteField:
    AddGroup
    + MulGroup
    + FieldCore
    + CanonicalEncoding
    + Inverse
    + FieldConversions
    + Send
    + Sync
{
    /// Order of the field.
    const MODULUS: u64;

    /// `self / divisor`, failing instead of panicking on a zero divisor.
    fn checked_div(self, divisor: Self) -> Result<Self, FieldError> {
        Ok(self * divisor.inverse()?)
    }

    /// Montgomery batch inversion: a single field inversion for the whole
    /// slice. Fails with [`FieldError::DivisionByZero`] if any input is zero.
    /// Adapted from
    /// <https://paulmillr.com/posts/noble-secp256k1-fast-ecc/#batch-inversion>.
    fn try_batch_inversion(mut input: Vec<Self>) -> Result<Vec<Self>, FieldError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut scratch: Vec<Self> = Vec::with_capacity(input.len());
        let mut acc = Self::one();

        for value in &input {
            if value.is_zero() {
                return Err(FieldError::DivisionByZero);
            }
            scratch.push(acc);
            acc *= *value;
        }

        acc = acc.inverse()?;

        for (value, prefix) in
            input.iter_mut().rev().zip(scratch.into_iter().rev())
        {
            let current = *value;
            *value = acc * prefix;
            acc *= current;
        }

        Ok(input)
    }
}
