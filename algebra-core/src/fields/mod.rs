use crate::{biginteger::bits_msb_first, CanonicalDeserialize, CanonicalSerialize, Result};
use ark_std::UniformRand;
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_bigint::BigUint;
use num_traits::{One, Zero};

#[macro_use]
pub mod arithmetic;

pub mod models;
pub use self::models::*;

/// Builds a prime-field element from a decimal (or `0x`-prefixed hexadecimal)
/// literal, or an extension element from its bracketed coefficients.
/// Intended for fixed parameter tables; panics on a malformed literal or a
/// wrong coefficient count.
#[macro_export]
macro_rules! field_new {
    ($name:ty, [$($c:expr),+ $(,)?]) => {
        match <$name>::new(vec![$($c),+]) {
            Ok(element) => element,
            Err(e) => panic!("malformed parameter literal: {}", e),
        }
    };
    ($name:ty, $c0:expr) => {
        <$name>::new($crate::biginteger::biguint_const($c0))
    };
}

/// The interface for a generic field.
///
/// Division is deliberately not an operator: it is fallible, so it goes
/// through [`Field::checked_div`] and [`Field::inverse`].
pub trait Field:
    'static
    + Clone
    + Debug
    + Display
    + Send
    + Sync
    + Eq
    + Hash
    + Zero
    + One
    + Neg<Output = Self>
    + UniformRand
    + CanonicalSerialize
    + CanonicalDeserialize
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + core::iter::Sum<Self>
    + for<'a> core::iter::Sum<&'a Self>
    + core::iter::Product<Self>
    + for<'a> core::iter::Product<&'a Self>
    + From<u64>
    + From<i64>
{
    /// Returns the characteristic of the field.
    fn characteristic() -> &'static BigUint;

    /// Returns the degree of this field over its prime subfield.
    fn extension_degree() -> usize;

    /// Returns `self + self`.
    #[must_use]
    fn double(&self) -> Self {
        self.clone() + self
    }

    /// Returns `self * self`.
    #[must_use]
    fn square(&self) -> Self {
        self.clone() * self
    }

    /// Computes the multiplicative inverse of `self`.
    fn inverse(&self) -> Result<Self>;

    /// Returns `self / other`, failing when `other` has no inverse.
    fn checked_div(&self, other: &Self) -> Result<Self> {
        Ok(other.inverse()? * self)
    }

    /// Multiplies by an integer, as repeated addition would.
    #[must_use]
    fn scalar_mul(&self, by: u64) -> Self {
        Self::from(by) * self
    }

    /// Returns `self^exp`, scanning the exponent from its most significant bit.
    #[must_use]
    fn pow(&self, exp: &BigUint) -> Self {
        let mut res = Self::one();
        for bit in bits_msb_first(exp) {
            res = res.square();
            if bit {
                res *= self;
            }
        }
        res
    }

    /// The Frobenius endomorphism `x ↦ x^p`.
    #[must_use]
    fn frobenius(&self) -> Self {
        self.pow(Self::characteristic())
    }
}
