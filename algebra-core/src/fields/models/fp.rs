use crate::{
    biginteger::parse_biguint, fields::Field, AlgebraError, CanonicalDeserialize,
    CanonicalSerialize, Compress, Result, SerializationError, Valid, Validate,
};
use ark_std::{
    io::{Read, Write},
    rand::{
        distributions::{Distribution, Standard},
        Rng,
    },
};
use core::{
    fmt,
    marker::PhantomData,
    ops::{AddAssign, MulAssign, Neg, SubAssign},
    str::FromStr,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// The parameters of a prime field.
pub trait FpConfig: 'static + Send + Sync + Sized {
    /// The prime modulus `p`.
    fn modulus() -> &'static BigUint;
}

/// An element of the prime field `Z/pZ`, always held in `[0, p)`.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Hash(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Debug(bound = "")
)]
pub struct Fp<P> {
    value: BigUint,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    _config: PhantomData<P>,
}

impl<P: FpConfig> Fp<P> {
    /// Reduces `value` modulo `p`.
    pub fn new(value: BigUint) -> Self {
        let modulus = P::modulus();
        let value = if &value < modulus {
            value
        } else {
            value % modulus
        };
        Self {
            value,
            _config: PhantomData,
        }
    }

    /// Maps a signed integer into the field; negative values wrap around.
    pub fn from_bigint(value: &BigInt) -> Self {
        let modulus = BigInt::from_biguint(Sign::Plus, P::modulus().clone());
        let (_, reduced) = value.mod_floor(&modulus).into_parts();
        Self::new(reduced)
    }

    /// The canonical residue in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Consumes the element, returning its canonical residue.
    pub fn into_biguint(self) -> BigUint {
        self.value
    }

    /// The modulus of this field.
    pub fn modulus() -> &'static BigUint {
        P::modulus()
    }

    fn byte_len() -> usize {
        ((P::modulus().bits() + 7) / 8) as usize
    }
}

impl<P: FpConfig> Zero for Fp<P> {
    #[inline]
    fn zero() -> Self {
        Self {
            value: BigUint::zero(),
            _config: PhantomData,
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl<P: FpConfig> One for Fp<P> {
    #[inline]
    fn one() -> Self {
        Self::new(BigUint::one())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.value.is_one()
    }
}

impl<P: FpConfig> Field for Fp<P> {
    #[inline]
    fn characteristic() -> &'static BigUint {
        P::modulus()
    }

    #[inline]
    fn extension_degree() -> usize {
        1
    }

    /// Extended Euclid over the integers: `x·a + y·p = gcd(a, p)`.
    fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let modulus = BigInt::from_biguint(Sign::Plus, P::modulus().clone());
        let a = BigInt::from_biguint(Sign::Plus, self.value.clone());
        let egcd = a.extended_gcd(&modulus);
        // A composite modulus leaves non-units behind.
        if !egcd.gcd.is_one() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::from_bigint(&egcd.x))
    }

    #[inline]
    fn pow(&self, exp: &BigUint) -> Self {
        Self {
            value: self.value.modpow(exp, P::modulus()),
            _config: PhantomData,
        }
    }

    #[inline]
    fn frobenius(&self) -> Self {
        self.clone()
    }
}

impl<'a, P: FpConfig> AddAssign<&'a Self> for Fp<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.value += &other.value;
        if &self.value >= P::modulus() {
            self.value -= P::modulus();
        }
    }
}

impl<'a, P: FpConfig> SubAssign<&'a Self> for Fp<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        if self.value < other.value {
            self.value += P::modulus();
        }
        self.value -= &other.value;
    }
}

impl<'a, P: FpConfig> MulAssign<&'a Self> for Fp<P> {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        self.value = (&self.value * &other.value) % P::modulus();
    }
}

impl_field_ops_from_ref!(Fp, FpConfig);

impl<P: FpConfig> Neg for Fp<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            self
        } else {
            Self {
                value: P::modulus() - self.value,
                _config: PhantomData,
            }
        }
    }
}

impl<P: FpConfig> From<u64> for Fp<P> {
    fn from(other: u64) -> Self {
        Self::new(BigUint::from(other))
    }
}

impl<P: FpConfig> From<i64> for Fp<P> {
    fn from(other: i64) -> Self {
        Self::from_bigint(&BigInt::from(other))
    }
}

impl<P: FpConfig> From<BigUint> for Fp<P> {
    fn from(other: BigUint) -> Self {
        Self::new(other)
    }
}

impl<P: FpConfig> FromStr for Fp<P> {
    type Err = AlgebraError;

    /// Parses a decimal or `0x`-prefixed hexadecimal literal and reduces it.
    fn from_str(s: &str) -> Result<Self> {
        parse_biguint(s).map(Self::new)
    }
}

impl<P: FpConfig> fmt::Display for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<P: FpConfig> Distribution<Fp<P>> for Standard {
    /// Samples 128 bits beyond the modulus width so the reduction bias is
    /// negligible.
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp<P> {
        let mut bytes = vec![0u8; Fp::<P>::byte_len() + 16];
        rng.fill_bytes(&mut bytes);
        Fp::new(BigUint::from_bytes_le(&bytes))
    }
}

impl<P: FpConfig> CanonicalSerialize for Fp<P> {
    /// Fixed-width little-endian, as wide as the modulus.
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        _compress: Compress,
    ) -> core::result::Result<(), SerializationError> {
        let mut bytes = self.value.to_bytes_le();
        bytes.resize(Self::byte_len(), 0);
        writer.write_all(&bytes)?;
        Ok(())
    }

    fn serialized_size(&self, _compress: Compress) -> usize {
        Self::byte_len()
    }
}

impl<P: FpConfig> Valid for Fp<P> {
    fn check(&self) -> core::result::Result<(), SerializationError> {
        if &self.value < P::modulus() {
            Ok(())
        } else {
            Err(SerializationError::InvalidData)
        }
    }
}

impl<P: FpConfig> CanonicalDeserialize for Fp<P> {
    /// Rejects non-canonical encodings, i.e. residues not below `p`.
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        _compress: Compress,
        _validate: Validate,
    ) -> core::result::Result<Self, SerializationError> {
        let mut bytes = vec![0u8; Self::byte_len()];
        reader.read_exact(&mut bytes)?;
        let value = BigUint::from_bytes_le(&bytes);
        if &value >= P::modulus() {
            return Err(SerializationError::InvalidData);
        }
        Ok(Self {
            value,
            _config: PhantomData,
        })
    }
}
