use crate::{
    fields::{Field, ReductionRule},
    AlgebraError, CanonicalDeserialize, CanonicalSerialize, Compress, Result, SerializationError,
    Valid, Validate,
};
use ark_std::{
    io::{Read, Write},
    rand::{
        distributions::{Distribution, Standard},
        Rng,
    },
    vec::Vec,
    UniformRand,
};
use core::{
    fmt,
    marker::PhantomData,
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};
use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// The parameters of an extension `BaseField[u]/(f(u))`.
pub trait ExtConfig: 'static + Send + Sync + Sized {
    /// The field this one extends; may itself be an extension.
    type BaseField: Field;

    /// The degree of `f`.
    const DEGREE: usize;

    /// How products are reduced modulo `f`.
    type Rule: ReductionRule;

    /// The non-leading coefficients of the monic modulus `f`, lowest first.
    fn modulus_coeffs() -> &'static [Self::BaseField];
}

/// An element of `P::BaseField[u]/(f(u))`, held as exactly `P::DEGREE`
/// coefficients, lowest degree first.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: ExtConfig"),
    Hash(bound = "P: ExtConfig"),
    PartialEq(bound = "P: ExtConfig"),
    Eq(bound = "P: ExtConfig"),
    Debug(bound = "P: ExtConfig")
)]
pub struct ExtField<P: ExtConfig> {
    coeffs: Vec<P::BaseField>,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    _config: PhantomData<P>,
}

impl<P: ExtConfig> ExtField<P> {
    /// Builds an element from its coefficients, lowest degree first.
    pub fn new(coeffs: Vec<P::BaseField>) -> Result<Self> {
        if coeffs.len() != P::DEGREE {
            return Err(AlgebraError::CoefficientCount {
                expected: P::DEGREE,
                found: coeffs.len(),
            });
        }
        Ok(Self::from_coeffs_unchecked(coeffs))
    }

    fn from_coeffs_unchecked(coeffs: Vec<P::BaseField>) -> Self {
        debug_assert_eq!(coeffs.len(), P::DEGREE);
        Self {
            coeffs,
            _config: PhantomData,
        }
    }

    /// Embeds a base-field element as the constant coefficient.
    pub fn from_base(c0: P::BaseField) -> Self {
        let mut coeffs = vec![P::BaseField::zero(); P::DEGREE];
        coeffs[0] = c0;
        Self::from_coeffs_unchecked(coeffs)
    }

    /// The element `u` generating the extension.
    pub fn generator() -> Self {
        let mut coeffs = vec![P::BaseField::zero(); P::DEGREE];
        if P::DEGREE > 1 {
            coeffs[1] = P::BaseField::one();
        } else {
            coeffs[0] = -P::modulus_coeffs()[0].clone();
        }
        Self::from_coeffs_unchecked(coeffs)
    }

    /// The coefficients, lowest degree first.
    pub fn coeffs(&self) -> &[P::BaseField] {
        &self.coeffs
    }

    /// Consumes the element, returning its coefficients.
    pub fn into_coeffs(self) -> Vec<P::BaseField> {
        self.coeffs
    }

    /// Multiplies every coefficient by a base-field element.
    #[must_use]
    pub fn mul_by_base(&self, element: &P::BaseField) -> Self {
        Self::from_coeffs_unchecked(
            self.coeffs
                .iter()
                .map(|c| c.clone() * element)
                .collect(),
        )
    }

    /// Checks that the configured rule agrees with the modulus.
    pub fn validate_rule() -> Result<()> {
        let modulus = P::modulus_coeffs();
        if modulus.len() != P::DEGREE {
            return Err(AlgebraError::InvalidParameters(
                "modulus has the wrong number of coefficients",
            ));
        }
        if !P::Rule::supports(modulus) {
            return Err(AlgebraError::InvalidParameters(
                "reduction rule does not apply to this modulus",
            ));
        }
        Ok(())
    }
}

/// Degree of a dense polynomial, treating the zero polynomial as degree 0.
fn degree<F: Field>(poly: &[F]) -> usize {
    poly.iter().rposition(|c| !c.is_zero()).unwrap_or(0)
}

/// Quotient of the long division `a / b`, dropping the remainder.
fn poly_rounded_div<F: Field>(a: &[F], b: &[F]) -> Result<Vec<F>> {
    let deg_a = degree(a);
    let deg_b = degree(b);
    let mut temp = a.to_vec();
    let mut quotient = vec![F::zero(); a.len()];
    if deg_a < deg_b {
        return Ok(quotient);
    }
    let lead_inv = b[deg_b].inverse()?;
    for i in (0..=deg_a - deg_b).rev() {
        let q = temp[deg_b + i].clone() * &lead_inv;
        for (c, b_c) in b[..=deg_b].iter().enumerate() {
            temp[c + i] -= q.clone() * b_c;
        }
        quotient[i] += q;
    }
    Ok(quotient)
}

impl<P: ExtConfig> Zero for ExtField<P> {
    fn zero() -> Self {
        Self::from_coeffs_unchecked(vec![P::BaseField::zero(); P::DEGREE])
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }
}

impl<P: ExtConfig> One for ExtField<P> {
    fn one() -> Self {
        Self::from_base(P::BaseField::one())
    }

    fn is_one(&self) -> bool {
        self.coeffs[0].is_one() && self.coeffs[1..].iter().all(Zero::is_zero)
    }
}

impl<P: ExtConfig> Field for ExtField<P> {
    fn characteristic() -> &'static BigUint {
        P::BaseField::characteristic()
    }

    fn extension_degree() -> usize {
        P::DEGREE * P::BaseField::extension_degree()
    }

    fn double(&self) -> Self {
        Self::from_coeffs_unchecked(self.coeffs.iter().map(Field::double).collect())
    }

    /// Extended Euclid over `BaseField[u]`: track `lm·self ≡ low (mod f)`
    /// until `low` is a nonzero constant, then scale by its inverse.
    fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let d = P::DEGREE;
        let zero = P::BaseField::zero();
        let mut lm = vec![zero.clone(); d + 1];
        lm[0] = P::BaseField::one();
        let mut hm = vec![zero.clone(); d + 1];
        let mut low = self.coeffs.clone();
        low.push(zero.clone());
        let mut high = P::modulus_coeffs().to_vec();
        high.push(P::BaseField::one());

        while degree(&low) > 0 {
            let r = poly_rounded_div(&high, &low)?;
            let mut nm = hm.clone();
            let mut new = high.clone();
            for i in 0..=d {
                for j in 0..=(d - i) {
                    nm[i + j] -= lm[i].clone() * &r[j];
                    new[i + j] -= low[i].clone() * &r[j];
                }
            }
            hm = core::mem::replace(&mut lm, nm);
            high = core::mem::replace(&mut low, new);
        }

        let scale = low[0].inverse()?;
        lm.truncate(d);
        Ok(Self::from_coeffs_unchecked(lm).mul_by_base(&scale))
    }
}

impl<'a, P: ExtConfig> AddAssign<&'a Self> for ExtField<P> {
    fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.coeffs.iter_mut().zip_eq(&other.coeffs) {
            *a += b;
        }
    }
}

impl<'a, P: ExtConfig> SubAssign<&'a Self> for ExtField<P> {
    fn sub_assign(&mut self, other: &Self) {
        for (a, b) in self.coeffs.iter_mut().zip_eq(&other.coeffs) {
            *a -= b;
        }
    }
}

impl<'a, P: ExtConfig> MulAssign<&'a Self> for ExtField<P> {
    fn mul_assign(&mut self, other: &Self) {
        self.coeffs = P::Rule::mul(&self.coeffs, &other.coeffs, P::modulus_coeffs());
    }
}

impl_field_ops_from_ref!(ExtField, ExtConfig);

impl<P: ExtConfig> Neg for ExtField<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_coeffs_unchecked(self.coeffs.into_iter().map(Neg::neg).collect())
    }
}

impl<P: ExtConfig> From<u64> for ExtField<P> {
    fn from(other: u64) -> Self {
        Self::from_base(other.into())
    }
}

impl<P: ExtConfig> From<i64> for ExtField<P> {
    fn from(other: i64) -> Self {
        Self::from_base(other.into())
    }
}

impl<P: ExtConfig> fmt::Display for ExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.coeffs.iter().join(", "))
    }
}

impl<P: ExtConfig> Distribution<ExtField<P>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ExtField<P> {
        ExtField::from_coeffs_unchecked(
            (0..P::DEGREE)
                .map(|_| P::BaseField::rand(rng))
                .collect(),
        )
    }
}

impl<P: ExtConfig> CanonicalSerialize for ExtField<P> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> core::result::Result<(), SerializationError> {
        for c in &self.coeffs {
            c.serialize_with_mode(&mut writer, compress)?;
        }
        Ok(())
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.coeffs
            .iter()
            .map(|c| c.serialized_size(compress))
            .sum()
    }
}

impl<P: ExtConfig> Valid for ExtField<P> {
    fn check(&self) -> core::result::Result<(), SerializationError> {
        if self.coeffs.len() != P::DEGREE {
            return Err(SerializationError::InvalidData);
        }
        self.coeffs.iter().try_for_each(Valid::check)
    }
}

impl<P: ExtConfig> CanonicalDeserialize for ExtField<P> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> core::result::Result<Self, SerializationError> {
        let coeffs = (0..P::DEGREE)
            .map(|_| P::BaseField::deserialize_with_mode(&mut reader, compress, validate))
            .collect::<core::result::Result<Vec<_>, _>>()?;
        Ok(Self::from_coeffs_unchecked(coeffs))
    }
}
