use crate::{
    biginteger::bits_msb_first, curves::SWCurveConfig, fields::Field, AlgebraError,
    CanonicalDeserialize, CanonicalSerialize, Compress, Result, SerializationError, Valid,
    Validate,
};
use ark_std::io::{Read, Write};
use core::{fmt, ops::Neg};
use num_bigint::BigUint;
use num_traits::Zero;

/// A point on a short Weierstrass curve, in affine coordinates.
///
/// The identity has no coordinates, so a flagged point carrying stale
/// coordinates cannot be represented.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: SWCurveConfig"),
    PartialEq(bound = "P: SWCurveConfig"),
    Eq(bound = "P: SWCurveConfig"),
    Debug(bound = "P: SWCurveConfig"),
    Hash(bound = "P: SWCurveConfig")
)]
pub enum Affine<P: SWCurveConfig> {
    /// The point at infinity.
    Identity,
    /// A finite point `(x, y)`.
    Point {
        /// The x-coordinate.
        x: P::BaseField,
        /// The y-coordinate.
        y: P::BaseField,
    },
}

impl<P: SWCurveConfig> Affine<P> {
    /// Builds a finite point, checking the curve equation.
    pub fn new(x: P::BaseField, y: P::BaseField) -> Result<Self> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(AlgebraError::NotOnCurve)
        }
    }

    /// Builds a finite point without checking the curve equation.
    pub fn new_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        Affine::Point { x, y }
    }

    /// The point at infinity.
    pub fn identity() -> Self {
        Affine::Identity
    }

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        matches!(self, Affine::Identity)
    }

    /// The generator of the prime-order subgroup.
    pub fn generator() -> Self {
        P::generator()
    }

    /// The coordinates of a finite point.
    pub fn xy(&self) -> Option<(&P::BaseField, &P::BaseField)> {
        match self {
            Affine::Identity => None,
            Affine::Point { x, y } => Some((x, y)),
        }
    }

    /// Checks `y² = x³ + a·x + b`. The identity is always on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Affine::Identity => true,
            Affine::Point { x, y } => {
                let rhs = x.square() * x + &(P::coeff_a().clone() * x) + P::coeff_b();
                y.square() == rhs
            }
        }
    }

    /// Returns `2·self` using the tangent at `self`.
    pub fn double(&self) -> Result<Self> {
        let (x, y) = match self {
            Affine::Identity => return Ok(Affine::Identity),
            Affine::Point { x, y } => (x, y),
        };
        if y.is_zero() {
            return Err(AlgebraError::DegenerateDoubling);
        }
        let lambda = (x.square().scalar_mul(3) + P::coeff_a()).checked_div(&y.double())?;
        let new_x = lambda.square() - &x.double();
        let new_y = -(lambda.clone() * &new_x) + &(lambda * x) - y;
        Ok(Self::new_unchecked(new_x, new_y))
    }

    /// Returns `self + other` by the chord-and-tangent rule.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let ((x1, y1), (x2, y2)) = match (self, other) {
            (Affine::Identity, _) => return Ok(other.clone()),
            (_, Affine::Identity) => return Ok(self.clone()),
            (Affine::Point { x: x1, y: y1 }, Affine::Point { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };
        if x1 == x2 {
            return if y1 == y2 {
                self.double()
            } else {
                Ok(Affine::Identity)
            };
        }
        let lambda = (y2.clone() - y1).checked_div(&(x2.clone() - x1))?;
        let new_x = lambda.square() - x1 - x2;
        let new_y = -(lambda.clone() * &new_x) + &(lambda.clone() * x1) - y1;
        debug_assert_eq!(
            new_y,
            -(lambda.clone() * &new_x) + &(lambda * x2) - y2,
            "chord slope disagrees between endpoints"
        );
        Ok(Self::new_unchecked(new_x, new_y))
    }

    /// Returns `n·self` by double-and-add over the bits of `n`, most
    /// significant first.
    pub fn multiply(&self, n: &BigUint) -> Result<Self> {
        let mut res = Affine::Identity;
        for bit in bits_msb_first(n) {
            res = res.double()?;
            if bit {
                res = res.add(self)?;
            }
        }
        Ok(res)
    }

    /// Alias of [`Self::multiply`].
    pub fn mul_bigint(&self, n: &BigUint) -> Result<Self> {
        self.multiply(n)
    }

    /// Whether `order · self` is the identity.
    pub fn is_in_prime_subgroup(&self) -> Result<bool> {
        Ok(self.multiply(P::order())?.is_identity())
    }
}

impl<P: SWCurveConfig> Neg for Affine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Affine::Identity => Affine::Identity,
            Affine::Point { x, y } => Affine::Point { x, y: -y },
        }
    }
}

impl<P: SWCurveConfig> fmt::Display for Affine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affine::Identity => write!(f, "Affine(infinity)"),
            Affine::Point { x, y } => write!(f, "Affine(x={}, y={})", x, y),
        }
    }
}

/// The leading byte of a serialized point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SWFlags {
    /// A finite point follows.
    Point,
    /// The point at infinity; the coordinates are zero padding.
    Infinity,
}

impl SWFlags {
    /// The byte encoding of the flag.
    pub fn u8_bitmask(self) -> u8 {
        match self {
            SWFlags::Point => 0,
            SWFlags::Infinity => 1,
        }
    }

    /// Decodes a flag byte.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(SWFlags::Point),
            1 => Some(SWFlags::Infinity),
            _ => None,
        }
    }
}

impl<P: SWCurveConfig> CanonicalSerialize for Affine<P> {
    /// A flag byte followed by `x ‖ y`; compressed and uncompressed modes
    /// share the encoding.
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> core::result::Result<(), SerializationError> {
        match self {
            Affine::Identity => {
                writer.write_all(&[SWFlags::Infinity.u8_bitmask()])?;
                let zero = P::BaseField::zero();
                zero.serialize_with_mode(&mut writer, compress)?;
                zero.serialize_with_mode(&mut writer, compress)
            }
            Affine::Point { x, y } => {
                writer.write_all(&[SWFlags::Point.u8_bitmask()])?;
                x.serialize_with_mode(&mut writer, compress)?;
                y.serialize_with_mode(&mut writer, compress)
            }
        }
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        1 + 2 * P::BaseField::zero().serialized_size(compress)
    }
}

impl<P: SWCurveConfig> Valid for Affine<P> {
    fn check(&self) -> core::result::Result<(), SerializationError> {
        if self.is_on_curve() {
            Ok(())
        } else {
            Err(SerializationError::InvalidData)
        }
    }
}

impl<P: SWCurveConfig> CanonicalDeserialize for Affine<P> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> core::result::Result<Self, SerializationError> {
        let mut flag = [0u8; 1];
        reader.read_exact(&mut flag)?;
        let flag = SWFlags::from_u8(flag[0]).ok_or(SerializationError::UnexpectedFlags)?;
        let x = P::BaseField::deserialize_with_mode(&mut reader, compress, validate)?;
        let y = P::BaseField::deserialize_with_mode(&mut reader, compress, validate)?;
        if validate == Validate::Yes
            && flag == SWFlags::Infinity
            && !(x.is_zero() && y.is_zero())
        {
            return Err(SerializationError::InvalidData);
        }
        let point = match flag {
            SWFlags::Infinity => Affine::Identity,
            SWFlags::Point => Affine::new_unchecked(x, y),
        };
        if validate == Validate::Yes {
            point.check()?;
        }
        Ok(point)
    }
}
