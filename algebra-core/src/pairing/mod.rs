//! The optimal ate pairing, computed with Miller's algorithm over affine
//! points in the full embedding-degree field.
use crate::{
    biginteger::bits_msb_first,
    curves::{Affine, SWCurveConfig},
    fields::{ExtConfig, ExtField, Field, Fp, FpConfig},
    AlgebraError, Result,
};
use ark_std::{cfg_iter, vec::Vec};
use core::marker::PhantomData;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod twist;
pub use self::twist::*;

/// Parameters of a pairing-friendly curve with a twist of degree
/// `TargetField::DEGREE / TwistField::DEGREE`.
pub trait PairingConfig: 'static + Send + Sync + Sized {
    /// The prime field hosting G1.
    type Fp: FpConfig;
    /// The extension hosting the twist G2.
    type TwistField: ExtConfig<BaseField = Fp<Self::Fp>>;
    /// The embedding-degree extension hosting pairing values.
    type TargetField: ExtConfig<BaseField = Fp<Self::Fp>>;
    /// The curve over `Fp`.
    type G1: SWCurveConfig<BaseField = Fp<Self::Fp>>;
    /// The twist, over `TwistField`.
    type G2: SWCurveConfig<BaseField = ExtField<Self::TwistField>>;
    /// The G1 equation read over `TargetField`, where both groups meet.
    type G12: SWCurveConfig<BaseField = ExtField<Self::TargetField>>;

    /// Whether twisted coordinates are multiplied or divided by `w², w³`.
    const TWIST_TYPE: TwistType;

    /// The constant `c` in the embedding `u ↦ w^(k/d) - c`.
    const TWIST_OFFSET: u64;

    /// Whether the Miller loop ends with the two Frobenius-twisted line
    /// evaluations of the BN construction.
    const FROBENIUS_TAIL: bool;

    /// The ate loop count, scanned from its second most significant bit.
    fn ate_loop_count() -> &'static BigUint;
}

/// A point of G1.
pub type G1Affine<P> = Affine<<P as PairingConfig>::G1>;
/// A point of the twist G2.
pub type G2Affine<P> = Affine<<P as PairingConfig>::G2>;
/// A point over the embedding-degree field.
pub type G12Affine<P> = Affine<<P as PairingConfig>::G12>;
/// An element of the embedding-degree field.
pub type PairingOutput<P> = ExtField<<P as PairingConfig>::TargetField>;

/// Evaluates at `t` the line through `p1` and `p2` (the tangent when they
/// coincide).
pub fn line_function<C: SWCurveConfig>(
    p1: &Affine<C>,
    p2: &Affine<C>,
    t: &Affine<C>,
) -> Result<C::BaseField> {
    let ((x1, y1), (x2, y2), (xt, yt)) = match (p1.xy(), p2.xy(), t.xy()) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return Err(AlgebraError::IdentityInput),
    };
    let slope = if x1 != x2 {
        (y2.clone() - y1).checked_div(&(x2.clone() - x1))?
    } else if y1 == y2 {
        (x1.square().scalar_mul(3) + C::coeff_a()).checked_div(&y1.double())?
    } else {
        return Ok(xt.clone() - x1);
    };
    Ok(slope * &(xt.clone() - x1) - &(yt.clone() - y1))
}

/// A validated pairing engine for one parameter set.
///
/// Construction runs the parameter self-checks once and caches the final
/// exponent; the engine is immutable afterwards and may be shared freely.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct Pairing<P: PairingConfig> {
    final_exponent: BigUint,
    #[derivative(Debug = "ignore")]
    _config: PhantomData<P>,
}

impl<P: PairingConfig> Pairing<P> {
    /// Checks the parameter set and precomputes `(p^k - 1) / r`.
    #[tracing::instrument(level = "debug", name = "Pairing::new")]
    pub fn new() -> Result<Self> {
        ExtField::<P::TwistField>::validate_rule()?;
        ExtField::<P::TargetField>::validate_rule()?;
        let k = P::TargetField::DEGREE;
        if k % P::TwistField::DEGREE != 0 {
            return Err(AlgebraError::InvalidParameters(
                "twist degree does not divide the embedding degree",
            ));
        }
        if P::G12::coeff_a() != &ExtField::from_base(P::G1::coeff_a().clone())
            || P::G12::coeff_b() != &ExtField::from_base(P::G1::coeff_b().clone())
        {
            return Err(AlgebraError::InvalidParameters(
                "G12 does not carry the G1 curve equation",
            ));
        }

        let g1 = P::G1::generator();
        if !g1.is_on_curve() || g1.is_identity() {
            return Err(AlgebraError::InvalidParameters("G1 generator is not on the curve"));
        }
        let g2 = P::G2::generator();
        if !g2.is_on_curve() || g2.is_identity() {
            return Err(AlgebraError::InvalidParameters("G2 generator is not on the curve"));
        }
        if !twist::<P>(&g2)?.is_on_curve() {
            return Err(AlgebraError::InvalidParameters(
                "twisted G2 generator is not on the curve",
            ));
        }
        if !g1.is_in_prime_subgroup()? || !g2.is_in_prime_subgroup()? {
            return Err(AlgebraError::InvalidParameters(
                "generator order does not match the group order",
            ));
        }

        let order = P::G1::order();
        let (final_exponent, remainder) =
            (P::Fp::modulus().pow(k as u32) - BigUint::one()).div_rem(order);
        if !remainder.is_zero() {
            return Err(AlgebraError::InvalidParameters(
                "group order does not divide p^k - 1",
            ));
        }
        tracing::debug!(
            embedding_degree = k,
            loop_bits = P::ate_loop_count().bits(),
            "validated pairing parameters"
        );
        Ok(Self {
            final_exponent,
            _config: PhantomData,
        })
    }

    /// The exponent `(p^k - 1) / r` applied after the Miller loop.
    pub fn final_exponent(&self) -> &BigUint {
        &self.final_exponent
    }

    /// Reads a G1 point over the target field.
    pub fn cast_g1(p: &G1Affine<P>) -> G12Affine<P> {
        match p.xy() {
            None => Affine::identity(),
            Some((x, y)) => Affine::new_unchecked(
                ExtField::from_base(x.clone()),
                ExtField::from_base(y.clone()),
            ),
        }
    }

    /// Miller's algorithm for `f_{T,Q}(P)` with `T` the ate loop count.
    pub fn miller_loop(&self, q: &G12Affine<P>, p: &G12Affine<P>) -> Result<PairingOutput<P>> {
        let (qx, qy) = match (q.xy(), p.is_identity()) {
            (Some(q_xy), false) => q_xy,
            _ => return Ok(PairingOutput::<P>::one()),
        };
        let mut r = q.clone();
        let mut f = PairingOutput::<P>::one();
        for bit in bits_msb_first(P::ate_loop_count()).skip(1) {
            f = f.square() * &line_function(&r, &r, p)?;
            r = r.double()?;
            if bit {
                f *= &line_function(&r, q, p)?;
                r = r.add(q)?;
            }
        }

        if P::FROBENIUS_TAIL {
            let (q1x, q1y) = (qx.frobenius(), qy.frobenius());
            let neg_q2 = Affine::new_unchecked(q1x.frobenius(), -q1y.frobenius());
            let q1 = Affine::new_unchecked(q1x, q1y);
            f *= &line_function(&r, &q1, p)?;
            r = r.add(&q1)?;
            f *= &line_function(&r, &neg_q2, p)?;
        }
        Ok(f)
    }

    /// Raises a Miller-loop output into the order-`r` subgroup.
    pub fn final_exponentiation(&self, f: &PairingOutput<P>) -> PairingOutput<P> {
        tracing::trace!(bits = self.final_exponent.bits(), "final exponentiation");
        f.pow(&self.final_exponent)
    }

    fn prepare(q: &G2Affine<P>, p: &G1Affine<P>) -> Result<(G12Affine<P>, G12Affine<P>)> {
        if !q.is_on_curve() || !p.is_on_curve() {
            return Err(AlgebraError::NotOnCurve);
        }
        Ok((twist::<P>(q)?, Self::cast_g1(p)))
    }

    /// Computes `e(Q, P)` for `Q` on the twist and `P` in G1.
    pub fn pairing(&self, q: &G2Affine<P>, p: &G1Affine<P>) -> Result<PairingOutput<P>> {
        let _span = tracing::debug_span!("pairing").entered();
        let (q, p) = Self::prepare(q, p)?;
        let f = self.miller_loop(&q, &p)?;
        Ok(self.final_exponentiation(&f))
    }

    /// Computes `∏ e(Qᵢ, Pᵢ)` with a single final exponentiation.
    pub fn multi_pairing(&self, pairs: &[(G2Affine<P>, G1Affine<P>)]) -> Result<PairingOutput<P>> {
        let _span = tracing::debug_span!("multi_pairing", pairs = pairs.len()).entered();
        let prepared = pairs
            .iter()
            .map(|(q, p)| Self::prepare(q, p))
            .collect::<Result<Vec<_>>>()?;
        let loops = cfg_iter!(prepared)
            .map(|(q, p)| self.miller_loop(q, p))
            .collect::<Result<Vec<_>>>()?;
        let f: PairingOutput<P> = loops.iter().product();
        Ok(self.final_exponentiation(&f))
    }
}
