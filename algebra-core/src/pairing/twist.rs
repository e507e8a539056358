use crate::{
    curves::Affine,
    fields::{ExtConfig, ExtField, Field, Fp},
    pairing::{G12Affine, G2Affine, PairingConfig},
    Result,
};
use num_bigint::BigUint;
use num_traits::Zero;

/// How the twisted coordinates are rescaled by powers of `w`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TwistType {
    /// `(x, y) ↦ (x·w², y·w³)`.
    D,
    /// `(x, y) ↦ (x/w², y/w³)`.
    M,
}

/// Embeds an element of the twist field into the target field.
///
/// With `d` the twist degree and `k` the target degree, the generator `u` is
/// sent to `w^(k/d) - c`, where `c` is [`PairingConfig::TWIST_OFFSET`], and
/// each power of `u` is expanded binomially.
pub fn embed<P: PairingConfig>(
    element: &ExtField<P::TwistField>,
) -> Result<ExtField<P::TargetField>> {
    let step = P::TargetField::DEGREE / P::TwistField::DEGREE;
    let minus_c = -Fp::<P::Fp>::from(P::TWIST_OFFSET);
    let mut out = vec![Fp::<P::Fp>::zero(); P::TargetField::DEGREE];
    for (i, c_i) in element.coeffs().iter().enumerate() {
        if c_i.is_zero() {
            continue;
        }
        let mut binomial = 1u64;
        for j in 0..=i {
            let shift = minus_c.pow(&BigUint::from((i - j) as u64));
            out[j * step] += (c_i.clone() * &shift).scalar_mul(binomial);
            binomial = binomial * (i - j) as u64 / (j + 1) as u64;
        }
    }
    ExtField::new(out)
}

/// Maps a point on the twist into the curve over the target field.
pub fn twist<P: PairingConfig>(point: &G2Affine<P>) -> Result<G12Affine<P>> {
    let (x, y) = match point.xy() {
        None => return Ok(Affine::identity()),
        Some(xy) => xy,
    };
    let w = ExtField::<P::TargetField>::generator();
    let w2 = w.square();
    let w3 = w2.clone() * &w;
    let (x, y) = (embed::<P>(x)?, embed::<P>(y)?);
    let (x, y) = match P::TWIST_TYPE {
        TwistType::D => (x * &w2, y * &w3),
        TwistType::M => (x.checked_div(&w2)?, y.checked_div(&w3)?),
    };
    Ok(Affine::new_unchecked(x, y))
}
