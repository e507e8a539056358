use ecpair_core::{
    pairing::{G1Affine, Pairing, PairingConfig},
    One,
};
use itertools::Itertools;
use num_bigint::BigUint;

use super::{PreparedVerifyingKey, Proof, Result, VerifierError, VerifyingKey};

/// Prepare the verifying key `vk` for use in proof verification.
pub fn prepare_verifying_key<P: PairingConfig>(
    engine: &Pairing<P>,
    vk: &VerifyingKey<P>,
) -> Result<PreparedVerifyingKey<P>> {
    Ok(PreparedVerifyingKey {
        vk: vk.clone(),
        alpha_g1_beta_g2: engine.pairing(&vk.beta_g2, &vk.alpha_g1)?,
    })
}

/// Prepare proof inputs for use with [`verify_proof_with_prepared_inputs`],
/// computing `vk_x = gamma_abc[0] + Σ gamma_abc[i + 1]·inputs[i]`.
pub fn prepare_inputs<P: PairingConfig>(
    vk: &VerifyingKey<P>,
    public_inputs: &[BigUint],
) -> Result<G1Affine<P>> {
    if (public_inputs.len() + 1) != vk.gamma_abc_g1.len() {
        return Err(VerifierError::InputLengthMismatch {
            expected: vk.gamma_abc_g1.len().saturating_sub(1),
            found: public_inputs.len(),
        });
    }

    let mut g_ic = vk.gamma_abc_g1[0].clone();
    for (i, b) in public_inputs.iter().zip_eq(vk.gamma_abc_g1.iter().skip(1)) {
        g_ic = g_ic.add(&b.multiply(i)?)?;
    }

    Ok(g_ic)
}

/// Verify a proof `proof` against the verification key `vk`, with respect to
/// the instance `public_inputs`: accept iff
/// `e(B, A)·e(gamma, -vk_x)·e(delta, -C)·e(beta, -alpha) = 1`.
pub fn verify<P: PairingConfig>(
    engine: &Pairing<P>,
    vk: &VerifyingKey<P>,
    proof: &Proof<P>,
    public_inputs: &[BigUint],
) -> Result<bool> {
    let vk_x = prepare_inputs(vk, public_inputs)?;
    let product = engine.multi_pairing(&[
        (proof.b.clone(), proof.a.clone()),
        (vk.gamma_g2.clone(), -vk_x),
        (vk.delta_g2.clone(), -proof.c.clone()),
        (vk.beta_g2.clone(), -vk.alpha_g1.clone()),
    ])?;
    let accepted = product.is_one();
    tracing::debug!(accepted, inputs = public_inputs.len(), "groth16 verification");
    Ok(accepted)
}

/// Verify a proof `proof` against the prepared verification key `pvk` and
/// prepared public inputs. This should be preferred over [`verify_proof`] if
/// the same key checks many proofs.
pub fn verify_proof_with_prepared_inputs<P: PairingConfig>(
    engine: &Pairing<P>,
    pvk: &PreparedVerifyingKey<P>,
    proof: &Proof<P>,
    prepared_inputs: &G1Affine<P>,
) -> Result<bool> {
    let qap = engine.multi_pairing(&[
        (proof.b.clone(), proof.a.clone()),
        (pvk.vk.gamma_g2.clone(), -prepared_inputs.clone()),
        (pvk.vk.delta_g2.clone(), -proof.c.clone()),
    ])?;
    let accepted = qap == pvk.alpha_g1_beta_g2;
    tracing::debug!(accepted, "groth16 verification with prepared key");
    Ok(accepted)
}

/// Verify a proof `proof` against the prepared verification key `pvk`,
/// with respect to the instance `public_inputs`.
pub fn verify_proof<P: PairingConfig>(
    engine: &Pairing<P>,
    pvk: &PreparedVerifyingKey<P>,
    proof: &Proof<P>,
    public_inputs: &[BigUint],
) -> Result<bool> {
    let prepared_inputs = prepare_inputs(&pvk.vk, public_inputs)?;
    verify_proof_with_prepared_inputs(engine, pvk, proof, &prepared_inputs)
}
