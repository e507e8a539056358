use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ecpair_core::{test_rng, AlgebraError, Field, UniformRand};
use ecpair_curves::bn254::{Fr, G1Affine, G2Affine, Parameters, BN254};
use num_bigint::BigUint;

use super::{
    prepare_inputs, prepare_verifying_key, verify, verify_proof, Proof, VerifierError,
    VerifyingKey,
};

struct Instance {
    vk: VerifyingKey<Parameters>,
    proof: Proof<Parameters>,
    inputs: Vec<BigUint>,
}

/// Builds a key and a proof that satisfy the verification equation by
/// choosing the trapdoor directly: with `A = s·G`, `B = t·H` and
/// `vk_x = v·G`, the proof passes iff `C = (ts - gamma·v - alpha·beta)/delta`.
fn honest_instance(num_inputs: usize) -> Instance {
    let mut rng = test_rng();
    let g = G1Affine::generator();
    let h = G2Affine::generator();
    let g1 = |k: &Fr| g.multiply(k.value()).unwrap();
    let g2 = |k: &Fr| h.multiply(k.value()).unwrap();

    let alpha = Fr::rand(&mut rng);
    let beta = Fr::rand(&mut rng);
    let gamma = Fr::rand(&mut rng);
    let delta = Fr::rand(&mut rng);
    let abc: Vec<Fr> = (0..=num_inputs).map(|_| Fr::rand(&mut rng)).collect();
    let inputs: Vec<Fr> = (0..num_inputs).map(|_| Fr::rand(&mut rng)).collect();

    let v = inputs
        .iter()
        .zip(&abc[1..])
        .fold(abc[0].clone(), |acc, (x, k)| acc + &(x.clone() * k));
    let s = Fr::rand(&mut rng);
    let t = Fr::rand(&mut rng);
    let c = (t.clone() * &s - &(gamma.clone() * &v) - &(alpha.clone() * &beta))
        .checked_div(&delta)
        .unwrap();

    Instance {
        vk: VerifyingKey {
            alpha_g1: g1(&alpha),
            beta_g2: g2(&beta),
            gamma_g2: g2(&gamma),
            delta_g2: g2(&delta),
            gamma_abc_g1: abc.iter().map(g1).collect(),
        },
        proof: Proof {
            a: g1(&s),
            b: g2(&t),
            c: g1(&c),
        },
        inputs: inputs.into_iter().map(Fr::into_biguint).collect(),
    }
}

#[test]
fn verify_accepts_honest_proof() {
    let Instance { vk, proof, inputs } = honest_instance(2);
    assert!(verify(&BN254, &vk, &proof, &inputs).unwrap());

    let pvk = prepare_verifying_key(&BN254, &vk).unwrap();
    assert!(verify_proof(&BN254, &pvk, &proof, &inputs).unwrap());
}

#[test]
fn verify_rejects_tampered_proof() {
    let Instance { vk, proof, inputs } = honest_instance(1);

    let mut bad_proof = proof.clone();
    bad_proof.c = bad_proof.c.add(&G1Affine::generator()).unwrap();
    assert!(!verify(&BN254, &vk, &bad_proof, &inputs).unwrap());

    let mut bad_inputs = inputs.clone();
    bad_inputs[0] += 1u32;
    assert!(!verify(&BN254, &vk, &proof, &bad_inputs).unwrap());
}

#[test]
fn input_length_is_checked() {
    let Instance { vk, proof, inputs } = honest_instance(2);
    assert_eq!(
        verify(&BN254, &vk, &proof, &inputs[..1]),
        Err(VerifierError::InputLengthMismatch {
            expected: 2,
            found: 1
        })
    );
    assert!(prepare_inputs(&vk, &[]).is_err());
}

#[test]
fn off_curve_points_are_rejected() {
    let Instance { vk, mut proof, inputs } = honest_instance(0);
    let (x, y) = proof
        .a
        .xy()
        .map(|(x, y)| (x.clone(), y.clone()))
        .unwrap();
    proof.a = G1Affine::new_unchecked(x, y.double());
    assert_eq!(
        verify(&BN254, &vk, &proof, &inputs),
        Err(VerifierError::Algebra(AlgebraError::NotOnCurve))
    );
}

#[test]
fn serialization() {
    let Instance { vk, proof, .. } = honest_instance(3);

    let mut bytes = Vec::new();
    proof.serialize_compressed(&mut bytes).unwrap();
    assert_eq!(bytes.len(), proof.compressed_size());
    assert_eq!(Proof::deserialize_compressed(&bytes[..]).unwrap(), proof);

    let mut bytes = Vec::new();
    vk.serialize_compressed(&mut bytes).unwrap();
    assert_eq!(bytes.len(), vk.compressed_size());
    let decoded = VerifyingKey::<Parameters>::deserialize_compressed(&bytes[..]).unwrap();
    assert_eq!(decoded, vk);
    assert_eq!(decoded.gamma_abc_g1.len(), 4);
}
