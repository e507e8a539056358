use ecpair_core::{test_rng, Field, One, UniformRand};

use crate::{
    bls12_381::{Fq, Fq12, Fq2, Fr},
    tests::fields::{field_serialization_test, field_test, frobenius_test},
};

#[test]
fn test_fr() {
    let mut rng = test_rng();
    let a: Fr = UniformRand::rand(&mut rng);
    let b: Fr = UniformRand::rand(&mut rng);
    field_test(a, b);
    field_serialization_test::<Fr>();
}

#[test]
fn test_fq() {
    let mut rng = test_rng();
    let a: Fq = UniformRand::rand(&mut rng);
    let b: Fq = UniformRand::rand(&mut rng);
    field_test(a, b);
    field_serialization_test::<Fq>();
}

#[test]
fn test_fq2() {
    let mut rng = test_rng();
    let a: Fq2 = UniformRand::rand(&mut rng);
    let b: Fq2 = UniformRand::rand(&mut rng);
    field_test(a, b);
    frobenius_test::<Fq2>(2);
    field_serialization_test::<Fq2>();
    assert_eq!(Fq2::generator().square(), -Fq2::one());
}

#[test]
fn test_fq12() {
    let mut rng = test_rng();
    let a: Fq12 = UniformRand::rand(&mut rng);
    let b: Fq12 = UniformRand::rand(&mut rng);
    field_test(a, b);
    field_serialization_test::<Fq12>();
}

#[test]
fn test_fq12_embeds_fq2() {
    // (w⁶ - 1)² = -1, so u ↦ w⁶ - 1 respects u² = -1.
    let w6 = Fq12::generator().pow(&6u32.into());
    let u = w6 - &Fq12::one();
    assert_eq!(u.square(), -Fq12::one());
    assert!(Fq12::validate_rule().is_ok());
}
