use ecpair_core::{test_rng, Field, UniformRand};

use crate::{
    mnt6_753::{fq3::NONRESIDUE, Fq, Fq3, Fr},
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
fn test_fq3() {
    let mut rng = test_rng();
    let a: Fq3 = UniformRand::rand(&mut rng);
    let b: Fq3 = UniformRand::rand(&mut rng);
    field_test(a, b);
    frobenius_test::<Fq3>(3);
    field_serialization_test::<Fq3>();
    assert!(Fq3::validate_rule().is_ok());
}

#[test]
fn test_fq3_generator() {
    let u = Fq3::generator();
    assert_eq!(u.pow(&3u32.into()), Fq3::from(NONRESIDUE));
}
