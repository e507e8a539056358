use ecpair_core::{test_rng, UniformRand};

use crate::{
    secp256r1::{Fq, Fr},
    tests::fields::{field_serialization_test, field_test},
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
