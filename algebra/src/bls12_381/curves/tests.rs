use ecpair_core::{pairing::twist, SWCurveConfig};

use crate::{
    bls12_381::{g1, g12, g2, Bls12_381, Parameters, BLS12_381},
    tests::{
        curves::{curve_tests, generator_order_test},
        pairing::{degenerate_inputs_test, pairing_test, twist_test},
    },
};

#[test]
fn test_g1_curve() {
    curve_tests::<g1::Parameters>();
}

#[test]
fn test_g1_generator() {
    generator_order_test::<g1::Parameters>();
}

#[test]
fn test_g2_curve() {
    curve_tests::<g2::Parameters>();
}

#[test]
fn test_g2_generator() {
    generator_order_test::<g2::Parameters>();
}

#[test]
fn test_g12_curve() {
    curve_tests::<g12::Parameters>();
}

#[test]
fn test_g12_generator_is_twisted_g2_generator() {
    let g = g12::G12Affine::generator();
    assert_eq!(g, twist::<Parameters>(&g2::G2Affine::generator()).unwrap());
    assert!(g.is_on_curve());
    assert!(g.multiply(g12::Parameters::order()).unwrap().is_identity());
}

#[test]
fn test_twist() {
    twist_test::<Parameters>();
}

#[test]
fn test_engine_validates() {
    assert!(Bls12_381::new().is_ok());
}

#[test]
fn test_bilinearity() {
    pairing_test::<Parameters>(&BLS12_381);
}

#[test]
fn test_degenerate_inputs() {
    degenerate_inputs_test::<Parameters>(&BLS12_381);
}
