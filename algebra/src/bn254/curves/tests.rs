use ecpair_core::{field_new, pairing::{twist, Pairing}, Field, One, SWCurveConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

use crate::{
    bn254::{g1, g12, g2, Bn254, Fq, Parameters, BN254},
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
    let subscriber = Registry::default().with(fmt::layer().with_test_writer());
    let engine = tracing::subscriber::with_default(subscriber, Bn254::new).unwrap();
    assert_eq!(engine.final_exponent(), BN254.final_exponent());
}

#[test]
fn test_bilinearity() {
    pairing_test::<Parameters>(&BN254);
}

#[test]
fn test_degenerate_inputs() {
    degenerate_inputs_test::<Parameters>(&BN254);
}

#[test]
fn test_generator_pairing_value() {
    let e = BN254
        .pairing(&g2::G2Affine::generator(), &g1::G1Affine::generator())
        .unwrap();
    assert_eq!(
        e.coeffs()[0],
        field_new!(Fq, "18443897754565973717256850119554731228214108935025491924036055734000366132575")
    );
    assert_eq!(
        e.coeffs()[1],
        field_new!(Fq, "10734401203193558706037776473742910696504851986739882094082017010340198538454")
    );
    let f = BN254.miller_loop(
        &twist::<Parameters>(&g2::G2Affine::generator()).unwrap(),
        &Pairing::<Parameters>::cast_g1(&g1::G1Affine::generator()),
    );
    assert_eq!(BN254.final_exponentiation(&f.unwrap()), e);
    assert!(!e.is_one());
    assert!(e.pow(crate::bn254::Fr::modulus()).is_one());
}
