use ecpair_core::{field_new, BigUint};

use crate::{
    secp256k1::{Fq, G1Affine, Parameters},
    tests::curves::{curve_tests, generator_order_test},
};

#[test]
fn test_g1_curve() {
    curve_tests::<Parameters>();
}

#[test]
fn test_g1_generator() {
    generator_order_test::<Parameters>();
}

#[test]
fn test_doubling_literal() {
    let two_g = G1Affine::generator().double().unwrap();
    let (x, y) = two_g.xy().unwrap();
    assert_eq!(
        x,
        &field_new!(Fq, "0xc6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5")
    );
    assert_eq!(
        y,
        &field_new!(Fq, "0x1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a")
    );
    assert_eq!(
        G1Affine::generator().multiply(&BigUint::from(2u32)).unwrap(),
        two_g
    );
}
