use crate::{
    mnt4_298::{g1, g2},
    tests::curves::{curve_tests, generator_order_test},
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
