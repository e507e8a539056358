use crate::bls12_381::{Fq12, Fr};
use ecpair_core::{curves::Affine, pairing::twist, Zero};

use super::g2::G2Affine;

/// A point of the G1 curve read over `Fq12`.
pub type G12Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 4` over `Fq12`, generated by the twisted G2 generator.
    Parameters over Fq12 {
        a: Fq12::zero(),
        b: Fq12::from(4u64),
        generator: twisted_g2_generator(),
        order: Fr::modulus(),
    }
);

fn twisted_g2_generator() -> (Fq12, Fq12) {
    let twisted = match twist::<super::Parameters>(&G2Affine::generator()) {
        Ok(point) => point,
        Err(e) => panic!("BLS12-381 G2 generator does not twist: {}", e),
    };
    match twisted.xy() {
        Some((x, y)) => (x.clone(), y.clone()),
        None => panic!("BLS12-381 G2 generator twists to the identity"),
    }
}
