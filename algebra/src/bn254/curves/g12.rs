use crate::bn254::{Fq12, Fr};
use ecpair_core::{curves::Affine, pairing::twist, Zero};

use super::g2::G2Affine;

pub type G12Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 3` over `Fq12`; both G1 and the twisted G2 live here.
    /// The generator is the image of the G2 generator under the twist.
    Parameters over Fq12 {
        a: Fq12::zero(),
        b: Fq12::from(3u64),
        generator: twisted_g2_generator(),
        order: Fr::modulus(),
    }
);

fn twisted_g2_generator() -> (Fq12, Fq12) {
    let twisted = match twist::<super::Parameters>(&G2Affine::generator()) {
        Ok(point) => point,
        Err(e) => panic!("BN254 G2 generator does not twist: {}", e),
    };
    match twisted.xy() {
        Some((x, y)) => (x.clone(), y.clone()),
        None => panic!("BN254 G2 generator twists to the identity"),
    }
}
