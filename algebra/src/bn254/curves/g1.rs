use crate::bn254::{Fq, Fr};
use ecpair_core::{curves::Affine, Zero};

/// A point of G1.
pub type G1Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 3` over `Fq`.
    Parameters over Fq {
        a: Fq::zero(),
        b: Fq::from(3u64),
        generator: (Fq::from(1u64), Fq::from(2u64)),
        order: Fr::modulus(),
    }
);
