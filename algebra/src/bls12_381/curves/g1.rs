use crate::bls12_381::{Fq, Fr};
use ecpair_core::{curves::Affine, field_new, Zero};

/// A point of G1.
pub type G1Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 4` over `Fq`.
    Parameters over Fq {
        a: Fq::zero(),
        b: Fq::from(4u64),
        generator: (
            field_new!(Fq, "3685416753713387016781088315183077757961620795782546409894578378688607592378376318836054947676345821548104185464507"),
            field_new!(Fq, "1339506544944476473020471379941921221584933875938349620426543736416511423956333506472724655353366534992391756441569"),
        ),
        order: Fr::modulus(),
    }
);
