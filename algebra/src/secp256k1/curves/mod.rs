use crate::secp256k1::{Fq, Fr};
use ecpair_core::{curves::Affine, field_new, Zero};

#[cfg(test)]
mod tests;

/// A point of G1.
pub type G1Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 7` over `Fq`.
    Parameters over Fq {
        a: Fq::zero(),
        b: Fq::from(7u64),
        generator: (
            field_new!(Fq, "0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            field_new!(Fq, "0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        ),
        order: Fr::modulus(),
    }
);
