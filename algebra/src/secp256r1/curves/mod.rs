use crate::secp256r1::{Fq, Fr};
use ecpair_core::{curves::Affine, field_new};


/// A point of G1.
pub type G1Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ - 3x + b` over `Fq`.
    Parameters over Fq {
        a: Fq::from(-3i64),
        b: field_new!(Fq, "0x5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        generator: (
            field_new!(Fq, "0x6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            field_new!(Fq, "0x4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        ),
        order: Fr::modulus(),
    }
);
