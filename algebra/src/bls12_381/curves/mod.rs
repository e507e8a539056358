use crate::bls12_381::{Fq12Config, Fq2Config, FqConfig};
use ecpair_core::{
    biginteger::biguint_const,
    pairing::{Pairing, PairingConfig, TwistType},
    BigUint,
};
use lazy_static::lazy_static;

pub mod g1;
pub mod g12;
pub mod g2;

pub use self::{g1::G1Affine, g12::G12Affine, g2::G2Affine};

#[cfg(test)]
mod tests;

lazy_static! {
    /// `|x|` for the BLS parameter `x = -0xd201000000010000`.
    static ref ATE_LOOP_COUNT: BigUint = biguint_const("0xd201000000010000");

    /// The process-wide BLS12-381 engine, validated on first use.
    ///
    /// # Panics
    ///
    /// Dereferencing panics if the parameter set fails validation.
    pub static ref BLS12_381: Bls12_381 = match Pairing::new() {
        Ok(engine) => engine,
        Err(e) => panic!("BLS12-381 parameters failed validation: {}", e),
    };
}

/// The BLS12-381 parameter set.
pub struct Parameters;

impl PairingConfig for Parameters {
    type Fp = FqConfig;
    type TwistField = Fq2Config;
    type TargetField = Fq12Config;
    type G1 = g1::Parameters;
    type G2 = g2::Parameters;
    type G12 = g12::Parameters;

    const TWIST_TYPE: TwistType = TwistType::M;
    const TWIST_OFFSET: u64 = 1;
    const FROBENIUS_TAIL: bool = false;

    fn ate_loop_count() -> &'static BigUint {
        &ATE_LOOP_COUNT
    }
}

/// The optimal ate pairing on BLS12-381.
#[allow(non_camel_case_types)]
pub type Bls12_381 = Pairing<Parameters>;
