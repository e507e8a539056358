use crate::bn254::{Fq12Config, Fq2Config, FqConfig};
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
    /// `6x + 2` for the BN parameter `x = 4965661367192848881`.
    static ref ATE_LOOP_COUNT: BigUint = biguint_const("29793968203157093288");

    /// The process-wide BN254 engine, validated on first use.
    ///
    /// # Panics
    ///
    /// Dereferencing panics if the parameter set fails validation.
    pub static ref BN254: Bn254 = match Pairing::new() {
        Ok(engine) => engine,
        Err(e) => panic!("BN254 parameters failed validation: {}", e),
    };
}

/// The BN254 parameter set.
pub struct Parameters;

impl PairingConfig for Parameters {
    type Fp = FqConfig;
    type TwistField = Fq2Config;
    type TargetField = Fq12Config;
    type G1 = g1::Parameters;
    type G2 = g2::Parameters;
    type G12 = g12::Parameters;

    const TWIST_TYPE: TwistType = TwistType::D;
    const TWIST_OFFSET: u64 = 9;
    const FROBENIUS_TAIL: bool = true;

    fn ate_loop_count() -> &'static BigUint {
        &ATE_LOOP_COUNT
    }
}

/// The optimal ate pairing on BN254.
pub type Bn254 = Pairing<Parameters>;
