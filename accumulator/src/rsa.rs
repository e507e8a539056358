use ecpair_core::{biginteger::biguint_const, fields::FpConfig, BigUint};
use lazy_static::lazy_static;

/// A modulus of unknown factorization, with a fixed base for fresh
/// accumulators.
pub trait AccumulatorConfig: FpConfig {
    /// The initial state of an empty accumulator.
    const GENERATOR: u64;
}

lazy_static! {
    /// The RSA-2048 factoring challenge number.
    static ref RSA_2048: BigUint = biguint_const(
        "25195908475657893494027183240048398571429282126204032027777137836043662020707595556264018525880784406918290641249515082189298559149176184502808489120072844992687392807287776735971418347270261896375014971824691165077613379859095700097330459748808428401797429100642458691817195118746121515172654632282216869987549182422433637259085141865462043576798423387184774447920739934236584823824281198163815010674810451660377306056201619676256133844143603833904414952634432190114657544454178424020924616515723350778707749817125772467962926386356373289912154831438167899885040445364023527381951378636564391212010397122822120720357"
    );
}

/// Arithmetic modulo RSA-2048, whose factors are not publicly known.
pub struct Rsa2048;

impl FpConfig for Rsa2048 {
    fn modulus() -> &'static BigUint {
        &RSA_2048
    }
}

impl AccumulatorConfig for Rsa2048 {
    const GENERATOR: u64 = 2;
}
