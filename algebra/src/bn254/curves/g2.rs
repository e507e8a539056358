use crate::bn254::{Fq, Fq2, Fr};
use ecpair_core::{curves::Affine, field_new, Zero};

/// A point of the twist G2.
pub type G2Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 3/(9 + u)` over `Fq2`.
    Parameters over Fq2 {
        a: Fq2::zero(),
        b: field_new!(Fq2, [
            field_new!(Fq, "19485874751759354771024239261021720505790618469301721065564631296452457478373"),
            field_new!(Fq, "266929791119991161246907387137283842545076965332900288569378510910307636690"),
        ]),
        generator: (
            field_new!(Fq2, [
                field_new!(Fq, "10857046999023057135944570762232829481370756359578518086990519993285655852781"),
                field_new!(Fq, "11559732032986387107991004021392285783925812861821192530917403151452391805634"),
            ]),
            field_new!(Fq2, [
                field_new!(Fq, "8495653923123431417604973247489272438418190587263600148770280649306958101930"),
                field_new!(Fq, "4082367875863433681332203403145435568316851327593401208105741076214120093531"),
            ]),
        ),
        order: Fr::modulus(),
    }
);
