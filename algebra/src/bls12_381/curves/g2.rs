use crate::bls12_381::{Fq, Fq2, Fr};
use ecpair_core::{curves::Affine, field_new, Zero};

/// A point of the twist G2.
pub type G2Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 4(1 + u)` over `Fq2`.
    Parameters over Fq2 {
        a: Fq2::zero(),
        b: field_new!(Fq2, [Fq::from(4u64), Fq::from(4u64)]),
        generator: (
            field_new!(Fq2, [
                field_new!(Fq, "352701069587466618187139116011060144890029952792775240219908644239793785735715026873347600343865175952761926303160"),
                field_new!(Fq, "3059144344244213709971259814753781636986470325476647558659373206291635324768958432433509563104347017837885763365758"),
            ]),
            field_new!(Fq2, [
                field_new!(Fq, "1985150602287291935568054521177171638300868978215655730859378665066344726373823718423869104263333984641494340347905"),
                field_new!(Fq, "927553665492332455747201965776037880757740193453592970025027978793976877002675564980949289727957565575433344219582"),
            ]),
        ),
        order: Fr::modulus(),
    }
);
