use crate::mnt6_298::{Fq, Fr};
use ecpair_core::{curves::Affine, field_new};

/// A point of G1.
pub type G1Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 11·x + b` over `Fq`.
    Parameters over Fq {
        a: Fq::from(super::COEFF_A),
        b: field_new!(Fq, "106700080510851735677967319632585352256454251201367587890185989362936000262606668469523074"),
        generator: (
            field_new!(Fq, "336685752883082228109289846353937104185698209371404178342968838739115829740084426881123453"),
            field_new!(Fq, "402596290139780989709332707716568920777622032073762749862342374583908837063963736098549800"),
        ),
        order: Fr::modulus(),
    }
);
