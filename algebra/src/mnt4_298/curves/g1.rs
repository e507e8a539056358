use crate::mnt4_298::{Fq, Fr};
use ecpair_core::{curves::Affine, field_new};

/// A point of G1.
pub type G1Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 2·x + b` over `Fq`.
    Parameters over Fq {
        a: Fq::from(super::COEFF_A),
        b: field_new!(Fq, "423894536526684178289416011533888240029318103673896002803341544124054745019340795360841685"),
        generator: (
            field_new!(Fq, "60760244141852568949126569781626075788424196370144486719385562369396875346601926534016838"),
            field_new!(Fq, "363732850702582978263902770815145784459747722357071843971107674179038674942891694705904306"),
        ),
        order: Fr::modulus(),
    }
);
