use crate::mnt4_298::{fq2, g1, Fq, Fq2, Fr};
use ecpair_core::{curves::{Affine, SWCurveConfig}, field_new, Zero};

/// A point of the twist G2.
pub type G2Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + a·17·x + b·17·u` over `Fq2`, with `a` and `b` those of G1.
    Parameters over Fq2 {
        a: field_new!(Fq2, [Fq::from(super::COEFF_A * fq2::NONRESIDUE), Fq::zero()]),
        b: {
            let g1_b = g1::Parameters::coeff_b().clone();
            field_new!(Fq2, [Fq::zero(), g1_b * &Fq::from(fq2::NONRESIDUE)])
        },
        generator: (
            field_new!(Fq2, [
                field_new!(Fq, "438374926219350099854919100077809681842783509163790991847867546339851681564223481322252708"),
                field_new!(Fq, "37620953615500480110935514360923278605464476459712393277679280819942849043649216370485641"),
            ]),
            field_new!(Fq2, [
                field_new!(Fq, "37437409008528968268352521034936931842973546441370663118543015118291998305624025037512482"),
                field_new!(Fq, "424621479598893882672393190337420680597584695892317197646113820787463109735345923009077489"),
            ]),
        ),
        order: Fr::modulus(),
    }
);
