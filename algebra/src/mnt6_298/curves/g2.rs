use crate::mnt6_298::{fq3, g1, Fq, Fq3, Fr};
use ecpair_core::{curves::{Affine, SWCurveConfig}, field_new, Zero};

/// A point of the twist G2.
pub type G2Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + a·u²·x + b·5` over `Fq3`, with `a` and `b` those of G1.
    Parameters over Fq3 {
        a: field_new!(Fq3, [Fq::zero(), Fq::zero(), Fq::from(super::COEFF_A)]),
        b: {
            let g1_b = g1::Parameters::coeff_b().clone();
            field_new!(Fq3, [g1_b * &Fq::from(fq3::NONRESIDUE), Fq::zero(), Fq::zero()])
        },
        generator: (
            field_new!(Fq3, [
                field_new!(Fq, "421456435772811846256826561593908322288509115489119907560382401870203318738334702321297427"),
                field_new!(Fq, "103072927438548502463527009961344915021167584706439945404959058962657261178393635706405114"),
                field_new!(Fq, "143029172143731852627002926324735183809768363301149009204849580478324784395590388826052558"),
            ]),
            field_new!(Fq3, [
                field_new!(Fq, "464673596668689463130099227575639512541218133445388869383893594087634649237515554342751377"),
                field_new!(Fq, "100642907501977375184575075967118071807821117960152743335603284583254620685343989304941678"),
                field_new!(Fq, "123019855502969896026940545715841181300275180157288044663051565390506010149881373807142903"),
            ]),
        ),
        order: Fr::modulus(),
    }
);
