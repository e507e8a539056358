use crate::mnt4_753::{fq2, g1, Fq, Fq2, Fr};
use ecpair_core::{curves::{Affine, SWCurveConfig}, field_new, Zero};

/// A point of the twist G2.
pub type G2Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + a·13·x + b·13·u` over `Fq2`, with `a` and `b` those of G1.
    Parameters over Fq2 {
        a: field_new!(Fq2, [Fq::from(super::COEFF_A * fq2::NONRESIDUE), Fq::zero()]),
        b: {
            let g1_b = g1::Parameters::coeff_b().clone();
            field_new!(Fq2, [Fq::zero(), g1_b * &Fq::from(fq2::NONRESIDUE)])
        },
        generator: (
            field_new!(Fq2, [
                field_new!(Fq, "22367666623321080720060256844679369841450849258634485122226826668687008928557241162389052587294939105987791589807198701072089850184203060629036090027206884547397819080026926412256978135536735656049173059573120822105654153939204"),
                field_new!(Fq, "19674349354065582663569886390557105215375764356464013910804136534831880915742161945711267871023918136941472003751075703860943205026648847064247080124670799190998395234694182621794580160576822167228187443851233972049521455293042"),
            ]),
            field_new!(Fq2, [
                field_new!(Fq, "6945425020677398967988875731588951175743495235863391886533295045397037605326535330657361771765903175481062759367498970743022872494546449436815843306838794729313050998681159000579427733029709987073254733976366326071957733646574"),
                field_new!(Fq, "17406100775489352738678485154027036191618283163679980195193677896785273172506466216232026037788788436442188057889820014276378772936042638717710384987239430912364681046070625200474931975266875995282055499803236813013874788622488"),
            ]),
        ),
        order: Fr::modulus(),
    }
);
