use crate::mnt4_753::{Fq, Fr};
use ecpair_core::{curves::Affine, field_new};

/// A point of G1.
pub type G1Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 2·x + b` over `Fq`.
    Parameters over Fq {
        a: Fq::from(super::COEFF_A),
        b: field_new!(Fq, "28798803903456388891410036793299405764940372360099938340752576406393880372126970068421383312482853541572780087363938442377933706865252053507077543420534380486492786626556269083255657125025963825610840222568694137138741554679540"),
        generator: (
            field_new!(Fq, "23803503838482697364219212396100314255266282256287758532210460958670711284501374254909249084643549104668878996224193897061976788052185662569738774028756446662400954817676947337090686257134874703224133183061214213216866019444443"),
            field_new!(Fq, "21091012152938225813050540665280291929032924333518476279110711148670464794818544820522390295209715531901248676888544060590943737249563733104806697968779796610374994498702698840169538725164956072726942500665132927942037078135054"),
        ),
        order: Fr::modulus(),
    }
);
