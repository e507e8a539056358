use crate::mnt6_753::{fq3, g1, Fq, Fq3, Fr};
use ecpair_core::{curves::{Affine, SWCurveConfig}, field_new, Zero};

/// A point of the twist G2.
pub type G2Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + a·u²·x + b·11` over `Fq3`, with `a` and `b` those of G1.
    Parameters over Fq3 {
        a: field_new!(Fq3, [Fq::zero(), Fq::zero(), Fq::from(super::COEFF_A)]),
        b: {
            let g1_b = g1::Parameters::coeff_b().clone();
            field_new!(Fq3, [g1_b * &Fq::from(fq3::NONRESIDUE), Fq::zero(), Fq::zero()])
        },
        generator: (
            field_new!(Fq3, [
                field_new!(Fq, "46538297238006280434045879335349383221210789488441126073640895239023832290080310125413049878152095926176013036314720850781686614265244307536450228450615346834324267478485994670716807428718518299710702671895190475661871557310"),
                field_new!(Fq, "10329739935427016564561842963551883445915701424214177782911128765230271790215029185795830999583638744119368571742929964793955375930677178544873424392910884024986348059137449389533744851691082159233065444766899262771358355816328"),
                field_new!(Fq, "19962817058174334691864015232062671736353756221485896034072814261894530786568591431279230352444205682361463997175937973249929732063490256813101714586199642571344378012210374327764059557816647980334733538226843692316285591005879"),
            ]),
            field_new!(Fq3, [
                field_new!(Fq, "5648166377754359996653513138027891970842739892107427747585228022871109585680076240624013411622970109911154113378703562803827053335040877618934773712021441101121297691389632155906182656254145368668854360318258860716497525179898"),
                field_new!(Fq, "26817850356025045630477313828875808893994935265863280918207940412617168254772789578700316551065949899971937475487458539503514034928974530432009759562975983077355912050606509147904958229398389093697494174311832813615564256810453"),
                field_new!(Fq, "32332319709358578441696731586704495581796858962594701633932927358040566210788542624963749336109940335257143899293177116050031684054348958813290781394131284657165540476824211295508498842102093219808642563477603392470909217611033"),
            ]),
        ),
        order: Fr::modulus(),
    }
);
