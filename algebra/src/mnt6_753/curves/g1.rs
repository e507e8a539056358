use crate::mnt6_753::{Fq, Fr};
use ecpair_core::{curves::Affine, field_new};

/// A point of G1.
pub type G1Affine = Affine<Parameters>;

sw_curve_config!(
    /// `y² = x³ + 11·x + b` over `Fq`.
    Parameters over Fq {
        a: Fq::from(super::COEFF_A),
        b: field_new!(Fq, "11625908999541321152027340224010374716841167701783584648338908235410859267060079819722747939267925389062611062156601938166010098747920378738927832658133625454260115409075816187555055859490253375704728027944315501122723426879114"),
        generator: (
            field_new!(Fq, "16364236387491689444759057944334173579070747473738339749093487337644739228935268157504218078126401066954815152892688541654726829424326599038522503517302466226143788988217410842672857564665527806044250003808514184274233938437290"),
            field_new!(Fq, "4510127914410645922431074687553594593336087066778984214797709122300210966076979927285161950203037801392624582544098750667549188549761032654706830225743998064330900301346566408501390638273322467173741629353517809979540986561128"),
        ),
        order: Fr::modulus(),
    }
);
