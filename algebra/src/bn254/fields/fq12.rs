use crate::bn254::Fq;
use ecpair_core::{fields::Schoolbook, Zero};

ext_config!(
    /// `Fq12 = Fq[w]/(w¹² - 18·w⁶ + 82)`, the flat presentation the pairing
    /// works in.
    Fq12Config,
    Fq12,
    Fq,
    12,
    Schoolbook,
    [
        Fq::from(82u64),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::from(-18i64),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
    ]
);
