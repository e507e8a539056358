use crate::bls12_381::Fq;
use ecpair_core::{fields::Schoolbook, Zero};

ext_config!(
    /// `Fq12 = Fq[w]/(w¹² - 2·w⁶ + 2)`.
    Fq12Config,
    Fq12,
    Fq,
    12,
    Schoolbook,
    [
        Fq::from(2u64),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::from(-2i64),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
        Fq::zero(),
    ]
);
