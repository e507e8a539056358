use crate::bn254::Fq2;
use ecpair_core::{fields::CubicNonResidue, Zero};

ext_config!(
    /// `Fq6 = Fq2[v]/(v³ - (9 + u))`, the middle of the classic tower.
    Fq6Config,
    Fq6,
    Fq2,
    3,
    CubicNonResidue,
    [-(Fq2::from(9u64) + Fq2::generator()), Fq2::zero(), Fq2::zero()]
);

ext_config!(
    /// `Fq12Over6 = Fq6[w]/(w² - v)`, the classic tower presentation of the
    /// degree-12 extension.
    Fq12Over6Config,
    Fq12Over6,
    Fq6,
    2,
    ecpair_core::fields::QuadraticNonResidue,
    [-Fq6::generator(), Fq6::zero()]
);
