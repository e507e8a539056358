use crate::bls12_381::Fq;
use ecpair_core::{fields::QuadraticNonResidue, One, Zero};

ext_config!(
    /// `Fq2 = Fq[u]/(u² + 1)`.
    Fq2Config,
    Fq2,
    Fq,
    2,
    QuadraticNonResidue,
    [Fq::one(), Fq::zero()]
);
