use crate::mnt4_753::Fq;
use ecpair_core::{fields::QuadraticNonResidue, Zero};

/// The non-residue `u²` reduces to.
pub const NONRESIDUE: u64 = 13;

ext_config!(
    /// `Fq2 = Fq[u]/(u² - 13)`.
    Fq2Config,
    Fq2,
    Fq,
    2,
    QuadraticNonResidue,
    [-Fq::from(NONRESIDUE), Fq::zero()]
);
