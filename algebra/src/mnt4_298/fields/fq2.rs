use crate::mnt4_298::Fq;
use ecpair_core::{fields::QuadraticNonResidue, Zero};

/// The non-residue `u²` reduces to.
pub const NONRESIDUE: u64 = 17;

ext_config!(
    /// `Fq2 = Fq[u]/(u² - 17)`.
    Fq2Config,
    Fq2,
    Fq,
    2,
    QuadraticNonResidue,
    [-Fq::from(NONRESIDUE), Fq::zero()]
);
