use crate::mnt6_298::Fq;
use ecpair_core::{fields::CubicNonResidue, Zero};

/// The non-residue `u³` reduces to.
pub const NONRESIDUE: u64 = 5;

ext_config!(
    /// `Fq3 = Fq[u]/(u³ - 5)`.
    Fq3Config,
    Fq3,
    Fq,
    3,
    CubicNonResidue,
    [-Fq::from(NONRESIDUE), Fq::zero(), Fq::zero()]
);
