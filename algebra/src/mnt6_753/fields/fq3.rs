use crate::mnt6_753::Fq;
use ecpair_core::{fields::CubicNonResidue, Zero};

/// The non-residue `u³` reduces to.
pub const NONRESIDUE: u64 = 11;

ext_config!(
    /// `Fq3 = Fq[u]/(u³ - 11)`.
    Fq3Config,
    Fq3,
    Fq,
    3,
    CubicNonResidue,
    [-Fq::from(NONRESIDUE), Fq::zero(), Fq::zero()]
);
