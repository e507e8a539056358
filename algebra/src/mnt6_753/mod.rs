//! The MNT6-753 curve of the Ben-Sasson et al. MNT cycle, embedding
//! degree 6. Only the groups are provided here; the pairing engine covers
//! the degree-12 curves.
//!
//! Curve information:
//! * Base field: q = 41898490967918953402344214791240637128170709919953949071783502921025352812571106773058893763790338921418070971888458477323173057491593855069696241854796396165721416325350064441470418137846398469611935719059908164220784476160001
//! * Scalar field: r = 41898490967918953402344214791240637128170709919953949071783502921025352812571106773058893763790338921418070971888253786114353726529584385201591605722013126468931404347949840543007986327743462853720628051692141265303114721689601
//! * G1 curve equation: y^2 = x^3 + 11 x + b
//! * G2 lives on the cubic twist over Fq3 = Fq[u]/(u³ - 11)

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
