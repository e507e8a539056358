//! The MNT6-298 curve of the Ben-Sasson et al. MNT cycle, embedding
//! degree 6. Only the groups are provided here; the pairing engine covers
//! the degree-12 curves.
//!
//! Curve information:
//! * Base field: q = 475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137
//! * Scalar field: r = 475922286169261325753349249653048451545124879242694725395555128576210262817955800483758081
//! * G1 curve equation: y^2 = x^3 + 11 x + b
//! * G2 lives on the cubic twist over Fq3 = Fq[u]/(u³ - 5)

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
