//! The MNT4-298 curve of the Ben-Sasson et al. MNT cycle, embedding
//! degree 4. Only the groups are provided here; the pairing engine covers
//! the degree-12 curves.
//!
//! Curve information:
//! * Base field: q = 475922286169261325753349249653048451545124879242694725395555128576210262817955800483758081
//! * Scalar field: r = 475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137
//! * G1 curve equation: y^2 = x^3 + 2 x + b
//! * G2 lives on the quadratic twist over Fq2 = Fq[u]/(u² - 17)

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
