//! secp256r1, the NIST P-256 curve.
//!
//! Curve information:
//! * Base field: q = 0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff
//! * Scalar field: n = 0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551
//! * Curve equation: y² = x³ - 3x + b
//!
//! There is no pairing on this curve; only G1 is provided.

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
