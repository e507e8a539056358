//! secp256k1, the SEC 2 Koblitz curve used by Bitcoin and Ethereum.
//!
//! Curve information:
//! * Base field: q = 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f
//! * Scalar field: n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//! * Curve equation: y² = x³ + 7
//!
//! There is no pairing on this curve; only G1 is provided.

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
