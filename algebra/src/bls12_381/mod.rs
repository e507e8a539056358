//! The BLS12-381 pairing-friendly curve: embedding degree 12 over a 381-bit
//! prime field, with a sextic M-type twist.
//!
//! Curve information:
//! * Base field: q = 4002409555221667393417789825735904156556882819939007885332058136124031650490837864442687629129015664037894272559787
//! * Scalar field: r = 52435875175126190479447740508185965837690552500527637822603658699938581184513
//! * G1 curve equation: y^2 = x^3 + 4
//! * G2 curve equation: y^2 = x^3 + 4(u + 1), where Fq2[u] = Fq/(u^2 + 1)
//! * Fq12 = Fq[w]/(w^12 - 2 w^6 + 2), into which Fq2 embeds via u ↦ w^6 - 1

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
