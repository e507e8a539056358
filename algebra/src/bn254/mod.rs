//! The BN254 curve of [[BCTV14]](https://eprint.iacr.org/2013/879.pdf), also
//! known as `alt_bn128`: a Barreto--Naehrig curve of embedding degree 12 over
//! a 254-bit prime field.
//!
//! #CAUTION
//! **This curve does not satisfy the 128-bit security level anymore.**
//!
//! Curve information:
//! * Base field: q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
//! * Scalar field: r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//! * G1 curve equation: y^2 = x^3 + 3
//! * G2 curve equation: y^2 = x^3 + B, where
//!    * B = 3/(u+9) where Fq2[u]=Fq/u+1
//!        = Fq2(19485874751759354771024239261021720505790618469301721065564631296452457478373, 266929791119991161246907387137283842545076965332900288569378510910307636690)
//! * Fq12 = Fq[w]/(w^12 - 18 w^6 + 82), into which Fq2 embeds via u ↦ w^6 - 9

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
