//! Concrete parameter sets for the `ecpair-core` engine.
//!
//! Each curve lives behind a cargo feature of the same name. The pairing
//! curves (`bn254`, `bls12_381`) expose a process-wide engine that is
//! validated on first use; the remaining curves provide G1 (and, for the
//! MNT family, G2) without a pairing.
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

#[cfg(feature = "bn254")]
pub mod bn254;

#[cfg(feature = "bls12_381")]
pub mod bls12_381;

#[cfg(feature = "mnt4_298")]
pub mod mnt4_298;

#[cfg(feature = "mnt4_753")]
pub mod mnt4_753;

#[cfg(feature = "mnt6_298")]
pub mod mnt6_298;

#[cfg(feature = "mnt6_753")]
pub mod mnt6_753;

#[cfg(feature = "secp256k1")]
pub mod secp256k1;

#[cfg(feature = "secp256r1")]
pub mod secp256r1;

#[cfg(test)]
pub(crate) mod tests;
