//! Generic arithmetic for pairing-based cryptography.
//!
//! The crate is organised leaves first: prime fields ([`Fp`]), extension
//! towers built over any [`Field`] ([`ExtField`]), affine short Weierstrass
//! groups over either ([`Affine`]), the sextic twist, and the optimal ate
//! pairing ([`Pairing`]). Concrete parameter sets live in `ecpair-curves`.
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![allow(clippy::many_single_char_names, clippy::suspicious_arithmetic_impl)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate derivative;

pub mod biginteger;

mod error;
pub use self::error::*;

#[macro_use]
pub mod fields;
pub use self::fields::*;

pub mod curves;
pub use self::curves::*;

pub mod pairing;
pub use self::pairing::*;

pub use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
pub use ark_std::{test_rng, UniformRand};
pub use num_bigint::{BigInt, BigUint};
pub use num_traits::{One, Zero};
