//! A verifier for [`Groth16`] proofs over the `ecpair` pairing engine.
//!
//! Keys and proofs are produced elsewhere (for instance by ZoKrates) and
//! loaded through `ark-serialize`; this crate only checks them.
//!
//! [`Groth16`]: https://eprint.iacr.org/2016/260.pdf
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate derivative;

use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use ark_std::{
    io::{Read, Write},
    vec::Vec,
};
use ecpair_core::pairing::{G1Affine, G2Affine, PairingConfig, PairingOutput};

mod error;
pub use self::error::*;

/// Verify proofs for the Groth16 zkSNARK construction.
pub mod verifier;
pub use self::verifier::*;

#[cfg(test)]
mod test;

/// A proof in the Groth16 SNARK.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Proof<P: PairingConfig> {
    /// The `A` element in `G1`.
    pub a: G1Affine<P>,
    /// The `B` element in `G2`.
    pub b: G2Affine<P>,
    /// The `C` element in `G1`.
    pub c: G1Affine<P>,
}

/// A verification key in the Groth16 SNARK.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct VerifyingKey<P: PairingConfig> {
    /// The `alpha * G`, where `G` is the generator of `G1`.
    pub alpha_g1: G1Affine<P>,
    /// The `beta * H`, where `H` is the generator of `G2`.
    pub beta_g2: G2Affine<P>,
    /// The `gamma * H`, where `H` is the generator of `G2`.
    pub gamma_g2: G2Affine<P>,
    /// The `delta * H`, where `H` is the generator of `G2`.
    pub delta_g2: G2Affine<P>,
    /// The `gamma^{-1} * (beta * a_i + alpha * b_i + c_i) * G`, where `G` is
    /// the generator of `G1`; one entry more than there are public inputs.
    pub gamma_abc_g1: Vec<G1Affine<P>>,
}

/// Preprocessed verification key parameters that enable faster verification
/// at the expense of larger size in memory.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct PreparedVerifyingKey<P: PairingConfig> {
    /// The unprepared verification key.
    pub vk: VerifyingKey<P>,
    /// The element `e(alpha * G, beta * H)`.
    pub alpha_g1_beta_g2: PairingOutput<P>,
}

impl<P: PairingConfig> From<PreparedVerifyingKey<P>> for VerifyingKey<P> {
    fn from(other: PreparedVerifyingKey<P>) -> Self {
        other.vk
    }
}

impl<P: PairingConfig> CanonicalSerialize for Proof<P> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> core::result::Result<(), SerializationError> {
        self.a.serialize_with_mode(&mut writer, compress)?;
        self.b.serialize_with_mode(&mut writer, compress)?;
        self.c.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.a.serialized_size(compress)
            + self.b.serialized_size(compress)
            + self.c.serialized_size(compress)
    }
}

impl<P: PairingConfig> Valid for Proof<P> {
    fn check(&self) -> core::result::Result<(), SerializationError> {
        self.a.check()?;
        self.b.check()?;
        self.c.check()
    }
}

impl<P: PairingConfig> CanonicalDeserialize for Proof<P> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> core::result::Result<Self, SerializationError> {
        Ok(Self {
            a: CanonicalDeserialize::deserialize_with_mode(&mut reader, compress, validate)?,
            b: CanonicalDeserialize::deserialize_with_mode(&mut reader, compress, validate)?,
            c: CanonicalDeserialize::deserialize_with_mode(&mut reader, compress, validate)?,
        })
    }
}

impl<P: PairingConfig> CanonicalSerialize for VerifyingKey<P> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> core::result::Result<(), SerializationError> {
        self.alpha_g1.serialize_with_mode(&mut writer, compress)?;
        self.beta_g2.serialize_with_mode(&mut writer, compress)?;
        self.gamma_g2.serialize_with_mode(&mut writer, compress)?;
        self.delta_g2.serialize_with_mode(&mut writer, compress)?;
        self.gamma_abc_g1.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.alpha_g1.serialized_size(compress)
            + self.beta_g2.serialized_size(compress)
            + self.gamma_g2.serialized_size(compress)
            + self.delta_g2.serialized_size(compress)
            + self.gamma_abc_g1.serialized_size(compress)
    }
}

impl<P: PairingConfig> Valid for VerifyingKey<P> {
    fn check(&self) -> core::result::Result<(), SerializationError> {
        self.alpha_g1.check()?;
        self.beta_g2.check()?;
        self.gamma_g2.check()?;
        self.delta_g2.check()?;
        self.gamma_abc_g1.check()
    }
}

impl<P: PairingConfig> CanonicalDeserialize for VerifyingKey<P> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> core::result::Result<Self, SerializationError> {
        Ok(Self {
            alpha_g1: CanonicalDeserialize::deserialize_with_mode(&mut reader, compress, validate)?,
            beta_g2: CanonicalDeserialize::deserialize_with_mode(&mut reader, compress, validate)?,
            gamma_g2: CanonicalDeserialize::deserialize_with_mode(&mut reader, compress, validate)?,
            delta_g2: CanonicalDeserialize::deserialize_with_mode(&mut reader, compress, validate)?,
            gamma_abc_g1: CanonicalDeserialize::deserialize_with_mode(
                &mut reader,
                compress,
                validate,
            )?,
        })
    }
}
