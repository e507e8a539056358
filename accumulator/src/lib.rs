//! An RSA accumulator: a set of integers summarised as a single element
//! `g^(x_1·x_2·…)` of a group of unknown order, with membership witnessed by
//! the same power omitting one factor.
//!
//! Elements are expected to be primes (or at least pairwise coprime) for
//! proofs to be binding; the accumulator itself does not check this.
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

use ecpair_core::{
    fields::{Field, Fp},
    BigInt, BigUint,
};
use num_bigint::Sign;
use num_integer::Integer;
use num_traits::{One, Signed};

mod error;
pub use self::error::*;

mod rsa;
pub use self::rsa::*;

/// A witness that some `x` was accumulated: `root^x` equals the state.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct InclusionProof<P: AccumulatorConfig = Rsa2048> {
    root: Fp<P>,
}

impl<P: AccumulatorConfig> InclusionProof<P> {
    /// Wraps a candidate witness.
    pub fn new(root: Fp<P>) -> Self {
        Self { root }
    }

    /// The witness value.
    pub fn root(&self) -> &Fp<P> {
        &self.root
    }

    /// Whether `root^x` equals the accumulator state.
    pub fn verify(&self, x: &BigUint, acc: &Accumulator<P>) -> bool {
        &self.root.pow(x) == acc.state()
    }

    /// Keeps the proof current after `y` has been added to the accumulator.
    pub fn update(&mut self, y: &BigUint) {
        self.root = self.root.pow(y);
    }
}

/// The accumulator state. Mutations take `&mut self`; share it behind a lock
/// if several callers update it.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct Accumulator<P: AccumulatorConfig = Rsa2048> {
    state: Fp<P>,
}

impl<P: AccumulatorConfig> Default for Accumulator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: AccumulatorConfig> Accumulator<P> {
    /// An empty accumulator, holding the configured generator.
    pub fn new() -> Self {
        Self::with_generator(Fp::from(P::GENERATOR))
    }

    /// An empty accumulator starting from `generator`.
    pub fn with_generator(generator: Fp<P>) -> Self {
        Self { state: generator }
    }

    /// The current state.
    pub fn state(&self) -> &Fp<P> {
        &self.state
    }

    /// Accumulates `x`, returning its inclusion proof: the state before the
    /// update.
    pub fn add(&mut self, x: &BigUint) -> InclusionProof<P> {
        let prev_state = self.state.clone();
        self.state = self.state.pow(x);
        tracing::debug!(bits = x.bits(), "accumulated element");
        InclusionProof::new(prev_state)
    }

    /// Removes `x`, whose inclusion is witnessed by `proof`. The state is
    /// left unchanged if the proof does not verify.
    pub fn remove(&mut self, x: &BigUint, proof: &InclusionProof<P>) -> Result<()> {
        if !proof.verify(x, self) {
            tracing::warn!(bits = x.bits(), "rejected removal with an invalid proof");
            return Err(AccumulatorError::InvalidProof);
        }
        self.state = proof.root.clone();
        tracing::debug!(bits = x.bits(), "removed element");
        Ok(())
    }

    /// Combines proofs for coprime `x1` and `x2` into one proof for
    /// `x1·x2`, as `p1^b · p2^a` where `a·x1 + b·x2 = 1`.
    pub fn aggregate(
        p1: &InclusionProof<P>,
        x1: &BigUint,
        p2: &InclusionProof<P>,
        x2: &BigUint,
    ) -> Result<InclusionProof<P>> {
        let x1 = BigInt::from_biguint(Sign::Plus, x1.clone());
        let x2 = BigInt::from_biguint(Sign::Plus, x2.clone());
        let egcd = x1.extended_gcd(&x2);
        if !egcd.gcd.is_one() {
            return Err(AccumulatorError::NotCoprime);
        }
        let root = signed_pow(&p1.root, &egcd.y)? * &signed_pow(&p2.root, &egcd.x)?;
        Ok(InclusionProof::new(root))
    }
}

/// `base^exp`, inverting `base` first when `exp` is negative.
fn signed_pow<P: AccumulatorConfig>(base: &Fp<P>, exp: &BigInt) -> Result<Fp<P>> {
    let magnitude = exp.magnitude();
    if exp.is_negative() {
        Ok(base.inverse()?.pow(magnitude))
    } else {
        Ok(base.pow(magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecpair_core::{fields::FpConfig, AlgebraError};
    use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

    fn n(x: u64) -> BigUint {
        BigUint::from(x)
    }

    #[test]
    fn add_then_remove_restores_state() {
        let mut acc = Accumulator::<Rsa2048>::new();
        let s0 = acc.state().clone();
        assert_eq!(s0, Fp::from(2u64));

        let proof = acc.add(&n(17));
        assert_eq!(proof.root(), &s0);
        assert_eq!(acc.state(), &s0.pow(&n(17)));
        assert!(proof.verify(&n(17), &acc));

        acc.remove(&n(17), &proof).unwrap();
        assert_eq!(acc.state(), &s0);
    }

    #[test]
    fn remove_rejects_invalid_proof() {
        let mut acc = Accumulator::<Rsa2048>::new();
        let proof = acc.add(&n(17));
        let s1 = acc.state().clone();

        let wrong = InclusionProof::new(Fp::from(3u64));
        let subscriber = Registry::default().with(fmt::layer().with_test_writer());
        let rejected =
            tracing::subscriber::with_default(subscriber, || acc.remove(&n(17), &wrong));
        assert_eq!(rejected, Err(AccumulatorError::InvalidProof));
        assert_eq!(acc.state(), &s1);

        // A valid proof for the wrong element is rejected too.
        assert_eq!(
            acc.remove(&n(19), &proof),
            Err(AccumulatorError::InvalidProof)
        );
        assert_eq!(acc.state(), &s1);
    }

    #[test]
    fn update_tracks_later_additions() {
        let mut acc = Accumulator::<Rsa2048>::new();
        let mut proof = acc.add(&n(3));
        acc.add(&n(5));
        assert!(!proof.verify(&n(3), &acc));

        proof.update(&n(5));
        assert!(proof.verify(&n(3), &acc));
        acc.remove(&n(3), &proof).unwrap();
        assert_eq!(acc.state(), &Fp::from(2u64).pow(&n(5)));
    }

    #[test]
    fn aggregate_combines_proofs() {
        let mut acc = Accumulator::<Rsa2048>::new();
        let mut p1 = acc.add(&n(7));
        let p2 = acc.add(&n(11));
        p1.update(&n(11));
        assert!(p1.verify(&n(7), &acc));
        assert!(p2.verify(&n(11), &acc));

        let both = Accumulator::aggregate(&p1, &n(7), &p2, &n(11)).unwrap();
        assert!(both.verify(&n(77), &acc));
        acc.remove(&n(77), &both).unwrap();
        assert_eq!(acc.state(), &Fp::from(2u64));
    }

    #[test]
    fn aggregate_requires_coprime_elements() {
        let acc = Accumulator::<Rsa2048>::new();
        let p = InclusionProof::new(acc.state().clone());
        assert_eq!(
            Accumulator::aggregate(&p, &n(6), &p, &n(10)),
            Err(AccumulatorError::NotCoprime)
        );
    }

    #[test]
    fn aggregate_fails_on_non_units() {
        lazy_static::lazy_static! {
            static ref N91: BigUint = BigUint::from(91u32);
        }
        struct Z91;
        impl FpConfig for Z91 {
            fn modulus() -> &'static BigUint {
                &N91
            }
        }
        impl AccumulatorConfig for Z91 {
            const GENERATOR: u64 = 2;
        }

        // One Bézout coefficient is negative, so one proof gets inverted;
        // both share the factor 7 with 91.
        let p1 = InclusionProof::<Z91>::new(Fp::from(14u64));
        let p2 = InclusionProof::<Z91>::new(Fp::from(21u64));
        assert_eq!(
            Accumulator::aggregate(&p1, &n(3), &p2, &n(2)),
            Err(AccumulatorError::Algebra(AlgebraError::DivisionByZero))
        );
    }
}
