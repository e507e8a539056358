//! Multiplication strategies for extension fields.
//!
//! An extension `F[u]/(f(u))` is described by the non-leading coefficients
//! `m_0, …, m_{d-1}` of the monic polynomial `f`. Every rule computes the
//! same reduced product; the specialised ones only apply to moduli of a
//! particular shape, which [`ReductionRule::supports`] checks.
use crate::fields::Field;
use ark_std::vec::Vec;

/// A way of multiplying two reduced polynomials modulo `f`.
pub trait ReductionRule: 'static + Send + Sync {
    /// Multiplies `a` and `b`, both of length `modulus.len()`, modulo `f`.
    fn mul<F: Field>(a: &[F], b: &[F], modulus: &[F]) -> Vec<F>;

    /// Whether this rule is valid for the given modulus.
    fn supports<F: Field>(modulus: &[F]) -> bool;
}

/// Schoolbook multiplication followed by eliminating the top coefficient
/// with the relation `u^d = -(m_0 + m_1·u + … + m_{d-1}·u^{d-1})`.
pub struct Schoolbook;

impl ReductionRule for Schoolbook {
    fn mul<F: Field>(a: &[F], b: &[F], modulus: &[F]) -> Vec<F> {
        let degree = modulus.len();
        let mut product = vec![F::zero(); 2 * degree - 1];
        for (i, a_i) in a.iter().enumerate() {
            if a_i.is_zero() {
                continue;
            }
            for (j, b_j) in b.iter().enumerate() {
                product[i + j] += a_i.clone() * b_j;
            }
        }
        reduce(&mut product, modulus);
        product.truncate(degree);
        product
    }

    fn supports<F: Field>(modulus: &[F]) -> bool {
        !modulus.is_empty()
    }
}

/// Eliminates coefficients of degree `>= d` in place, highest first.
pub(crate) fn reduce<F: Field>(poly: &mut [F], modulus: &[F]) {
    let degree = modulus.len();
    for idx in (degree..poly.len()).rev() {
        let top = core::mem::replace(&mut poly[idx], F::zero());
        if top.is_zero() {
            continue;
        }
        for (i, m_i) in modulus.iter().enumerate() {
            poly[idx - degree + i] -= top.clone() * m_i;
        }
    }
}

/// Karatsuba multiplication in `F[u]/(u² - β)`, where `β = -m_0`.
pub struct QuadraticNonResidue;

impl ReductionRule for QuadraticNonResidue {
    fn mul<F: Field>(a: &[F], b: &[F], modulus: &[F]) -> Vec<F> {
        let beta = -modulus[0].clone();
        let v0 = a[0].clone() * &b[0];
        let v1 = a[1].clone() * &b[1];
        let c1 = (a[0].clone() + &a[1]) * &(b[0].clone() + &b[1]) - &v0 - &v1;
        let c0 = v0 + &(v1 * &beta);
        vec![c0, c1]
    }

    fn supports<F: Field>(modulus: &[F]) -> bool {
        modulus.len() == 2 && modulus[1].is_zero()
    }
}

/// Karatsuba-style multiplication in `F[u]/(u³ - β)`, where `β = -m_0`.
pub struct CubicNonResidue;

impl ReductionRule for CubicNonResidue {
    fn mul<F: Field>(x: &[F], y: &[F], modulus: &[F]) -> Vec<F> {
        let beta = -modulus[0].clone();
        let (a1, b1, c1) = (&x[0], &x[1], &x[2]);
        let (a2, b2, c2) = (&y[0], &y[1], &y[2]);
        let a = a1.clone() * a2;
        let b = b1.clone() * b2;
        let c = c1.clone() * c2;

        let d0 = ((b1.clone() + c1) * &(b2.clone() + c2) - &b - &c) * &beta + &a;
        let d1 = (a1.clone() + b1) * &(a2.clone() + b2) - &a - &b + &(c.clone() * &beta);
        let d2 = (a1.clone() + c1) * &(a2.clone() + c2) - &a + &b - &c;
        vec![d0, d1, d2]
    }

    fn supports<F: Field>(modulus: &[F]) -> bool {
        modulus.len() == 3 && modulus[1].is_zero() && modulus[2].is_zero()
    }
}
