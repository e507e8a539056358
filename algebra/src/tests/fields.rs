#![allow(unused)]
use ark_std::rand::Rng;
use ecpair_core::{
    test_rng, AlgebraError, BigUint, CanonicalDeserialize, CanonicalSerialize, Compress, Field,
    One, UniformRand, Validate, Zero,
};

pub const ITERATIONS: u32 = 40;

fn random_negation_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let mut b = -a.clone();
        b += &a;

        assert!(b.is_zero());
    }
}

fn random_addition_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let t0 = (a.clone() + &b) + &c; // (a + b) + c

        let t1 = (a.clone() + &c) + &b; // (a + c) + b

        let t2 = (b + &c) + &a; // (b + c) + a

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_subtraction_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);

        let t0 = a.clone() - &b; // (a - b)

        let mut t1 = b; // (b - a)
        t1 -= &a;

        let mut t2 = t0; // (a - b) + (b - a) = 0
        t2 += &t1;

        assert!(t2.is_zero());
    }
}

fn random_multiplication_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let mut t0 = a.clone(); // (a * b) * c
        t0 *= &b;
        t0 *= &c;

        let mut t1 = a.clone(); // (a * c) * b
        t1 *= &c;
        t1 *= &b;

        let mut t2 = b; // (b * c) * a
        t2 *= &c;
        t2 *= &a;

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_inversion_tests<F: Field, R: Rng>(rng: &mut R) {
    assert_eq!(F::zero().inverse(), Err(AlgebraError::DivisionByZero));

    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let b = a.inverse().unwrap(); // probablistically nonzero
        a *= &b;

        assert_eq!(a, F::one());
    }
}

fn random_division_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let q = a.checked_div(&b).unwrap();

        assert_eq!(q * &b, a);
        assert_eq!(a.checked_div(&F::zero()), Err(AlgebraError::DivisionByZero));
    }
}

fn random_doubling_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let b = a.clone();
        a += &b;

        assert_eq!(a, b.double());
        assert_eq!(a, b.scalar_mul(2));
    }
}

fn random_squaring_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let b = a.clone();
        a *= &b;

        assert_eq!(a, b.square());
    }
}

fn random_expansion_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        // Compare (a + b)(c + d) and (a*c + b*c + a*d + b*d)

        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);
        let d = F::rand(rng);

        let t0 = (a.clone() + &b) * &(c.clone() + &d);

        let t2 = a.clone() * &c + &(b.clone() * &c) + &(a * &d) + &(b * &d);

        assert_eq!(t0, t2);
    }

    for _ in 0..ITERATIONS {
        // Compare (a + b)c and (a*c + b*c)

        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let t0 = (a.clone() + &b) * &c;
        let t2 = a * &c + &(b * &c);

        assert_eq!(t0, t2);
    }
}

fn random_field_tests<F: Field>() {
    let mut rng = test_rng();

    random_negation_tests::<F, _>(&mut rng);
    random_addition_tests::<F, _>(&mut rng);
    random_subtraction_tests::<F, _>(&mut rng);
    random_multiplication_tests::<F, _>(&mut rng);
    random_inversion_tests::<F, _>(&mut rng);
    random_division_tests::<F, _>(&mut rng);
    random_doubling_tests::<F, _>(&mut rng);
    random_squaring_tests::<F, _>(&mut rng);
    random_expansion_tests::<F, _>(&mut rng);

    assert!(F::zero().is_zero());
    assert!((-F::zero()).is_zero());

    // Multiplication by zero
    {
        let a = F::rand(&mut rng) * &F::zero();
        assert!(a.is_zero());
    }

    // Addition by zero
    {
        let mut a = F::rand(&mut rng);
        let copy = a.clone();
        a += &F::zero();
        assert_eq!(a, copy);
    }
}

pub fn field_test<F: Field>(a: F, b: F) {
    let zero = F::zero();
    assert!(zero.is_zero());
    assert!(!zero.is_one());

    let one = F::one();
    assert!(!one.is_zero());
    assert!(one.is_one());
    assert_eq!(zero.clone() + &one, one);

    let two = one.clone() + &one;
    assert_ne!(zero, two);
    assert_ne!(one, two);
    assert_eq!(two, F::from(2u64));
    assert_eq!(-one.clone(), F::from(-1i64));

    // a + 0 = a
    assert_eq!(a.clone() + &zero, a);
    // a - a = 0
    assert_eq!(a.clone() - &a, zero);
    // 0 - a = -a
    assert_eq!(zero.clone() - &a, -a.clone());
    // a + b = b + a
    assert_eq!(a.clone() + &b, b.clone() + &a);
    // a - b = -(b - a)
    assert_eq!(a.clone() - &b, -(b.clone() - &a));

    // a * 0 = 0
    assert_eq!(a.clone() * &zero, zero);
    // a * 1 = a
    assert_eq!(a.clone() * &one, a);
    // a * 2 = a.double()
    assert_eq!(a.clone() * &two, a.double());
    // a * a^-1 = 1
    assert_eq!(a.clone() * &a.inverse().unwrap(), one);
    // a * a * a = a^3
    assert_eq!(a.clone() * &a.square(), a.pow(&BigUint::from(3u32)));
    // a^0 = 1
    assert!(a.pow(&BigUint::zero()).is_one());
    // a * b = b * a
    assert_eq!(a.clone() * &b, b.clone() * &a);
    // (a + b)^2 = a^2 + 2ab + b^2
    assert_eq!(
        (a.clone() + &b).square(),
        a.square() + &(a.clone() * &b).double() + &b.square()
    );
    // products and sums of iterators
    assert_eq!([a.clone(), b.clone()].iter().sum::<F>(), a.clone() + &b);
    assert_eq!([a.clone(), b.clone()].iter().product::<F>(), a * &b);
    random_field_tests::<F>();
}

pub fn frobenius_test<F: Field>(maxpower: usize) {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS / 4 {
        let a = F::rand(&mut rng);

        let mut a_q = a.pow(F::characteristic());
        let mut a_qi = a.clone();
        for _ in 1..maxpower {
            a_qi = a_qi.frobenius();
            assert_eq!(a_qi, a_q);

            a_q = a_q.pow(F::characteristic());
        }
        // The Frobenius generates a group of order `extension_degree`.
        let mut a_full = a.clone();
        for _ in 0..F::extension_degree() {
            a_full = a_full.frobenius();
        }
        assert_eq!(a_full, a);
    }
}

pub fn field_serialization_test<F: Field>() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let mut serialized = Vec::new();
        a.serialize_compressed(&mut serialized).unwrap();
        assert_eq!(serialized.len(), a.compressed_size());

        let b = F::deserialize_compressed(&serialized[..]).unwrap();
        assert_eq!(a, b);

        let c = F::deserialize_with_mode(&serialized[..], Compress::No, Validate::Yes).unwrap();
        assert_eq!(a, c);

        // Truncated input.
        assert!(F::deserialize_compressed(&serialized[..serialized.len() - 1]).is_err());
    }
}
