/// Declares a prime field `$field = Fp<$config>` with the given modulus
/// literal.
macro_rules! fp_config {
    ($(#[$attr:meta])* $config:ident, $field:ident, $modulus:expr) => {
        $(#[$attr])*
        pub struct $config;

        #[allow(missing_docs)]
        pub type $field = ecpair_core::fields::Fp<$config>;

        impl ecpair_core::fields::FpConfig for $config {
            fn modulus() -> &'static num_bigint::BigUint {
                lazy_static::lazy_static! {
                    static ref MODULUS: num_bigint::BigUint =
                        ecpair_core::biginteger::biguint_const($modulus);
                }
                &MODULUS
            }
        }
    };
}

/// Declares an extension `$field = ExtField<$config>` of `$base`, reduced by
/// `$rule`, whose monic modulus has the listed non-leading coefficients.
macro_rules! ext_config {
    (
        $(#[$attr:meta])* $config:ident, $field:ident,
        $base:ty, $degree:expr, $rule:ty,
        [$($coeff:expr),+ $(,)?]
    ) => {
        $(#[$attr])*
        pub struct $config;

        #[allow(missing_docs)]
        pub type $field = ecpair_core::fields::ExtField<$config>;

        impl ecpair_core::fields::ExtConfig for $config {
            type BaseField = $base;
            const DEGREE: usize = $degree;
            type Rule = $rule;

            fn modulus_coeffs() -> &'static [$base] {
                lazy_static::lazy_static! {
                    static ref MODULUS: Vec<$base> = vec![$($coeff),+];
                }
                &MODULUS
            }
        }
    };
}

/// Declares a short Weierstrass curve over `$base`. Coefficients and the
/// generator are evaluated once, on first use; `generator` is any expression
/// yielding the `(x, y)` pair.
macro_rules! sw_curve_config {
    (
        $(#[$attr:meta])* $config:ident over $base:ty {
            a: $a:expr,
            b: $b:expr,
            generator: $generator:expr,
            order: $order:expr $(,)?
        }
    ) => {
        $(#[$attr])*
        pub struct $config;

        lazy_static::lazy_static! {
            static ref COEFF_A: $base = $a;
            static ref COEFF_B: $base = $b;
            static ref GENERATOR: ($base, $base) = $generator;
        }

        impl ecpair_core::curves::SWCurveConfig for $config {
            type BaseField = $base;

            fn coeff_a() -> &'static $base {
                &COEFF_A
            }

            fn coeff_b() -> &'static $base {
                &COEFF_B
            }

            fn generator() -> ecpair_core::curves::Affine<Self> {
                let (x, y) = &*GENERATOR;
                ecpair_core::curves::Affine::new_unchecked(x.clone(), y.clone())
            }

            fn order() -> &'static num_bigint::BigUint {
                $order
            }
        }
    };
}
