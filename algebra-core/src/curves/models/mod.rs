use crate::fields::Field;
use num_bigint::BigUint;

pub mod short_weierstrass;
pub use self::short_weierstrass::{Affine, SWFlags};

/// Parameters of a curve `y² = x³ + a·x + b` in short Weierstrass form.
pub trait SWCurveConfig: 'static + Send + Sync + Sized {
    /// The field hosting the coordinates; a prime field or an extension.
    type BaseField: Field;

    /// Coefficient `a` of the curve equation.
    fn coeff_a() -> &'static Self::BaseField;

    /// Coefficient `b` of the curve equation.
    fn coeff_b() -> &'static Self::BaseField;

    /// A generator of the prime-order subgroup.
    fn generator() -> Affine<Self>;

    /// The order of the subgroup spanned by [`Self::generator`].
    fn order() -> &'static BigUint;
}
