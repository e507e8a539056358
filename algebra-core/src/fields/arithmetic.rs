/// Derives the by-value and by-reference binary operators, their assigning
/// variants, and `Sum`/`Product` from a type's `AddAssign<&Self>`,
/// `SubAssign<&Self>` and `MulAssign<&Self>` implementations.
macro_rules! impl_field_ops_from_ref {
    ($type: ident, $params: ident) => {
        impl_field_ops_from_ref!(@binary $type, $params, Add, add, AddAssign, add_assign);
        impl_field_ops_from_ref!(@binary $type, $params, Sub, sub, SubAssign, sub_assign);
        impl_field_ops_from_ref!(@binary $type, $params, Mul, mul, MulAssign, mul_assign);

        #[allow(unused_qualifications)]
        impl<P: $params> core::iter::Sum<Self> for $type<P> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), core::ops::Add::add)
            }
        }

        #[allow(unused_qualifications)]
        impl<'a, P: $params> core::iter::Sum<&'a Self> for $type<P> {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), core::ops::Add::add)
            }
        }

        #[allow(unused_qualifications)]
        impl<P: $params> core::iter::Product<Self> for $type<P> {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::one(), core::ops::Mul::mul)
            }
        }

        #[allow(unused_qualifications)]
        impl<'a, P: $params> core::iter::Product<&'a Self> for $type<P> {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::one(), core::ops::Mul::mul)
            }
        }
    };

    (
        @binary $type: ident,
        $params: ident,
        $op: ident,
        $op_fn: ident,
        $assign: ident,
        $assign_fn: ident
    ) => {
        #[allow(unused_qualifications)]
        impl<P: $params> core::ops::$op<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, other: Self) -> Self {
                let mut result = self;
                core::ops::$assign::$assign_fn(&mut result, &other);
                result
            }
        }

        #[allow(unused_qualifications)]
        impl<'a, P: $params> core::ops::$op<&'a Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, other: &'a Self) -> Self {
                let mut result = self;
                core::ops::$assign::$assign_fn(&mut result, other);
                result
            }
        }

        #[allow(unused_qualifications)]
        impl<'a, 'b, P: $params> core::ops::$op<&'b $type<P>> for &'a $type<P> {
            type Output = $type<P>;

            #[inline]
            fn $op_fn(self, other: &'b $type<P>) -> $type<P> {
                let mut result = self.clone();
                core::ops::$assign::$assign_fn(&mut result, other);
                result
            }
        }

        #[allow(unused_qualifications)]
        impl<P: $params> core::ops::$assign<Self> for $type<P> {
            #[inline]
            fn $assign_fn(&mut self, other: Self) {
                core::ops::$assign::$assign_fn(self, &other)
            }
        }
    };
}
