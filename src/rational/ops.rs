//! # Operators
//!
//! Standard operator traits, all wrapping the `checked_*` methods of `Rational`. Integers are
//! accepted on both sides of each operator and are treated as fractions with denominator one.
//!
//! Failures panic with the message of the `RationalError` that caused them.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::rational::{Rational, unwrap_op};
use crate::traits::Element;

macro_rules! define_operation {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $checked:ident) => {
        impl<T: Element> $op for Rational<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                unwrap_op(self.$checked(&rhs))
            }
        }

        impl<T: Element> $op<&Rational<T>> for Rational<T> {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                unwrap_op(self.$checked(rhs))
            }
        }

        impl<T: Element> $op<Rational<T>> for &Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: Rational<T>) -> Self::Output {
                unwrap_op(self.$checked(&rhs))
            }
        }

        impl<T: Element> $op for &Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: Self) -> Self::Output {
                unwrap_op(self.$checked(rhs))
            }
        }

        impl<T: Element> $op<T> for Rational<T> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self::Output {
                unwrap_op(self.$checked(&Rational::from_integer(rhs)))
            }
        }

        impl<T: Element> $assign_op for Rational<T> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = unwrap_op(self.$checked(&rhs));
            }
        }

        impl<T: Element> $assign_op<&Rational<T>> for Rational<T> {
            fn $assign_method(&mut self, rhs: &Self) {
                *self = unwrap_op(self.$checked(rhs));
            }
        }

        impl<T: Element> $assign_op<T> for Rational<T> {
            fn $assign_method(&mut self, rhs: T) {
                *self = unwrap_op(self.$checked(&Rational::from_integer(rhs)));
            }
        }
    }
}

define_operation!(Add, add, AddAssign, add_assign, checked_add);
define_operation!(Sub, sub, SubAssign, sub_assign, checked_sub);
define_operation!(Mul, mul, MulAssign, mul_assign, checked_mul);
define_operation!(Div, div, DivAssign, div_assign, checked_div);

/// Operations with a primitive integer on the left hand side.
macro_rules! define_integer_operations {
    ($($t:ty),*) => {
        $(
            impl Add<Rational<$t>> for $t {
                type Output = Rational<$t>;

                fn add(self, rhs: Rational<$t>) -> Self::Output {
                    Rational::from_integer(self) + rhs
                }
            }

            impl Sub<Rational<$t>> for $t {
                type Output = Rational<$t>;

                fn sub(self, rhs: Rational<$t>) -> Self::Output {
                    Rational::from_integer(self) - rhs
                }
            }

            impl Mul<Rational<$t>> for $t {
                type Output = Rational<$t>;

                fn mul(self, rhs: Rational<$t>) -> Self::Output {
                    Rational::from_integer(self) * rhs
                }
            }

            impl Div<Rational<$t>> for $t {
                type Output = Rational<$t>;

                fn div(self, rhs: Rational<$t>) -> Self::Output {
                    Rational::from_integer(self) / rhs
                }
            }
        )*
    }
}

define_integer_operations!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

mod neg {
    use std::ops::Neg;

    use crate::rational::{Rational, unwrap_op};
    use crate::traits::Element;

    /// Panics for nonzero values of unsigned element types.
    impl<T: Element> Neg for Rational<T> {
        type Output = Self;

        fn neg(self) -> Self::Output {
            unwrap_op(self.checked_neg())
        }
    }

    impl<T: Element> Neg for &Rational<T> {
        type Output = Rational<T>;

        fn neg(self) -> Self::Output {
            unwrap_op(self.checked_neg())
        }
    }
}

mod identities {
    use num_traits::{One, Zero};

    use crate::rational::Rational;
    use crate::traits::Element;

    impl<T: Element> Zero for Rational<T> {
        fn zero() -> Self {
            Self::default()
        }

        fn is_zero(&self) -> bool {
            self.numerator.is_zero()
        }
    }

    impl<T: Element> One for Rational<T> {
        fn one() -> Self {
            Self::from_integer(T::one())
        }

        fn is_one(&self) -> bool {
            self.numerator.is_one() && self.denominator.is_one()
        }
    }
}

mod iter {
    use std::iter::{Product, Sum};

    use num_traits::{One, Zero};

    use crate::rational::Rational;
    use crate::traits::Element;

    impl<T: Element> Sum for Rational<T> {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<'a, T: Element> Sum<&'a Rational<T>> for Rational<T> {
        fn sum<I: Iterator<Item=&'a Rational<T>>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<T: Element> Product for Rational<T> {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }

    impl<'a, T: Element> Product<&'a Rational<T>> for Rational<T> {
        fn product<I: Iterator<Item=&'a Rational<T>>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }
}

mod power {
    use num_traits::{Inv, Pow};

    use crate::rational::{Rational, unwrap_op};
    use crate::traits::Element;

    impl<T: Element> Pow<u32> for Rational<T> {
        type Output = Self;

        fn pow(self, exponent: u32) -> Self::Output {
            Rational::pow(&self, exponent)
        }
    }

    /// Panics for zero.
    impl<T: Element> Inv for Rational<T> {
        type Output = Self;

        fn inv(self) -> Self::Output {
            unwrap_op(self.recip())
        }
    }
}

mod convert {
    use num_traits::ToPrimitive;

    use crate::rational::Rational;
    use crate::traits::Element;

    /// Conversions to integers truncate towards zero.
    impl<T: Element> ToPrimitive for Rational<T> {
        fn to_i64(&self) -> Option<i64> {
            (self.numerator / self.denominator).to_i64()
        }

        fn to_u64(&self) -> Option<u64> {
            (self.numerator / self.denominator).to_u64()
        }

        fn to_i128(&self) -> Option<i128> {
            (self.numerator / self.denominator).to_i128()
        }

        fn to_u128(&self) -> Option<u128> {
            (self.numerator / self.denominator).to_u128()
        }

        fn to_f32(&self) -> Option<f32> {
            self.evaluate()
        }

        fn to_f64(&self) -> Option<f64> {
            self.evaluate()
        }
    }
}
