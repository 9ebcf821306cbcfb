//! # Traits
//!
//! The capabilities the rational type requires from its element type, and uniform access to the
//! parts of a fraction, whether that fraction is a `Rational` or a plain number.
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

use num_integer::Integer;
use num_traits::PrimInt;

use crate::rational::Rational;

/// Integer types that can be the numerator and denominator of a `Rational`.
///
/// Requires the four arithmetic operations (also in checked form), comparison, a greatest common
/// divisor and a textual representation. Negation is not required: unsigned element types never
/// produce a negative denominator.
///
/// Automatically implemented for all types satisfying the trait's bounds, which includes all
/// primitive integers.
pub trait Element:
    PrimInt +
    Integer +
    Hash +
    Display +
    Debug +
    FromStr<Err=ParseIntError>
{
}
impl<T> Element for T
where
    T: PrimInt + Integer + Hash + Display + Debug + FromStr<Err=ParseIntError>,
{
}

/// Access to the numerator and denominator of a number.
///
/// Plain numbers are fractions with a denominator of one. This allows the same code to be written
/// for both rationals and integers.
pub trait Fraction {
    /// Type of the numerator and denominator.
    type Part;

    /// The numerator, in canonical form.
    fn numerator(&self) -> Self::Part;
    /// The denominator, in canonical form. Always positive.
    fn denominator(&self) -> Self::Part;
}

impl<T: Element> Fraction for Rational<T> {
    type Part = T;

    fn numerator(&self) -> T {
        Rational::numerator(self)
    }

    fn denominator(&self) -> T {
        Rational::denominator(self)
    }
}

macro_rules! impl_fraction {
    ($($t:ty, $one:expr;)*) => {
        $(
            impl Fraction for $t {
                type Part = $t;

                fn numerator(&self) -> Self::Part {
                    *self
                }

                fn denominator(&self) -> Self::Part {
                    $one
                }
            }
        )*
    }
}
impl_fraction!(
    i8, 1; i16, 1; i32, 1; i64, 1; i128, 1; isize, 1;
    u8, 1; u16, 1; u32, 1; u64, 1; u128, 1; usize, 1;
    f32, 1.0; f64, 1.0;
);

/// Numerator of a rational, or the value itself for a plain number.
pub fn numerator<F: Fraction>(value: &F) -> F::Part {
    value.numerator()
}

/// Denominator of a rational, or one for a plain number.
pub fn denominator<F: Fraction>(value: &F) -> F::Part {
    value.denominator()
}

#[cfg(test)]
mod test {
    use crate::rational::Rational;
    use crate::traits::{denominator, Fraction, numerator};

    #[test]
    fn plain_numbers() {
        assert_eq!(numerator(&7_i32), 7);
        assert_eq!(denominator(&7_i32), 1);
        assert_eq!(numerator(&7_u64), 7);
        assert_eq!(denominator(&7_u64), 1);
        assert_eq!(numerator(&-2.5_f64), -2.5);
        assert_eq!(denominator(&-2.5_f64), 1.0);
    }

    #[test]
    fn rationals() {
        let value = Rational::new(6_i64, -4).unwrap();
        assert_eq!(numerator(&value), -3);
        assert_eq!(denominator(&value), 2);
    }

    /// Code written once for both kinds of numbers.
    #[test]
    fn uniform() {
        fn is_integral<F: Fraction<Part=i32>>(value: F) -> bool {
            value.denominator() == 1
        }

        assert!(is_integral(5));
        assert!(is_integral(Rational::new(10, 2).unwrap()));
        assert!(!is_integral(Rational::new(10, 4).unwrap()));
    }
}
