//! # Ordering
//!
//! Equality is derived on the fields, which is correct because of the canonical form. The order
//! compares `a / b` with `c / d` through `ad` and `bc`, and falls back to comparing the continued
//! fraction expansions when one of those products doesn't fit in the element type.
use std::cmp::Ordering;

use crate::rational::Rational;
use crate::traits::Element;

impl<T: Element> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        cross_compare(self.numerator, self.denominator, other.numerator, other.denominator)
    }
}

impl<T: Element> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Element> PartialEq<T> for Rational<T> {
    fn eq(&self, other: &T) -> bool {
        self.denominator.is_one() && self.numerator == *other
    }
}

impl<T: Element> PartialOrd<T> for Rational<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }

        Some(cross_compare(self.numerator, self.denominator, *other, T::one()))
    }
}

/// Order of `a / b` and `c / d` for positive `b` and `d`.
fn cross_compare<T: Element>(a: T, b: T, c: T, d: T) -> Ordering {
    debug_assert!(b > T::zero() && d > T::zero());

    match (a.checked_mul(&d), b.checked_mul(&c)) {
        (Some(left), Some(right)) => left.cmp(&right),
        _ => continued_fraction_compare(a, b, c, d),
    }
}

/// Order of `a / b` and `c / d` for positive `b` and `d`, without multiplication.
///
/// The integer parts are compared first. If they're equal, the remainders `r / b` and `s / d` are
/// both in `(0, 1)`, and `r / b < s / d` if and only if `d / s < b / r`.
fn continued_fraction_compare<T: Element>(mut a: T, mut b: T, mut c: T, mut d: T) -> Ordering {
    loop {
        let (q_left, r_left) = a.div_mod_floor(&b);
        let (q_right, r_right) = c.div_mod_floor(&d);

        match q_left.cmp(&q_right) {
            Ordering::Equal => {},
            ordering => return ordering,
        }

        match (r_left.is_zero(), r_right.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => (a, b, c, d) = (d, r_right, b, r_left),
        }
    }
}
