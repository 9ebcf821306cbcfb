//! # Rational numbers
//!
//! Exact fractions over a fixed-width integer type. Values are always stored in canonical form:
//! the numerator and denominator are coprime and the denominator is positive. As a consequence,
//! two rationals are equal if and only if their fields are equal.
//!
//! The element type bounds the size of the values that can be represented. All arithmetic is
//! checked: the `checked_*` methods report results that don't fit as `RationalError::Overflow`,
//! while the operators panic in that case (as they do when dividing by zero).
use std::fmt;

use num_traits::{checked_pow, Float, NumCast};

use crate::error::RationalError;
use crate::float::decompose;
use crate::traits::Element;

mod compare;
mod ops;
mod parse;
mod macros;

/// A fraction `numerator / denominator` in canonical form.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug)]
pub struct Rational<T> {
    numerator: T,
    denominator: T,
}

/// Rational with `i8` numerator and denominator.
pub type Rational8 = Rational<i8>;
/// Rational with `i16` numerator and denominator.
pub type Rational16 = Rational<i16>;
/// Rational with `i32` numerator and denominator.
pub type Rational32 = Rational<i32>;
/// Rational with `i64` numerator and denominator.
pub type Rational64 = Rational<i64>;
/// Rational with `i128` numerator and denominator.
pub type Rational128 = Rational<i128>;
/// Rational with `u8` numerator and denominator.
pub type RationalU8 = Rational<u8>;
/// Rational with `u16` numerator and denominator.
pub type RationalU16 = Rational<u16>;
/// Rational with `u32` numerator and denominator.
pub type RationalU32 = Rational<u32>;
/// Rational with `u64` numerator and denominator.
pub type RationalU64 = Rational<u64>;
/// Rational with `u128` numerator and denominator.
pub type RationalU128 = Rational<u128>;

impl<T: Element> Rational<T> {
    /// Create a new rational and bring it in canonical form.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Any nonzero value, its sign is moved to the numerator.
    ///
    /// # Errors
    ///
    /// `DenominatorZero` if the denominator is zero. `Overflow` if the canonical form can't be
    /// represented, which only happens when the sign of `T::min_value()` has to be flipped.
    pub fn new(numerator: T, denominator: T) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DenominatorZero);
        }
        if numerator.is_zero() {
            return Ok(Self::default());
        }
        // The gcd of two minimal values of a signed type doesn't fit in that type.
        if numerator == denominator {
            return Ok(Self::from_integer(T::one()));
        }

        let gcd = numerator.gcd(&denominator);
        let (numerator, denominator) = (numerator / gcd, denominator / gcd);

        if denominator < T::zero() {
            Ok(Self {
                numerator: negate(numerator)?,
                denominator: negate(denominator)?,
            })
        } else {
            Ok(Self { numerator, denominator })
        }
    }

    /// Create a rational representing an integer.
    pub fn from_integer(value: T) -> Self {
        Self { numerator: value, denominator: T::one() }
    }

    /// Create the rational that a float represents exactly.
    ///
    /// If the denominator of the float's value doesn't fit in `T`, the value is truncated towards
    /// zero to a denominator of the largest power of two that does.
    ///
    /// # Errors
    ///
    /// * `NonFinite` if the value is infinite or NaN.
    /// * `Underflow` if the value is too small to be represented.
    /// * `Overflow` if the value is too large to be represented, or negative while `T` is
    /// unsigned.
    pub fn from_float<F: Float>(value: F) -> Result<Self, RationalError> {
        let (numerator, denominator) = decompose(value)?;
        Self::new(numerator, denominator)
    }

    /// Numerator in canonical form, carries the sign.
    pub fn numerator(&self) -> T {
        self.numerator
    }

    /// Denominator in canonical form, always positive.
    pub fn denominator(&self) -> T {
        self.denominator
    }

    /// Replace the numerator, keeping the denominator, and bring the result in canonical form.
    pub fn set_numerator(&mut self, value: T) -> Result<(), RationalError> {
        self.assign(value, self.denominator)
    }

    /// Replace the denominator, keeping the numerator, and bring the result in canonical form.
    ///
    /// # Errors
    ///
    /// `DenominatorZero` if `value` is zero, in which case `self` is not modified.
    pub fn set_denominator(&mut self, value: T) -> Result<(), RationalError> {
        self.assign(self.numerator, value)
    }

    /// Replace both the numerator and the denominator.
    ///
    /// On failure, `self` is not modified.
    pub fn assign(&mut self, numerator: T, denominator: T) -> Result<(), RationalError> {
        *self = Self::new(numerator, denominator)?;
        Ok(())
    }

    /// Whether the value is an integer.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Whether the value is strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator < T::zero()
    }

    /// Convert to another arithmetic type by dividing the converted numerator by the converted
    /// denominator.
    ///
    /// No rounding happens besides that of the division of `R`: integer targets truncate, float
    /// targets round to nearest.
    ///
    /// # Return value
    ///
    /// `None` if the numerator or the denominator can't be represented by `R`.
    pub fn evaluate<R: NumCast + std::ops::Div<Output=R>>(&self) -> Option<R> {
        let numerator = R::from(self.numerator)?;
        let denominator = R::from(self.denominator)?;

        Some(numerator / denominator)
    }

    /// The multiplicative inverse `denominator / numerator`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the value is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Self::new(self.denominator, self.numerator)
    }

    /// Raise the numerator and denominator to the given power independently.
    pub fn checked_pow(&self, exponent: u32) -> Result<Self, RationalError> {
        let exponent = exponent as usize;
        let numerator = checked_pow(self.numerator, exponent).ok_or(RationalError::Overflow)?;
        let denominator = checked_pow(self.denominator, exponent).ok_or(RationalError::Overflow)?;

        Self::new(numerator, denominator)
    }

    /// Absolute value, which is the absolute value of the numerator over the denominator.
    pub fn checked_abs(&self) -> Result<Self, RationalError> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(*self)
        }
    }

    /// Additive inverse.
    ///
    /// # Errors
    ///
    /// `Overflow` for a negative numerator that has no positive counterpart in `T`, and for any
    /// nonzero value when `T` is unsigned.
    pub fn checked_neg(&self) -> Result<Self, RationalError> {
        Self::new(negate(self.numerator)?, self.denominator)
    }

    /// a / b + c / d = (ad' + cb') / bd' with b' = b / gcd(b, d) and d' = d / gcd(b, d)
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, RationalError> {
        let (left, right, denominator) = self.common_denominator(rhs)?;

        Self::new(left.checked_add(&right).ok_or(RationalError::Overflow)?, denominator)
    }

    /// a / b - c / d = (ad' - cb') / bd' with b' = b / gcd(b, d) and d' = d / gcd(b, d)
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, RationalError> {
        let (left, right, denominator) = self.common_denominator(rhs)?;

        Self::new(left.checked_sub(&right).ok_or(RationalError::Overflow)?, denominator)
    }

    /// a / b * c / d = (a / gcd(a, d)) (c / gcd(c, b)) / (b / gcd(c, b)) (d / gcd(a, d))
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, RationalError> {
        // Denominators are positive, so neither gcd involves two minimal values.
        let left_gcd = self.numerator.gcd(&rhs.denominator);
        let right_gcd = rhs.numerator.gcd(&self.denominator);

        Self::new(
            mul(self.numerator / left_gcd, rhs.numerator / right_gcd)?,
            mul(self.denominator / right_gcd, rhs.denominator / left_gcd)?,
        )
    }

    /// a / b / c / d = ad / bc
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        if rhs.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Self::new(
            mul(self.numerator, rhs.denominator)?,
            mul(self.denominator, rhs.numerator)?,
        )
    }

    /// Add exactly one: (a + b) / b.
    pub fn checked_increment(&self) -> Result<Self, RationalError> {
        let numerator = self.numerator.checked_add(&self.denominator)
            .ok_or(RationalError::Overflow)?;
        Self::new(numerator, self.denominator)
    }

    /// Subtract exactly one: (a - b) / b.
    pub fn checked_decrement(&self) -> Result<Self, RationalError> {
        let numerator = self.numerator.checked_sub(&self.denominator)
            .ok_or(RationalError::Overflow)?;
        Self::new(numerator, self.denominator)
    }

    /// Add one in place.
    ///
    /// # Panics
    ///
    /// If the result doesn't fit in `T`.
    pub fn increment(&mut self) {
        *self = unwrap_op(self.checked_increment());
    }

    /// Subtract one in place.
    ///
    /// # Panics
    ///
    /// If the result doesn't fit in `T`.
    pub fn decrement(&mut self) {
        *self = unwrap_op(self.checked_decrement());
    }

    /// Absolute value.
    ///
    /// # Panics
    ///
    /// If the numerator is `T::min_value()` for a signed `T`.
    pub fn abs(&self) -> Self {
        unwrap_op(self.checked_abs())
    }

    /// Raise to an integer power.
    ///
    /// # Panics
    ///
    /// If the result doesn't fit in `T`.
    pub fn pow(&self, exponent: u32) -> Self {
        unwrap_op(self.checked_pow(exponent))
    }
}

impl<T: Element> Default for Rational<T> {
    fn default() -> Self {
        Self { numerator: T::zero(), denominator: T::one() }
    }
}

impl<T: Element> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: Element> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<T: Element> Rational<T> {
    /// Both numerators expressed over the least common multiple of the denominators.
    fn common_denominator(&self, rhs: &Self) -> Result<(T, T, T), RationalError> {
        let gcd = self.denominator.gcd(&rhs.denominator);
        let (left_factor, right_factor) = (rhs.denominator / gcd, self.denominator / gcd);

        Ok((
            mul(self.numerator, left_factor)?,
            mul(rhs.numerator, right_factor)?,
            mul(self.denominator, left_factor)?,
        ))
    }
}

fn negate<T: Element>(value: T) -> Result<T, RationalError> {
    T::zero().checked_sub(&value).ok_or(RationalError::Overflow)
}

fn mul<T: Element>(left: T, right: T) -> Result<T, RationalError> {
    left.checked_mul(&right).ok_or(RationalError::Overflow)
}

/// Operator traits can't return a `Result`, they panic like primitive integer arithmetic does.
fn unwrap_op<T>(result: Result<T, RationalError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}", error),
    }
}
