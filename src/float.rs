//! # Exact decomposition of floating point numbers
//!
//! A finite float is `sign * mantissa * 2^exponent` for integers `mantissa` and `exponent`, so it
//! is always a rational number whose denominator is a power of two. This module computes that
//! fraction in a fixed-width element type.
use num_traits::{checked_pow, Float, NumCast};

use crate::error::RationalError;
use crate::traits::Element;

/// Decompose a float into the numerator and denominator of the value it represents.
///
/// # Arguments
///
/// * `value`: Any float. Infinite values and NaN are rejected.
///
/// # Return value
///
/// A pair `(numerator, denominator)` with a positive denominator that is a power of two. If the
/// float is representable in `T`, `numerator / denominator` is exactly the input and the pair is
/// coprime.
///
/// If the exact numerator or denominator doesn't fit in `T`, the denominator is the largest power of
/// two for which both do, and the numerator is scaled down by the same factor, truncating towards
/// zero.
///
/// # Errors
///
/// * `NonFinite` for infinite values and NaN.
/// * `Underflow` if scaling down the numerator leaves nothing.
/// * `Overflow` if the integral part of the value doesn't fit in `T`, which includes negative values
/// for unsigned element types.
pub(crate) fn decompose<T: Element, F: Float>(value: F) -> Result<(T, T), RationalError> {
    if !value.is_finite() {
        return Err(RationalError::NonFinite);
    }

    let (mantissa, exponent, sign) = value.integer_decode();
    if mantissa == 0 {
        return Ok((T::zero(), T::one()));
    }

    // An odd mantissa shares no factor with a power of two.
    let trailing = mantissa.trailing_zeros();
    let mantissa = mantissa >> trailing;
    let exponent = <i32 as From<i16>>::from(exponent) + trailing as i32;

    let (magnitude, denominator) = if exponent >= 0 {
        let scale = power_of_two::<T>(exponent.unsigned_abs())?;
        let magnitude = element::<T>(mantissa)?
            .checked_mul(&scale)
            .ok_or(RationalError::Overflow)?;
        (magnitude, T::one())
    } else {
        let shift = exponent.unsigned_abs();
        // `mantissa / 2^shift` truncated to `kept` binary digits after the point.
        let kept = kept_fraction_bits::<T>(mantissa, shift)?;
        let scaled = mantissa.checked_shr(shift - kept).unwrap_or(0);
        if scaled == 0 {
            return Err(RationalError::Underflow);
        }
        (element(scaled)?, power_of_two(kept)?)
    };

    let numerator = if sign < 0 {
        T::zero().checked_sub(&magnitude).ok_or(RationalError::Overflow)?
    } else {
        magnitude
    };

    Ok((numerator, denominator))
}

/// The largest `k` such that `2^k` can be represented by `T`.
fn largest_exponent<T: Element>() -> u32 {
    T::max_value().count_ones() - 1
}

/// The number of binary fraction digits to keep of `mantissa / 2^shift`.
///
/// This is the largest `k <= shift` such that both `2^k` and `mantissa / 2^(shift - k)` fit in `T`.
fn kept_fraction_bits<T: Element>(mantissa: u64, shift: u32) -> Result<u32, RationalError> {
    let limit = largest_exponent::<T>();
    // A magnitude fits if it has at most `limit + 1` significant bits.
    let significant = u64::BITS - mantissa.leading_zeros();
    let room = (limit + 1 + shift).checked_sub(significant).ok_or(RationalError::Overflow)?;

    Ok(shift.min(limit).min(room))
}

fn power_of_two<T: Element>(exponent: u32) -> Result<T, RationalError> {
    checked_pow(T::one() + T::one(), exponent as usize).ok_or(RationalError::Overflow)
}

fn element<T: Element>(mantissa: u64) -> Result<T, RationalError> {
    <T as NumCast>::from(mantissa).ok_or(RationalError::Overflow)
}
