//! # Use of the public interface
//!
//! Literals of every width, generic code over element types and over plain numbers, and reading
//! values from text.
use fixed_rational::{Element, Rational, RationalError};

/// # Scenarios
#[allow(missing_docs)]
mod test;

/// Average of a nonempty slice of values.
///
/// # Errors
///
/// `DivisionByZero` for an empty slice, `Overflow` if an intermediate sum doesn't fit.
fn mean<T: Element>(values: &[Rational<T>]) -> Result<Rational<T>, RationalError> {
    let mut total = Rational::<T>::default();
    let mut count = Rational::<T>::default();
    for value in values {
        total = total.checked_add(value)?;
        count = count.checked_increment()?;
    }

    total.checked_div(&count)
}

/// Convergents of the continued fraction `[1; 2, 2, 2, ...]` of the square root of two.
fn sqrt_two_convergents<T: Element>(count: usize) -> Result<Vec<Rational<T>>, RationalError> {
    let one = Rational::from_integer(T::one());
    let mut current = one;
    let mut convergents = Vec::with_capacity(count);
    for _ in 0..count {
        convergents.push(current);
        // x -> 1 + 1 / (1 + x)
        current = one.checked_add(&one.checked_add(&current)?.recip()?)?;
    }

    Ok(convergents)
}
