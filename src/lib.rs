//! # Exact rational numbers over fixed-width integers
//!
//! A `Rational<T>` is a fraction of two integers of type `T`, kept in canonical form at all times:
//! the numerator and denominator share no common factor and the denominator is positive.
//!
//! Values can be created from a numerator and denominator, from an integer, from text of the form
//! `numerator/denominator` and exactly from floating point numbers:
//!
//! ```
//! use fixed_rational::{Rational64, R64};
//!
//! let half = Rational64::new(3, 6)?;
//! assert_eq!(half, R64!(1, 2));
//! assert_eq!(Rational64::from_float(0.5)?, half);
//! assert_eq!("-4/8".parse::<Rational64>()?, -half);
//! assert_eq!((half + 1).to_string(), "3/2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The size of the element type bounds the values that can be represented. Arithmetic is checked:
//! results that don't fit are reported, never wrapped.
#![warn(missing_docs)]

pub mod error;
mod float;
pub mod rational;
pub mod traits;

pub use error::{ParseRationalError, RationalError};
pub use rational::{
    Rational,
    Rational8, Rational16, Rational32, Rational64, Rational128,
    RationalU8, RationalU16, RationalU32, RationalU64, RationalU128,
};
pub use traits::{denominator, Element, Fraction, numerator};
